//! Greedy best-fit caster.
//!
//! # Algorithm
//!
//! 1. Start from an empty assignment; the pool is the whole roster.
//! 2. Walk the required roles in case order.
//! 3. For each role, score every pooled student and take the strictly
//!    best one (earliest in roster order on ties).
//! 4. Record the placement and drop the student from the pool for the
//!    rest of the pass.
//! 5. If enabled, repeat 3-4 for optional roles with whoever is left.
//!
//! A role met with an empty pool stays unfilled. That is a normal outcome,
//! reported through completeness, not an error.
//!
//! # Complexity
//! O(r * n) score evaluations, where r=roles and n=students.

use tracing::{debug, warn};

use crate::config::CastingConfig;
use crate::models::{Assignment, CaseRole, Student};
use crate::scoring::ScoringEngine;

/// Greedy best-fit role caster.
///
/// # Example
///
/// ```
/// use u_casting::casting::GreedyCaster;
/// use u_casting::models::{CaseRole, RoleType, Student};
///
/// let roster = vec![
///     Student::new("A", 85).with_preference(RoleType::Judge),
///     Student::new("B", 92).with_preference(RoleType::DefenseCounsel),
/// ];
/// let roles = vec![
///     CaseRole::required("judge", RoleType::Judge),
///     CaseRole::required("defense", RoleType::DefenseCounsel),
/// ];
///
/// let assignment = GreedyCaster::new().auto_assign(&roster, &roles);
/// assert_eq!(assignment.student_for("judge"), Some("A"));
/// assert_eq!(assignment.student_for("defense"), Some("B"));
/// ```
#[derive(Debug, Clone)]
pub struct GreedyCaster {
    engine: ScoringEngine,
    config: CastingConfig,
}

impl GreedyCaster {
    /// Creates a caster with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CastingConfig::default())
    }

    /// Creates a caster whose scoring follows `config`.
    pub fn with_config(config: CastingConfig) -> Self {
        Self {
            engine: config.scoring_engine(),
            config,
        }
    }

    /// Replaces the scoring engine.
    ///
    /// The engine takes over scoring entirely: `config().preference_bonus`
    /// is no longer applied. The rest of the configuration still is.
    pub fn with_engine(mut self, engine: ScoringEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Scoring engine in use.
    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Configuration in use.
    pub fn config(&self) -> &CastingConfig {
        &self.config
    }

    /// Computes a fresh assignment for `roles` from `roster`.
    ///
    /// Never incremental: any earlier assignment is irrelevant to the result.
    pub fn auto_assign(&self, roster: &[Student], roles: &[CaseRole]) -> Assignment {
        let mut assignment = Assignment::new();
        let mut pool: Vec<&Student> = roster.iter().collect();

        for role in roles.iter().filter(|r| r.required) {
            if !self.place(role, &mut pool, &mut assignment) {
                warn!(role = %role.id, "required role left unfilled: pool exhausted");
            }
        }

        if self.config.fill_optional_roles {
            for role in roles.iter().filter(|r| !r.required) {
                self.place(role, &mut pool, &mut assignment);
            }
        }

        debug!(
            filled = assignment.len(),
            roles = roles.len(),
            unplaced = pool.len(),
            "auto-assignment finished"
        );
        assignment
    }

    /// Places the best pooled student into `role`. Returns `false` if the
    /// pool was empty.
    fn place(
        &self,
        role: &CaseRole,
        pool: &mut Vec<&Student>,
        assignment: &mut Assignment,
    ) -> bool {
        let Some(idx) = self.engine.select_best(pool.as_slice(), role) else {
            return false;
        };
        // Vec::remove keeps the remaining students in roster order.
        let student = pool.remove(idx);
        debug!(
            role = %role.id,
            student = %student.id,
            score = self.engine.score(student, role),
            "role placed"
        );
        assignment.set(role.id.clone(), student.id.clone());
        true
    }
}

impl Default for GreedyCaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Auto-assigns required roles with the standard scoring.
///
/// Shorthand for `GreedyCaster::new().auto_assign(roster, roles)`.
pub fn auto_assign(roster: &[Student], roles: &[CaseRole]) -> Assignment {
    GreedyCaster::new().auto_assign(roster, roles)
}
