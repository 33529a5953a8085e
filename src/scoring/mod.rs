//! Match scoring rules and rule engine for casting.
//!
//! Scores how well a student fits a role. The automatic caster asks the
//! engine for the best-scoring candidate of each role in turn.
//!
//! # Usage
//!
//! ```
//! use u_casting::models::{CaseRole, RoleType, Student};
//! use u_casting::scoring::ScoringEngine;
//!
//! let engine = ScoringEngine::standard(20);
//! let role = CaseRole::required("judge", RoleType::Judge);
//! let ana = Student::new("S1", 85).with_preference(RoleType::Judge);
//! let ben = Student::new("S2", 92);
//!
//! assert_eq!(engine.score(&ana, &role), 105);
//! assert_eq!(engine.select_best(&[&ana, &ben], &role), Some(0));
//! ```

mod engine;
pub mod rules;

pub use engine::ScoringEngine;

use crate::models::{CaseRole, Student};
use std::fmt::Debug;

/// Score returned by a match rule.
///
/// **Higher score = better fit.** Integer so that ties are exact.
pub type MatchScore = i32;

/// A rule contributing to a student's fit for a role.
pub trait MatchRule: Send + Sync + Debug {
    /// Rule name (e.g., "PERF").
    fn name(&self) -> &'static str;

    /// Evaluates the fit of `student` for `role`. Higher = better.
    fn evaluate(&self, student: &Student, role: &CaseRole) -> MatchScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
