//! Rule engine for multi-rule match scoring.
//!
//! Combines match rules as an integer weighted sum and picks the
//! best-fitting candidate for a role.

use std::sync::Arc;

use super::rules::{Performance, PreferenceBonus};
use super::{MatchRule, MatchScore};
use crate::models::{CaseRole, Student};

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn MatchRule>,
    weight: MatchScore,
}

impl WeightedRule {
    fn weighted(&self, student: &Student, role: &CaseRole) -> MatchScore {
        self.rule.evaluate(student, role).saturating_mul(self.weight)
    }
}

/// A composable scoring engine.
///
/// The total score of a (student, role) pair is the sum of every rule's
/// score times its weight. Arithmetic saturates at the `MatchScore` bounds,
/// so extreme bonuses or weights clamp instead of overflowing.
///
/// # Example
/// ```
/// use u_casting::scoring::{rules, ScoringEngine};
///
/// let engine = ScoringEngine::new()
///     .with_rule(rules::Performance)
///     .with_weighted_rule(rules::PreferenceBonus::with_bonus(10), 2);
/// assert_eq!(engine.rule_count(), 2);
/// ```
#[derive(Clone)]
pub struct ScoringEngine {
    rules: Vec<WeightedRule>,
}

impl ScoringEngine {
    /// Creates an empty engine. Every pair scores 0.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Standard casting score: performance plus `bonus` on a preferred type.
    pub fn standard(bonus: MatchScore) -> Self {
        Self::new()
            .with_rule(Performance)
            .with_rule(PreferenceBonus::with_bonus(bonus))
    }

    /// Adds a rule with weight 1.
    pub fn with_rule<R: MatchRule + 'static>(self, rule: R) -> Self {
        self.with_weighted_rule(rule, 1)
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: MatchRule + 'static>(
        mut self,
        rule: R,
        weight: MatchScore,
    ) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Total weighted score of a student for a role.
    pub fn score(&self, student: &Student, role: &CaseRole) -> MatchScore {
        self.rules
            .iter()
            .map(|wr| wr.weighted(student, role))
            .fold(0, MatchScore::saturating_add)
    }

    /// Weighted score contributed by each rule, in rule order.
    pub fn evaluate(&self, student: &Student, role: &CaseRole) -> Vec<MatchScore> {
        self.rules
            .iter()
            .map(|wr| wr.weighted(student, role))
            .collect()
    }

    /// Index of the best candidate for `role`.
    ///
    /// Only a strictly greater score replaces the current best, so ties
    /// resolve to the earliest candidate. Returns `None` for no candidates.
    pub fn select_best(&self, candidates: &[&Student], role: &CaseRole) -> Option<usize> {
        let mut best: Option<(usize, MatchScore)> = None;
        for (idx, student) in candidates.iter().enumerate() {
            let score = self.score(student, role);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((idx, score)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard(super::rules::DEFAULT_PREFERENCE_BONUS)
    }
}

impl std::fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
