//! Built-in match rules.
//!
//! The standard casting score is `performance + bonus`, where the bonus is
//! earned when the role's type is among the student's preferences.

use super::{MatchRule, MatchScore};
use crate::models::{CaseRole, Student};

/// Default bonus for a preferred role type.
pub const DEFAULT_PREFERENCE_BONUS: MatchScore = 20;

/// Student performance, taken as is.
#[derive(Debug, Clone, Copy)]
pub struct Performance;

impl MatchRule for Performance {
    fn name(&self) -> &'static str {
        "PERF"
    }

    fn evaluate(&self, student: &Student, _role: &CaseRole) -> MatchScore {
        MatchScore::from(student.performance)
    }

    fn description(&self) -> &'static str {
        "Student performance score"
    }
}

/// Flat bonus when the student prefers the role's type.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceBonus {
    /// Score added on a preference match.
    pub bonus: MatchScore,
}

impl Default for PreferenceBonus {
    fn default() -> Self {
        Self {
            bonus: DEFAULT_PREFERENCE_BONUS,
        }
    }
}

impl PreferenceBonus {
    /// Creates a preference rule with a custom bonus.
    pub fn with_bonus(bonus: MatchScore) -> Self {
        Self { bonus }
    }
}

impl MatchRule for PreferenceBonus {
    fn name(&self) -> &'static str {
        "PREF"
    }

    fn evaluate(&self, student: &Student, role: &CaseRole) -> MatchScore {
        if student.prefers(role.role_type) {
            self.bonus
        } else {
            0
        }
    }

    fn description(&self) -> &'static str {
        "Preferred role type bonus"
    }
}
