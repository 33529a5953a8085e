//! Casting configuration.
//!
//! Plain serde struct so callers can load it from whatever format they
//! already use. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::scoring::rules::DEFAULT_PREFERENCE_BONUS;
use crate::scoring::{MatchScore, ScoringEngine};

/// Knobs for the automatic caster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastingConfig {
    /// Score added when a role's type is among the student's preferences.
    pub preference_bonus: MatchScore,
    /// Fill optional roles from the students left after every required
    /// role has been processed.
    pub fill_optional_roles: bool,
}

impl Default for CastingConfig {
    fn default() -> Self {
        Self {
            preference_bonus: DEFAULT_PREFERENCE_BONUS,
            fill_optional_roles: false,
        }
    }
}

impl CastingConfig {
    /// Sets the preference bonus.
    pub fn with_preference_bonus(mut self, bonus: MatchScore) -> Self {
        self.preference_bonus = bonus;
        self
    }

    /// Enables or disables the optional-role pass.
    pub fn with_optional_roles(mut self, enabled: bool) -> Self {
        self.fill_optional_roles = enabled;
        self
    }

    /// Standard scoring engine for this configuration.
    pub fn scoring_engine(&self) -> ScoringEngine {
        ScoringEngine::standard(self.preference_bonus)
    }
}
