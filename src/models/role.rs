//! Case role model.
//!
//! A case is one legal-simulation exercise with a fixed, ordered set of
//! roles. Role order is significant: the auto-assignment pass walks roles
//! in exactly the order the case lists them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Function a participant plays within a case.
///
/// Shared between [`CaseRole::role_type`] and a student's preferred role
/// types, so a preference matches a role by type, not by role id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleType {
    Judge,
    DefenseCounsel,
    Prosecutor,
    Clerk,
    Witness,
    Expert,
}

impl RoleType {
    /// Every role type, in declaration order.
    pub const ALL: [RoleType; 6] = [
        RoleType::Judge,
        RoleType::DefenseCounsel,
        RoleType::Prosecutor,
        RoleType::Clerk,
        RoleType::Witness,
        RoleType::Expert,
    ];

    /// Wire name (kebab-case).
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Judge => "judge",
            RoleType::DefenseCounsel => "defense-counsel",
            RoleType::Prosecutor => "prosecutor",
            RoleType::Clerk => "clerk",
            RoleType::Witness => "witness",
            RoleType::Expert => "expert",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`RoleType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role type '{0}'")]
pub struct ParseRoleTypeError(pub String);

impl FromStr for RoleType {
    type Err = ParseRoleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseRoleTypeError(s.to_string()))
    }
}

/// Difficulty label of a role. Informational only; scoring ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
}

/// A role within a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRole {
    /// Unique role identifier within the case.
    pub id: String,
    /// Human-readable name (e.g., "Presiding Judge").
    pub name: String,
    /// Role classification, matched against student preferences.
    #[serde(rename = "type")]
    pub role_type: RoleType,
    /// Difficulty label.
    pub difficulty: Difficulty,
    /// Whether the case cannot be confirmed without this role filled.
    pub required: bool,
}

impl CaseRole {
    /// Creates a role with the given flag and medium difficulty.
    pub fn new(id: impl Into<String>, role_type: RoleType, required: bool) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role_type,
            difficulty: Difficulty::default(),
            required,
        }
    }

    /// Creates a required role.
    pub fn required(id: impl Into<String>, role_type: RoleType) -> Self {
        Self::new(id, role_type, true)
    }

    /// Creates an optional role.
    pub fn optional(id: impl Into<String>, role_type: RoleType) -> Self {
        Self::new(id, role_type, false)
    }

    /// Sets the role name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the difficulty label.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// A legal-case simulation: an identifier plus its ordered role list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Unique case identifier.
    pub id: String,
    /// Case title.
    pub name: String,
    /// Roles, in the order the case defines them.
    pub roles: Vec<CaseRole>,
}

impl Case {
    /// Creates an empty case.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the case title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a role, keeping insertion order.
    pub fn with_role(mut self, role: CaseRole) -> Self {
        self.roles.push(role);
        self
    }

    /// Finds a role by id.
    pub fn role(&self, role_id: &str) -> Option<&CaseRole> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    /// Required roles, in case order.
    pub fn required_roles(&self) -> impl Iterator<Item = &CaseRole> {
        self.roles.iter().filter(|r| r.required)
    }

    /// Optional roles, in case order.
    pub fn optional_roles(&self) -> impl Iterator<Item = &CaseRole> {
        self.roles.iter().filter(|r| !r.required)
    }

    /// Number of roles.
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}
