//! Input validation for casting.
//!
//! The engine trusts its inputs; these checks belong at the boundary where
//! rosters, cases, and operator actions enter. Detects:
//! - Duplicate or empty IDs
//! - Performance scores above the 0-100 range
//! - Manual actions naming roles or students that don't exist

use crate::models::{Case, Roster, MAX_PERFORMANCE};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An entity has an empty ID.
    EmptyId,
    /// A performance score is outside 0-100.
    PerformanceOutOfRange,
    /// A manual action references a role the case doesn't have.
    UnknownRole,
    /// A manual action references a student not on the roster.
    UnknownStudent,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster and case before casting.
///
/// Checks:
/// 1. No empty student IDs, no duplicate student IDs
/// 2. Every performance score is at most 100
/// 3. No empty role IDs, no duplicate role IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(roster: &Roster, case: &Case) -> ValidationResult {
    let mut errors = Vec::new();

    let mut student_ids = HashSet::new();
    for s in roster {
        if s.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Student with empty ID",
            ));
        } else if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }

        if s.performance > MAX_PERFORMANCE {
            errors.push(ValidationError::new(
                ValidationErrorKind::PerformanceOutOfRange,
                format!(
                    "Student '{}' has performance {} (max {MAX_PERFORMANCE})",
                    s.id, s.performance
                ),
            ));
        }
    }

    let mut role_ids = HashSet::new();
    for r in &case.roles {
        if r.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Role with empty ID in case '{}'", case.id),
            ));
        } else if !role_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate role ID: {}", r.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a manual "assign role to student" action.
pub fn validate_manual(
    roster: &Roster,
    case: &Case,
    role_id: &str,
    student_id: &str,
) -> Result<(), ValidationError> {
    validate_role(case, role_id)?;
    if !roster.contains(student_id) {
        return Err(ValidationError::new(
            ValidationErrorKind::UnknownStudent,
            format!("Unknown student '{student_id}'"),
        ));
    }
    Ok(())
}

/// Validates that `role_id` names a role of `case`.
pub fn validate_role(case: &Case, role_id: &str) -> Result<(), ValidationError> {
    if case.role(role_id).is_none() {
        return Err(ValidationError::new(
            ValidationErrorKind::UnknownRole,
            format!("Case '{}' has no role '{role_id}'", case.id),
        ));
    }
    Ok(())
}
