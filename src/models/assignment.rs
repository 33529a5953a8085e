//! Assignment (solution) model.
//!
//! An assignment maps role ids to student ids. It is a partial function:
//! a role has at most one student, and roles without a key are simply
//! unfilled. The automatic caster never places a student twice; the
//! permissive manual path can, so double-bookings are reportable rather
//! than impossible.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CaseRole;

/// Role → student mapping for one case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    entries: BTreeMap<String, String>,
}

/// A student mapped to more than one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleBooking {
    /// The over-booked student.
    pub student_id: String,
    /// Every role currently held by that student, sorted by role id.
    pub role_ids: Vec<String>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or overwrites the student for a role.
    ///
    /// Returns the previously assigned student, if any.
    pub fn set(
        &mut self,
        role_id: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(role_id.into(), student_id.into())
    }

    /// Removes the entry for a role. Returns the removed student, if any.
    pub fn clear(&mut self, role_id: &str) -> Option<String> {
        self.entries.remove(role_id)
    }

    /// Student assigned to a role.
    pub fn student_for(&self, role_id: &str) -> Option<&str> {
        self.entries.get(role_id).map(String::as_str)
    }

    /// Roles held by a student, sorted by role id.
    pub fn roles_for(&self, student_id: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, s)| s.as_str() == student_id)
            .map(|(r, _)| r.as_str())
            .collect()
    }

    /// Whether the student holds any role.
    pub fn is_assigned(&self, student_id: &str) -> bool {
        self.entries.values().any(|s| s == student_id)
    }

    /// Whether every required role in `roles` has an entry.
    ///
    /// Vacuously true when `roles` has no required role.
    pub fn is_complete(&self, roles: &[CaseRole]) -> bool {
        roles
            .iter()
            .filter(|r| r.required)
            .all(|r| self.entries.contains_key(&r.id))
    }

    /// Required roles without an entry, in role-list order.
    pub fn missing_required<'a>(&self, roles: &'a [CaseRole]) -> Vec<&'a CaseRole> {
        roles
            .iter()
            .filter(|r| r.required && !self.entries.contains_key(&r.id))
            .collect()
    }

    /// Students holding more than one role, sorted by student id.
    pub fn double_bookings(&self) -> Vec<DoubleBooking> {
        let mut by_student: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for (role, student) in &self.entries {
            by_student.entry(student.as_str()).or_default().push(role.clone());
        }

        by_student
            .into_iter()
            .filter(|(_, roles)| roles.len() > 1)
            .map(|(student, role_ids)| DoubleBooking {
                student_id: student.to_string(),
                role_ids,
            })
            .collect()
    }

    /// Iterates `(role_id, student_id)` pairs sorted by role id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(r, s)| (r.as_str(), s.as_str()))
    }

    /// Number of filled roles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no role is filled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether every required role has an assigned student.
///
/// Gate for the caller's confirm action; has no side effects.
pub fn is_complete(assignment: &Assignment, roles: &[CaseRole]) -> bool {
    assignment.is_complete(roles)
}
