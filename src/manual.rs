//! Manual assignment by an operator.
//!
//! Value-in, value-out setters over [`Assignment`]. The permissive pair
//! (`assign` / `unassign`) mirrors what an operator can click; it does not
//! stop a student from holding two roles. `assign_exclusive` is the strict
//! variant for callers that want the no-double-booking rule enforced.

use thiserror::Error;

use crate::models::Assignment;

/// Rejection from the exclusive manual path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The student already holds a different role.
    #[error("student '{student_id}' is already assigned to role '{role_id}'")]
    StudentAlreadyAssigned { student_id: String, role_id: String },
}

/// Sets or overwrites the student for `role_id`.
///
/// Does not check whether `student_id` already holds another role.
pub fn assign(mut assignment: Assignment, role_id: &str, student_id: &str) -> Assignment {
    assignment.set(role_id, student_id);
    assignment
}

/// Removes the entry for `role_id`. No-op if absent.
pub fn unassign(mut assignment: Assignment, role_id: &str) -> Assignment {
    assignment.clear(role_id);
    assignment
}

/// Like [`assign`], but refuses a student who holds a different role.
///
/// Re-assigning a student to the role they already hold succeeds.
pub fn assign_exclusive(
    assignment: Assignment,
    role_id: &str,
    student_id: &str,
) -> Result<Assignment, AssignError> {
    if let Some(held) = assignment
        .roles_for(student_id)
        .into_iter()
        .find(|r| *r != role_id)
    {
        return Err(AssignError::StudentAlreadyAssigned {
            student_id: student_id.to_string(),
            role_id: held.to_string(),
        });
    }
    Ok(assign(assignment, role_id, student_id))
}
