//! Single-case casting session.
//!
//! Owns the current [`Assignment`] for one roster and one case, validates
//! operator actions against them, and gates confirmation on completeness.
//! Auto-assignment is computed in full before it replaces the current
//! value, so a partial result is never observable.

use thiserror::Error;
use tracing::{debug, info};

use crate::casting::{CastingReport, GreedyCaster};
use crate::manual::{self, AssignError};
use crate::models::{Assignment, Case, CaseRole, Roster};
use crate::validation::{self, ValidationError};

/// Errors raised at the session boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The roster or case failed validation.
    #[error("invalid casting input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// An operator action referenced an unknown role or student.
    #[error(transparent)]
    InvalidAction(#[from] ValidationError),
    /// Exclusive session refused a double-booking.
    #[error(transparent)]
    Assign(#[from] AssignError),
    /// Confirmation attempted with required roles unfilled.
    #[error("cannot confirm: required roles unfilled: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Editing session for one case.
///
/// # Example
///
/// ```
/// use u_casting::models::{Case, CaseRole, RoleType, Roster, Student};
/// use u_casting::session::CastingSession;
///
/// let roster = Roster::new(vec![Student::new("S1", 80), Student::new("S2", 70)]);
/// let case = Case::new("C1")
///     .with_role(CaseRole::required("judge", RoleType::Judge))
///     .with_role(CaseRole::required("clerk", RoleType::Clerk));
///
/// let mut session = CastingSession::new(roster, case).unwrap();
/// session.auto_assign();
/// assert!(session.is_complete());
/// let confirmed = session.confirm().unwrap();
/// assert_eq!(confirmed.student_for("judge"), Some("S1"));
/// ```
#[derive(Debug, Clone)]
pub struct CastingSession {
    roster: Roster,
    case: Case,
    assignment: Assignment,
    caster: GreedyCaster,
    exclusive: bool,
}

impl CastingSession {
    /// Starts a session with an empty assignment.
    ///
    /// Fails if the roster or case does not pass [`validation::validate_input`].
    pub fn new(roster: Roster, case: Case) -> Result<Self, SessionError> {
        validation::validate_input(&roster, &case).map_err(SessionError::InvalidInput)?;
        debug!(
            case = %case.id,
            students = roster.len(),
            roles = case.role_count(),
            "casting session opened"
        );
        Ok(Self {
            roster,
            case,
            assignment: Assignment::new(),
            caster: GreedyCaster::new(),
            exclusive: false,
        })
    }

    /// Uses the given caster for auto-assignment.
    pub fn with_caster(mut self, caster: GreedyCaster) -> Self {
        self.caster = caster;
        self
    }

    /// Refuses manual assignments that would double-book a student.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// Assigns a student to a role.
    ///
    /// Both ids must exist. In an exclusive session a student holding a
    /// different role is rejected; otherwise the assignment is permissive.
    pub fn assign(&mut self, role_id: &str, student_id: &str) -> Result<(), SessionError> {
        validation::validate_manual(&self.roster, &self.case, role_id, student_id)?;
        self.assignment = if self.exclusive {
            manual::assign_exclusive(self.assignment.clone(), role_id, student_id)?
        } else {
            manual::assign(std::mem::take(&mut self.assignment), role_id, student_id)
        };
        debug!(role = role_id, student = student_id, "manual assignment");
        Ok(())
    }

    /// Clears a role. The role must exist; clearing an unfilled role is a no-op.
    pub fn unassign(&mut self, role_id: &str) -> Result<(), SessionError> {
        validation::validate_role(&self.case, role_id)?;
        let current = std::mem::take(&mut self.assignment);
        self.assignment = manual::unassign(current, role_id);
        debug!(role = role_id, "manual unassignment");
        Ok(())
    }

    /// Replaces the current assignment with a fresh automatic one.
    pub fn auto_assign(&mut self) -> &Assignment {
        let fresh = self.caster.auto_assign(self.roster.students(), &self.case.roles);
        info!(
            case = %self.case.id,
            filled = fresh.len(),
            complete = fresh.is_complete(&self.case.roles),
            "auto-assignment applied"
        );
        self.assignment = fresh;
        &self.assignment
    }

    /// Current assignment.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Roster in use.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Case in use.
    pub fn case(&self) -> &Case {
        &self.case
    }

    /// Whether every required role is filled.
    pub fn is_complete(&self) -> bool {
        self.assignment.is_complete(&self.case.roles)
    }

    /// Required roles still unfilled, in case order.
    pub fn missing_required(&self) -> Vec<&CaseRole> {
        self.assignment.missing_required(&self.case.roles)
    }

    /// Quality summary of the current assignment.
    pub fn report(&self) -> CastingReport {
        CastingReport::calculate(&self.assignment, &self.roster, &self.case, self.caster.engine())
    }

    /// Ends the session, handing back the assignment.
    ///
    /// Fails with [`SessionError::Incomplete`] while required roles are unfilled.
    pub fn confirm(self) -> Result<Assignment, SessionError> {
        let missing: Vec<String> = self
            .missing_required()
            .into_iter()
            .map(|r| r.id.clone())
            .collect();
        if !missing.is_empty() {
            return Err(SessionError::Incomplete { missing });
        }
        info!(case = %self.case.id, filled = self.assignment.len(), "casting confirmed");
        Ok(self.assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CastingConfig;
    use crate::models::{RoleType, Student};
    use crate::validation::ValidationErrorKind;

    fn roster() -> Roster {
        Roster::new(vec![
            Student::new("A", 85).with_preference(RoleType::Judge),
            Student::new("B", 92).with_preference(RoleType::DefenseCounsel),
            Student::new("C", 50),
        ])
    }

    fn case() -> Case {
        Case::new("C1")
            .with_role(CaseRole::required("judge", RoleType::Judge))
            .with_role(CaseRole::required("defense", RoleType::DefenseCounsel))
            .with_role(CaseRole::optional("witness", RoleType::Witness))
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        let bad = Roster::new(vec![Student::new("A", 10), Student::new("A", 20)]);
        let err = CastingSession::new(bad, case()).unwrap_err();
        match err {
            SessionError::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_starts_empty() {
        let s = CastingSession::new(roster(), case()).unwrap();
        assert!(s.assignment().is_empty());
        assert!(!s.is_complete());
        assert_eq!(s.missing_required().len(), 2);
    }

    #[test]
    fn test_auto_assign_replaces_manual_state() {
        let mut s = CastingSession::new(roster(), case()).unwrap();
        s.assign("witness", "C").unwrap();
        s.assign("judge", "B").unwrap();

        s.auto_assign();
        assert_eq!(s.assignment().student_for("judge"), Some("A"));
        assert_eq!(s.assignment().student_for("defense"), Some("B"));
        assert_eq!(s.assignment().student_for("witness"), None);
        assert!(s.is_complete());
    }

    #[test]
    fn test_manual_validation() {
        let mut s = CastingSession::new(roster(), case()).unwrap();
        let err = s.assign("bailiff", "A").unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidAction(ref e) if e.kind == ValidationErrorKind::UnknownRole
        ));
        let err = s.assign("judge", "Z").unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidAction(ref e) if e.kind == ValidationErrorKind::UnknownStudent
        ));
        assert!(s.unassign("bailiff").is_err());
        assert!(s.assignment().is_empty());
    }

    #[test]
    fn test_permissive_and_exclusive_sessions() {
        let mut permissive = CastingSession::new(roster(), case()).unwrap();
        permissive.assign("judge", "A").unwrap();
        permissive.assign("defense", "A").unwrap();
        assert_eq!(permissive.assignment().double_bookings().len(), 1);

        let mut strict = CastingSession::new(roster(), case()).unwrap().exclusive();
        strict.assign("judge", "A").unwrap();
        let err = strict.assign("defense", "A").unwrap_err();
        assert!(matches!(err, SessionError::Assign(_)));
        // The refused action leaves the current value untouched.
        assert_eq!(strict.assignment().student_for("judge"), Some("A"));
        assert_eq!(strict.assignment().len(), 1);
    }

    #[test]
    fn test_unassign() {
        let mut s = CastingSession::new(roster(), case()).unwrap();
        s.assign("judge", "A").unwrap();
        s.unassign("judge").unwrap();
        s.unassign("judge").unwrap();
        assert!(s.assignment().is_empty());
    }

    #[test]
    fn test_confirm_gated_on_completeness() {
        let mut s = CastingSession::new(roster(), case()).unwrap();
        s.assign("judge", "A").unwrap();
        let err = s.clone().confirm().unwrap_err();
        assert_eq!(
            err,
            SessionError::Incomplete {
                missing: vec!["defense".to_string()]
            }
        );
        assert_eq!(err.to_string(), "cannot confirm: required roles unfilled: defense");

        s.assign("defense", "B").unwrap();
        let confirmed = s.confirm().unwrap();
        assert_eq!(confirmed.len(), 2);
    }

    #[test]
    fn test_custom_caster_and_report() {
        let caster = GreedyCaster::with_config(CastingConfig::default().with_optional_roles(true));
        let mut s = CastingSession::new(roster(), case()).unwrap().with_caster(caster);
        s.auto_assign();
        assert_eq!(s.assignment().student_for("witness"), Some("C"));

        let report = s.report();
        assert!(report.complete);
        assert_eq!(report.filled_roles, 3);
        assert!(report.unassigned_students.is_empty());
    }
}
