//! Assignment quality metrics.
//!
//! Summarizes an assignment against its roster and case so the caller can
//! show how well the cast fits before confirming.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Filled roles | Roles with an assigned student |
//! | Unfilled required | Required roles without a student |
//! | Preference hit rate | Fraction of placements on a preferred role type |
//! | Mean score | Mean match score over placements |
//! | Unassigned students | Roster members holding no role |

use serde::Serialize;

use crate::models::{Assignment, Case, Roster};
use crate::scoring::ScoringEngine;

/// Quality summary of an assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastingReport {
    /// Number of roles with an assigned student.
    pub filled_roles: usize,
    /// Number of required roles with an assigned student.
    pub filled_required: usize,
    /// Required roles without a student, in case order.
    pub unfilled_required: Vec<String>,
    /// Fraction of placements on a preferred role type (0.0..1.0).
    ///
    /// Counts raw preference matches from [`Student::prefers`]; it does not
    /// depend on the scoring engine or whether it rewards preferences.
    ///
    /// [`Student::prefers`]: crate::models::Student::prefers
    pub preference_hit_rate: f64,
    /// Mean match score over placements. 0.0 when nothing is placed.
    pub mean_score: f64,
    /// Students holding no role, in roster order.
    pub unassigned_students: Vec<String>,
    /// Whether every required role is filled.
    pub complete: bool,
}

impl CastingReport {
    /// Computes the report.
    ///
    /// Entries whose role or student is not found in `case` / `roster`
    /// are counted as filled but do not contribute to scores.
    pub fn calculate(
        assignment: &Assignment,
        roster: &Roster,
        case: &Case,
        engine: &ScoringEngine,
    ) -> Self {
        let mut filled_required = 0;
        let mut unfilled_required = Vec::new();
        for role in case.required_roles() {
            if assignment.student_for(&role.id).is_some() {
                filled_required += 1;
            } else {
                unfilled_required.push(role.id.clone());
            }
        }

        let mut scored = 0usize;
        let mut hits = 0usize;
        let mut total_score: i64 = 0;
        for (role_id, student_id) in assignment.iter() {
            if let (Some(role), Some(student)) = (case.role(role_id), roster.get(student_id)) {
                scored += 1;
                total_score += i64::from(engine.score(student, role));
                if student.prefers(role.role_type) {
                    hits += 1;
                }
            }
        }

        let (preference_hit_rate, mean_score) = if scored == 0 {
            (0.0, 0.0)
        } else {
            (hits as f64 / scored as f64, total_score as f64 / scored as f64)
        };

        let unassigned_students = roster
            .iter()
            .filter(|s| !assignment.is_assigned(&s.id))
            .map(|s| s.id.clone())
            .collect();

        Self {
            filled_roles: assignment.len(),
            filled_required,
            complete: unfilled_required.is_empty(),
            unfilled_required,
            preference_hit_rate,
            mean_score,
            unassigned_students,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casting::auto_assign;
    use crate::models::{CaseRole, RoleType, Student};

    fn sample() -> (Roster, Case) {
        let roster = Roster::new(vec![
            Student::new("A", 85).with_preference(RoleType::Judge),
            Student::new("B", 92).with_preference(RoleType::DefenseCounsel),
            Student::new("C", 40),
        ]);
        let case = Case::new("C1")
            .with_role(CaseRole::required("judge", RoleType::Judge))
            .with_role(CaseRole::required("defense", RoleType::DefenseCounsel))
            .with_role(CaseRole::required("clerk", RoleType::Clerk))
            .with_role(CaseRole::optional("witness", RoleType::Witness));
        (roster, case)
    }

    #[test]
    fn test_report_after_auto_assign() {
        let (roster, case) = sample();
        let engine = ScoringEngine::default();
        let assignment = auto_assign(roster.students(), &case.roles);
        let report = CastingReport::calculate(&assignment, &roster, &case, &engine);

        assert_eq!(report.filled_roles, 3);
        assert_eq!(report.filled_required, 3);
        assert!(report.unfilled_required.is_empty());
        assert!(report.complete);
        // judge→A (105), defense→B (112), clerk→C (40)
        assert!((report.preference_hit_rate - 2.0 / 3.0).abs() < 1e-10);
        assert!((report.mean_score - 257.0 / 3.0).abs() < 1e-10);
        assert!(report.unassigned_students.is_empty());
    }

    #[test]
    fn test_report_incomplete() {
        let (roster, case) = sample();
        let engine = ScoringEngine::default();
        let mut assignment = Assignment::new();
        assignment.set("judge", "C");

        let report = CastingReport::calculate(&assignment, &roster, &case, &engine);
        assert_eq!(report.filled_required, 1);
        assert_eq!(report.unfilled_required, vec!["defense".to_string(), "clerk".to_string()]);
        assert!(!report.complete);
        assert_eq!(report.preference_hit_rate, 0.0);
        assert_eq!(report.unassigned_students, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_report_empty() {
        let (roster, case) = sample();
        let engine = ScoringEngine::default();
        let report = CastingReport::calculate(&Assignment::new(), &roster, &case, &engine);
        assert_eq!(report.filled_roles, 0);
        assert_eq!(report.mean_score, 0.0);
        assert_eq!(report.unassigned_students.len(), 3);
    }

    #[test]
    fn test_hit_rate_independent_of_engine() {
        let (roster, case) = sample();
        let engine = ScoringEngine::new().with_rule(crate::scoring::rules::Performance);
        let mut assignment = Assignment::new();
        assignment.set("judge", "A");

        let report = CastingReport::calculate(&assignment, &roster, &case, &engine);
        assert_eq!(report.preference_hit_rate, 1.0);
        assert_eq!(report.mean_score, 85.0);
    }

    #[test]
    fn test_report_ignores_unknown_entries_in_scores() {
        let (roster, case) = sample();
        let engine = ScoringEngine::default();
        let mut assignment = Assignment::new();
        assignment.set("bailiff", "A");
        assignment.set("judge", "ghost");

        let report = CastingReport::calculate(&assignment, &roster, &case, &engine);
        assert_eq!(report.filled_roles, 2);
        assert_eq!(report.mean_score, 0.0);
        assert_eq!(report.filled_required, 1);
    }
}
