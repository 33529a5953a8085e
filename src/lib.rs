//! Role-assignment engine for legal-case simulations.
//!
//! Given a case with an ordered list of roles (judge, defense counsel,
//! prosecutor, clerk, witness, expert) and a roster of students with
//! performance scores and role preferences, produces a deterministic
//! role → student assignment, either manually or by greedy best fit.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `Roster`, `CaseRole`, `Case`,
//!   `RoleType`, `Assignment`
//! - **`scoring`**: Match rules and the `ScoringEngine`
//! - **`casting`**: `GreedyCaster` auto-assignment and `CastingReport`
//! - **`manual`**: Operator assign / unassign
//! - **`validation`**: Boundary checks (duplicate IDs, score range, unknown refs)
//! - **`session`**: `CastingSession`, the owner of the current assignment
//! - **`config`**: `CastingConfig`
//!
//! # Example
//!
//! ```
//! use u_casting::{auto_assign, is_complete};
//! use u_casting::models::{CaseRole, RoleType, Student};
//!
//! let roster = vec![Student::new("A", 70)];
//! let roles = vec![
//!     CaseRole::required("judge", RoleType::Judge),
//!     CaseRole::required("clerk", RoleType::Clerk),
//! ];
//!
//! let assignment = auto_assign(&roster, &roles);
//! assert_eq!(assignment.student_for("judge"), Some("A"));
//! assert!(!is_complete(&assignment, &roles));
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events; installing a subscriber is up to the caller.

pub mod casting;
pub mod config;
pub mod manual;
pub mod models;
pub mod scoring;
pub mod session;
pub mod validation;

pub use casting::auto_assign;
pub use manual::{assign, unassign};
pub use models::is_complete;
