//! Casting domain models.
//!
//! Provides the data types the engine works on. The external loader owns
//! rosters and cases; the engine only reads them and produces assignments.
//!
//! # Domain Mappings
//!
//! | u-casting | Mock trial | Moot court | Role play |
//! |-----------|-----------|------------|-----------|
//! | Student | Class member | Team member | Participant |
//! | CaseRole | Courtroom role | Bench/counsel seat | Character |
//! | Case | Trial scenario | Moot problem | Scenario |
//! | Assignment | Cast list | Seating plan | Casting |

mod assignment;
mod role;
mod student;

pub use assignment::{is_complete, Assignment, DoubleBooking};
pub use role::{Case, CaseRole, Difficulty, ParseRoleTypeError, RoleType};
pub use student::{Roster, Student, MAX_PERFORMANCE};
