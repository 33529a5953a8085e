//! Automatic casting and casting quality metrics.
//!
//! # Algorithm
//!
//! `GreedyCaster` fills required roles in case order, each with the
//! best-scoring student still available. It is not globally optimal (a
//! student taken early is never swapped back), but it is deterministic
//! and easy for an operator to predict.
//!
//! # Report
//!
//! `CastingReport` summarizes fill rate, preference hits, and leftover
//! students for any assignment, manual or automatic.

mod greedy;
mod report;

pub use greedy::{auto_assign, GreedyCaster};
pub use report::CastingReport;
