//! Canvass Tally - The result-tallying state machine
//!
//! This crate implements the two-candidate canvass:
//! - Authority-gated submission of per-state results
//! - Ordered validation with atomic rejection
//! - Running leader determination over seat totals
//! - One-way finalization that freezes the outcome
//! - Consistent snapshots and a thread-shared handle

pub mod shared;
pub mod snapshot;
pub mod tally;

pub use shared::*;
pub use snapshot::*;
pub use tally::*;
