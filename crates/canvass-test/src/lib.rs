//! Canvass Test Harness - scripted elections, permutation fuzzing, and
//! certification runs
//!
//! This crate provides:
//! - Seeded scenario generation (distinct, non-tied state results)
//! - A permutation fuzzer for order independence of the canvass
//! - An end-to-end certification harness over the shared tally
//! - Pure property helpers shared by the suites

pub mod certification;
pub mod permutation;
pub mod scenario;

pub use certification::*;
pub use permutation::*;
pub use scenario::*;
