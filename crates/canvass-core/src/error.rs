//! Error types for the canvass

use thiserror::Error;

use crate::OfficialId;

/// Rejections surfaced by tally operations
///
/// Checks run in a fixed order, so a submission violating several rules at
/// once always reports the same variant. Equality is derived so suites can
/// assert on the exact rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvassError {
    // Authority errors
    #[error("Unauthorized: official {caller} is not the election authority")]
    Unauthorized { caller: OfficialId },

    // Lifecycle errors
    #[error("The election has already ended")]
    ElectionAlreadyEnded,

    // Submission errors
    #[error("States must carry at least one seat: {state}")]
    InvalidSeatCount { state: String },

    #[error("Tied result in {state}: {votes} votes each")]
    TiedResult { state: String, votes: u64 },

    #[error("Result already submitted for state: {state}")]
    DuplicateState { state: String },
}

/// Result type for canvass operations
pub type CanvassResult<T> = Result<T, CanvassError>;
