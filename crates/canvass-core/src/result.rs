//! Per-state result records

use std::cmp::Ordering;
use std::fmt;

use crate::Candidate;

/// One electoral unit's submitted returns
///
/// The state name is the unit's identity within a canvass. Votes are raw
/// counts per candidate; seats are what the state's winner is awarded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateResult {
    pub name: String,
    pub votes_a: u64,
    pub votes_b: u64,
    pub seats: u32,
}

impl StateResult {
    pub fn new(name: impl Into<String>, votes_a: u64, votes_b: u64, seats: u32) -> Self {
        StateResult {
            name: name.into(),
            votes_a,
            votes_b,
            seats,
        }
    }

    /// The state's winner by simple plurality, `None` when the columns tie
    pub fn winner(&self) -> Option<Candidate> {
        match self.votes_a.cmp(&self.votes_b) {
            Ordering::Greater => Some(Candidate::CandidateA),
            Ordering::Less => Some(Candidate::CandidateB),
            Ordering::Equal => None,
        }
    }

    /// Total votes cast in the state
    #[inline]
    pub fn votes_cast(&self) -> u64 {
        self.votes_a.saturating_add(self.votes_b)
    }
}

impl fmt::Display for StateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vs {} ({} seats)",
            self.name, self.votes_a, self.votes_b, self.seats
        )
    }
}
