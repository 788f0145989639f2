//! Journal events
//!
//! Every accepted mutation appends exactly one entry to the tally's
//! journal. The journal is the audit trail consumers can replay to
//! reconstruct how the totals were reached.

use crate::Candidate;

/// Append-only record of one accepted tally operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TallyEvent {
    /// A state's returns were recorded and its seats awarded
    ResultRecorded {
        state: String,
        winner: Candidate,
        seats: u32,
    },
    /// The canvass closed; the leader at this moment is the final result
    ElectionEnded { winner: Candidate },
}

impl TallyEvent {
    /// Does this entry close the canvass?
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TallyEvent::ElectionEnded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_classification() {
        let recorded = TallyEvent::ResultRecorded {
            state: "California".to_string(),
            winner: Candidate::CandidateA,
            seats: 32,
        };
        let ended = TallyEvent::ElectionEnded {
            winner: Candidate::CandidateA,
        };

        assert!(!recorded.is_terminal());
        assert!(ended.is_terminal());
    }
}
