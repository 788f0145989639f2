//! Candidate enumeration and the leader rule
//!
//! The race has exactly two candidates plus the `Nobody` sentinel reported
//! before any seats are awarded and whenever the totals are level. The
//! integer coding (0/1/2) is stable and is what external readers consume.

use std::cmp::Ordering;
use std::fmt;

/// Candidate in the two-way race
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Candidate {
    /// No leader - the initial coding and the level-totals coding
    Nobody = 0,
    CandidateA = 1,
    CandidateB = 2,
}

impl Candidate {
    /// Stable integer coding for external readers
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Candidate::Nobody),
            1 => Some(Candidate::CandidateA),
            2 => Some(Candidate::CandidateB),
            _ => None,
        }
    }

    /// Leader rule: strictly more seats leads, level totals mean no leader
    pub fn leading(seats_a: u32, seats_b: u32) -> Candidate {
        match seats_a.cmp(&seats_b) {
            Ordering::Greater => Candidate::CandidateA,
            Ordering::Less => Candidate::CandidateB,
            Ordering::Equal => Candidate::Nobody,
        }
    }
}

impl Default for Candidate {
    fn default() -> Self {
        Candidate::Nobody
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Nobody => write!(f, "nobody"),
            Candidate::CandidateA => write!(f, "candidate A"),
            Candidate::CandidateB => write!(f, "candidate B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_code_roundtrip() {
        for candidate in [
            Candidate::Nobody,
            Candidate::CandidateA,
            Candidate::CandidateB,
        ] {
            let code = candidate.code();
            let recovered = Candidate::from_code(code).unwrap();
            assert_eq!(candidate, recovered);
        }
    }

    #[test]
    fn test_candidate_codes_are_stable() {
        assert_eq!(Candidate::Nobody.code(), 0);
        assert_eq!(Candidate::CandidateA.code(), 1);
        assert_eq!(Candidate::CandidateB.code(), 2);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Candidate::from_code(3), None);
        assert_eq!(Candidate::from_code(0xFF), None);
    }

    #[test]
    fn test_leading_rule() {
        assert_eq!(Candidate::leading(0, 0), Candidate::Nobody);
        assert_eq!(Candidate::leading(32, 0), Candidate::CandidateA);
        assert_eq!(Candidate::leading(32, 33), Candidate::CandidateB);
        assert_eq!(Candidate::leading(50, 50), Candidate::Nobody);
    }

    #[test]
    fn test_default_is_nobody() {
        assert_eq!(Candidate::default(), Candidate::Nobody);
    }
}
