//! Consistent point-in-time views of a tally

use canvass_core::Candidate;

/// Copy of the tally's correlated fields taken in a single step
///
/// `seats_a`, `seats_b`, and `leader` always describe the same moment. A
/// snapshot never mixes the totals of one submission with the leader of
/// another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TallySnapshot {
    pub leader: Candidate,
    pub seats_a: u32,
    pub seats_b: u32,
    pub states_recorded: usize,
    pub ended: bool,
}

impl TallySnapshot {
    /// Integer-coded leader for external readers
    #[inline]
    pub fn leader_code(&self) -> u8 {
        self.leader.code()
    }

    /// Seat gap between the two candidates
    #[inline]
    pub fn margin(&self) -> u32 {
        self.seats_a.abs_diff(self.seats_b)
    }
}
