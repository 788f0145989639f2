//! Identity types for the canvass
//!
//! A caller's identity is an explicit 64-bit value handed to every mutating
//! operation and compared against the tally's recorded authority. There is
//! no ambient security context.

use std::fmt;

/// Election official identity - the hosting environment's notion of a caller
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OfficialId(pub u64);

impl OfficialId {
    #[inline]
    pub fn new(id: u64) -> Self {
        OfficialId(id)
    }
}

impl fmt::Debug for OfficialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Official({:016x})", self.0)
    }
}

impl fmt::Display for OfficialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
