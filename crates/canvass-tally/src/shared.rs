//! Thread-shared tally handle

use std::sync::Arc;

use parking_lot::RwLock;

use canvass_core::{Candidate, CanvassResult, OfficialId, StateResult};

use crate::{ElectionTally, TallySnapshot};

/// Cloneable handle to a tally shared across threads
///
/// A writer holds the write lock for a whole operation, so concurrent
/// readers observe the state either before an operation or after it, never
/// between its effects.
#[derive(Clone, Debug)]
pub struct SharedTally {
    inner: Arc<RwLock<ElectionTally>>,
}

impl SharedTally {
    pub fn new(authority: OfficialId) -> Self {
        SharedTally {
            inner: Arc::new(RwLock::new(ElectionTally::new(authority))),
        }
    }

    /// Wrap an already-populated tally
    pub fn from_tally(tally: ElectionTally) -> Self {
        SharedTally {
            inner: Arc::new(RwLock::new(tally)),
        }
    }

    pub fn submit_state_result(
        &self,
        caller: OfficialId,
        result: StateResult,
    ) -> CanvassResult<()> {
        self.inner.write().submit_state_result(caller, result)
    }

    pub fn end_election(&self, caller: OfficialId) -> CanvassResult<()> {
        self.inner.write().end_election(caller)
    }

    pub fn current_leader(&self) -> Candidate {
        self.inner.read().current_leader()
    }

    pub fn election_ended(&self) -> bool {
        self.inner.read().election_ended()
    }

    pub fn snapshot(&self) -> TallySnapshot {
        self.inner.read().snapshot()
    }

    /// Run `f` under the read lock, for multi-field reads beyond `snapshot`
    pub fn with_read<R>(&self, f: impl FnOnce(&ElectionTally) -> R) -> R {
        f(&self.inner.read())
    }
}
