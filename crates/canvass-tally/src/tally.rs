//! The election tally state machine

use std::collections::HashMap;

use canvass_core::{Candidate, CanvassError, CanvassResult, OfficialId, StateResult, TallyEvent};

use crate::TallySnapshot;

/// Aggregated results for a two-candidate race
///
/// One tally exists per election. A single authority, fixed at construction,
/// submits per-state results and eventually ends the election; every other
/// caller is limited to the read-only accessors. The tally is ACTIVE until
/// [`end_election`](ElectionTally::end_election) succeeds, then permanently
/// FINAL.
///
/// Validation is staged and ordered. The first violated rule determines the
/// reported error, and a rejected operation leaves the tally untouched.
#[derive(Debug)]
pub struct ElectionTally {
    /// Sole identity permitted to mutate
    authority: OfficialId,
    /// Accepted results, keyed by state name
    results: HashMap<String, StateResult>,
    /// Running seat totals
    seats_a: u32,
    seats_b: u32,
    /// Leader recomputed from the totals after each accepted submission
    leader: Candidate,
    /// One-way finalization flag
    ended: bool,
    /// Append-only record of accepted operations
    journal: Vec<TallyEvent>,
}

impl ElectionTally {
    /// Create a fresh tally governed by `authority`
    pub fn new(authority: OfficialId) -> Self {
        ElectionTally {
            authority,
            results: HashMap::new(),
            seats_a: 0,
            seats_b: 0,
            leader: Candidate::Nobody,
            ended: false,
            journal: Vec::new(),
        }
    }

    /// Record one state's returns and award its seats to the state's winner
    ///
    /// All validation runs before the first effect, so either every effect
    /// applies (totals, leader, record, journal) or none do.
    pub fn submit_state_result(
        &mut self,
        caller: OfficialId,
        result: StateResult,
    ) -> CanvassResult<()> {
        // Stage 1: Authority Check
        if caller != self.authority {
            return Err(CanvassError::Unauthorized { caller });
        }

        // Stage 2: Lifecycle Check
        if self.ended {
            return Err(CanvassError::ElectionAlreadyEnded);
        }

        // Stage 3: Seat Validation
        if result.seats == 0 {
            return Err(CanvassError::InvalidSeatCount { state: result.name });
        }

        // Stage 4: Tie Validation
        let winner = match result.winner() {
            Some(winner) => winner,
            None => {
                return Err(CanvassError::TiedResult {
                    state: result.name,
                    votes: result.votes_a,
                })
            }
        };

        // Stage 5: Duplicate Check
        if self.results.contains_key(&result.name) {
            return Err(CanvassError::DuplicateState { state: result.name });
        }

        // All stages passed - apply every effect as one step
        if winner == Candidate::CandidateA {
            self.seats_a = self.seats_a.saturating_add(result.seats);
        } else {
            self.seats_b = self.seats_b.saturating_add(result.seats);
        }
        self.leader = Candidate::leading(self.seats_a, self.seats_b);
        self.journal.push(TallyEvent::ResultRecorded {
            state: result.name.clone(),
            winner,
            seats: result.seats,
        });
        tracing::debug!(
            "recorded {}: {} takes {} seats, leader now {}",
            result.name,
            winner,
            result.seats,
            self.leader
        );
        self.results.insert(result.name.clone(), result);

        Ok(())
    }

    /// Close the canvass
    ///
    /// The leader at this moment becomes the final, permanent result. The
    /// transition is one-way; a closed tally only answers reads.
    pub fn end_election(&mut self, caller: OfficialId) -> CanvassResult<()> {
        // Stage 1: Authority Check
        if caller != self.authority {
            return Err(CanvassError::Unauthorized { caller });
        }

        // Stage 2: Lifecycle Check
        if self.ended {
            return Err(CanvassError::ElectionAlreadyEnded);
        }

        self.ended = true;
        self.journal.push(TallyEvent::ElectionEnded {
            winner: self.leader,
        });
        tracing::info!(
            "election ended: {} holds {} to {} seats",
            self.leader,
            self.seats_a,
            self.seats_b
        );

        Ok(())
    }

    /// Current leader by total seats, `Nobody` when the totals are level
    #[inline]
    pub fn current_leader(&self) -> Candidate {
        self.leader
    }

    /// Has the canvass been closed?
    #[inline]
    pub fn election_ended(&self) -> bool {
        self.ended
    }

    /// The identity permitted to mutate this tally
    #[inline]
    pub fn authority(&self) -> OfficialId {
        self.authority
    }

    /// Seats held so far by one candidate; `Nobody` holds none
    pub fn seats(&self, candidate: Candidate) -> u32 {
        match candidate {
            Candidate::Nobody => 0,
            Candidate::CandidateA => self.seats_a,
            Candidate::CandidateB => self.seats_b,
        }
    }

    /// Both running totals at once
    #[inline]
    pub fn seat_totals(&self) -> (u32, u32) {
        (self.seats_a, self.seats_b)
    }

    /// Look up one state's recorded returns
    pub fn result(&self, name: &str) -> Option<&StateResult> {
        self.results.get(name)
    }

    /// Number of states recorded so far
    pub fn states_recorded(&self) -> usize {
        self.results.len()
    }

    /// The append-only record of accepted operations
    pub fn journal(&self) -> &[TallyEvent] {
        &self.journal
    }

    /// Consistent point-in-time view of the correlated fields
    pub fn snapshot(&self) -> TallySnapshot {
        TallySnapshot {
            leader: self.leader,
            seats_a: self.seats_a,
            seats_b: self.seats_b,
            states_recorded: self.results.len(),
            ended: self.ended,
        }
    }
}
