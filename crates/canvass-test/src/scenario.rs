//! Scenario generation - seeded random elections
//!
//! A scenario is one authority plus a slate of distinct, non-tied state
//! results. Slates are generated from a seed so any failing run can be
//! replayed exactly.

use canvass_core::{Candidate, OfficialId, StateResult};
use canvass_tally::ElectionTally;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scenario configuration
#[derive(Clone, Debug)]
pub struct ScenarioConfig {
    /// Number of states in the slate
    pub state_count: usize,
    /// Largest seat award a state can carry (inclusive)
    pub max_seats: u32,
    /// Scale of the per-column vote counts
    pub vote_scale: u64,
    /// Random seed
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            state_count: 50,
            max_seats: 55,
            vote_scale: 10_000_000,
            seed: 42,
        }
    }
}

impl ScenarioConfig {
    /// Small slate for quick tests
    pub fn light() -> Self {
        ScenarioConfig {
            state_count: 7,
            max_seats: 20,
            vote_scale: 100_000,
            seed: 42,
        }
    }

    /// Every state decided by a handful of votes
    pub fn razor_thin() -> Self {
        ScenarioConfig {
            state_count: 50,
            max_seats: 55,
            vote_scale: 3,
            seed: 42,
        }
    }
}

/// Generate a slate of distinct, non-tied state results
pub fn generate_states(config: &ScenarioConfig) -> Vec<StateResult> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    (0..config.state_count)
        .map(|i| {
            // Winner strictly ahead, so no generated result is a tie
            let loser = rng.gen_range(0..config.vote_scale);
            let winner = loser + 1 + rng.gen_range(0..config.vote_scale);
            let seats = rng.gen_range(1..=config.max_seats);

            let (votes_a, votes_b) = if rng.gen::<bool>() {
                (winner, loser)
            } else {
                (loser, winner)
            };

            StateResult::new(format!("state-{i:02}"), votes_a, votes_b, seats)
        })
        .collect()
}

/// Final figures from one run of a slate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub accepted: u32,
    pub rejected: u32,
    pub seats_a: u32,
    pub seats_b: u32,
    pub leader: Candidate,
    pub closed: bool,
}

/// A scripted election: one authority, one fixed slate
pub struct ElectionScenario {
    authority: OfficialId,
    slate: Vec<StateResult>,
}

impl ElectionScenario {
    pub fn new(config: &ScenarioConfig) -> Self {
        ElectionScenario {
            authority: OfficialId::new(0xE1EC),
            slate: generate_states(config),
        }
    }

    /// Build a scenario around a hand-picked slate
    pub fn from_slate(authority: OfficialId, slate: Vec<StateResult>) -> Self {
        ElectionScenario { authority, slate }
    }

    pub fn authority(&self) -> OfficialId {
        self.authority
    }

    pub fn slate(&self) -> &[StateResult] {
        &self.slate
    }

    /// Submit the slate in its generated order and close the election
    pub fn run(&self) -> ScenarioOutcome {
        let order: Vec<usize> = (0..self.slate.len()).collect();
        self.run_ordered(&order)
    }

    /// Submit the slate in the order given by indices into it, then close
    pub fn run_ordered(&self, order: &[usize]) -> ScenarioOutcome {
        let mut tally = ElectionTally::new(self.authority);
        let mut accepted = 0;
        let mut rejected = 0;

        for &idx in order {
            match tally.submit_state_result(self.authority, self.slate[idx].clone()) {
                Ok(()) => accepted += 1,
                Err(_) => rejected += 1,
            }
        }
        let closed = tally.end_election(self.authority).is_ok();

        let (seats_a, seats_b) = tally.seat_totals();
        ScenarioOutcome {
            accepted,
            rejected,
            seats_a,
            seats_b,
            leader: tally.current_leader(),
            closed,
        }
    }

    /// Recompute the expected figures without driving a tally
    pub fn expected(&self) -> ScenarioOutcome {
        let mut seats_a = 0u32;
        let mut seats_b = 0u32;

        for result in &self.slate {
            match result.winner() {
                Some(Candidate::CandidateA) => seats_a += result.seats,
                Some(Candidate::CandidateB) => seats_b += result.seats,
                _ => {}
            }
        }

        ScenarioOutcome {
            accepted: self.slate.len() as u32,
            rejected: 0,
            seats_a,
            seats_b,
            leader: Candidate::leading(seats_a, seats_b),
            closed: true,
        }
    }
}
