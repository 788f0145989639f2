//! Permutation fuzzing - order independence of the canvass
//!
//! A fixed slate must land on identical final figures no matter the order
//! its states arrive in. The fuzzer replays one generated slate under many
//! shuffled orders and compares every outcome against an independent
//! recomputation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{ElectionScenario, ScenarioConfig, ScenarioOutcome};

/// One shuffled replay that disagreed with the expected figures
#[derive(Clone, Debug)]
pub struct DivergentRun {
    pub order: Vec<usize>,
    pub outcome: ScenarioOutcome,
}

/// Order-independence verdict for a fuzzing session
#[derive(Debug)]
pub enum OrderCheck {
    Consistent,
    Divergent(Vec<DivergentRun>),
}

impl OrderCheck {
    pub fn is_consistent(&self) -> bool {
        matches!(self, OrderCheck::Consistent)
    }
}

/// Report from one permutation fuzzing session
#[derive(Debug)]
pub struct FuzzReport {
    pub expected: ScenarioOutcome,
    pub runs: usize,
    pub divergent: Vec<DivergentRun>,
}

impl FuzzReport {
    pub fn is_valid(&self) -> bool {
        self.divergent.is_empty()
    }

    pub fn check(self) -> OrderCheck {
        if self.divergent.is_empty() {
            OrderCheck::Consistent
        } else {
            OrderCheck::Divergent(self.divergent)
        }
    }
}

/// Permutation fuzzer over a single generated slate
pub struct PermutationFuzzer {
    scenario: ElectionScenario,
    runs: usize,
    rng: StdRng,
}

impl PermutationFuzzer {
    pub fn new(config: &ScenarioConfig, runs: usize) -> Self {
        PermutationFuzzer {
            scenario: ElectionScenario::new(config),
            runs,
            rng: StdRng::seed_from_u64(config.seed ^ 0x5EED),
        }
    }

    /// Replay the slate under fresh shuffles and compare every outcome
    pub fn run(&mut self) -> FuzzReport {
        let expected = self.scenario.expected();
        let mut divergent = Vec::new();

        let mut order: Vec<usize> = (0..self.scenario.slate().len()).collect();
        for _ in 0..self.runs {
            order.shuffle(&mut self.rng);
            let outcome = self.scenario.run_ordered(&order);
            if outcome != expected {
                divergent.push(DivergentRun {
                    order: order.clone(),
                    outcome,
                });
            }
        }

        FuzzReport {
            expected,
            runs: self.runs,
            divergent,
        }
    }
}

/// Property-based test helpers
pub mod properties {
    use canvass_core::{Candidate, StateResult, TallyEvent};

    /// Property: running totals equal the per-winner seat sums of a slate
    pub fn totals_match_slate(slate: &[StateResult], seats_a: u32, seats_b: u32) -> bool {
        let mut expect_a = 0u32;
        let mut expect_b = 0u32;

        for result in slate {
            match result.winner() {
                Some(Candidate::CandidateA) => expect_a += result.seats,
                Some(Candidate::CandidateB) => expect_b += result.seats,
                _ => {}
            }
        }

        expect_a == seats_a && expect_b == seats_b
    }

    /// Property: the leader is whoever holds strictly more seats
    pub fn leader_matches_totals(seats_a: u32, seats_b: u32, leader: Candidate) -> bool {
        Candidate::leading(seats_a, seats_b) == leader
    }

    /// Property: one record per accepted state, at most one terminal entry,
    /// and the terminal entry comes last
    pub fn journal_well_formed(journal: &[TallyEvent], accepted: usize) -> bool {
        let records = journal.iter().filter(|e| !e.is_terminal()).count();
        let terminals = journal.iter().filter(|e| e.is_terminal()).count();
        let terminal_last = terminals == 0
            || journal
                .last()
                .map(TallyEvent::is_terminal)
                .unwrap_or(false);

        records == accepted && terminals <= 1 && terminal_last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass_core::{OfficialId, StateResult};
    use canvass_tally::ElectionTally;
    use proptest::prelude::*;

    #[test]
    fn test_fuzzer_light_is_consistent() {
        let mut fuzzer = PermutationFuzzer::new(&ScenarioConfig::light(), 200);
        let report = fuzzer.run();

        assert_eq!(report.runs, 200);
        assert!(report.is_valid(), "divergent orders: {:?}", report.divergent);
        assert!(report.check().is_consistent());
    }

    #[test]
    fn test_fuzzer_default_is_consistent() {
        let mut fuzzer = PermutationFuzzer::new(&ScenarioConfig::default(), 50);
        assert!(fuzzer.run().is_valid());
    }

    #[test]
    fn test_fuzzer_razor_thin_is_consistent() {
        let mut fuzzer = PermutationFuzzer::new(&ScenarioConfig::razor_thin(), 50);
        assert!(fuzzer.run().is_valid());
    }

    #[test]
    fn test_fuzzer_consistent_across_seeds() {
        for seed in [7, 1990, 0xBA110_7] {
            let config = ScenarioConfig {
                seed,
                ..ScenarioConfig::light()
            };
            let mut fuzzer = PermutationFuzzer::new(&config, 100);
            assert!(fuzzer.run().is_valid(), "seed {seed} diverged");
        }
    }

    #[test]
    fn test_property_helpers_on_a_driven_tally() {
        let authority = OfficialId::new(1);
        let slate = crate::generate_states(&ScenarioConfig::light());
        let mut tally = ElectionTally::new(authority);

        for result in &slate {
            tally.submit_state_result(authority, result.clone()).unwrap();
        }
        tally.end_election(authority).unwrap();

        let (seats_a, seats_b) = tally.seat_totals();
        assert!(properties::totals_match_slate(&slate, seats_a, seats_b));
        assert!(properties::leader_matches_totals(
            seats_a,
            seats_b,
            tally.current_leader()
        ));
        assert!(properties::journal_well_formed(
            tally.journal(),
            tally.states_recorded()
        ));
    }

    #[test]
    fn test_journal_property_flags_misplaced_terminal() {
        use canvass_core::{Candidate, TallyEvent};

        let bad = [
            TallyEvent::ElectionEnded {
                winner: Candidate::Nobody,
            },
            TallyEvent::ResultRecorded {
                state: "Late".to_string(),
                winner: Candidate::CandidateA,
                seats: 4,
            },
        ];
        assert!(!properties::journal_well_formed(&bad, 1));
        assert!(properties::journal_well_formed(&[], 0));
    }

    fn slate_and_order() -> impl Strategy<Value = (Vec<StateResult>, Vec<usize>)> {
        proptest::collection::vec((0u64..5_000, 1u64..5_000, 1u32..55, any::<bool>()), 1..25)
            .prop_flat_map(|rows| {
                let slate: Vec<StateResult> = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, (loser, margin, seats, a_wins))| {
                        let winner = loser + margin;
                        let (votes_a, votes_b) =
                            if a_wins { (winner, loser) } else { (loser, winner) };
                        StateResult::new(format!("state-{i:02}"), votes_a, votes_b, seats)
                    })
                    .collect();
                let order: Vec<usize> = (0..slate.len()).collect();
                (Just(slate), Just(order).prop_shuffle())
            })
    }

    proptest! {
        #[test]
        fn prop_any_order_lands_on_the_same_figures((slate, order) in slate_and_order()) {
            let scenario = ElectionScenario::from_slate(OfficialId::new(1), slate);
            let expected = scenario.expected();

            prop_assert_eq!(scenario.run_ordered(&order), expected);
        }
    }
}
