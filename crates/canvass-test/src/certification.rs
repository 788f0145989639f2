//! End-to-end certification suite
//!
//! Drives a full canvass through the shared handle: the slate streams in
//! while reader threads watch the totals, adversarial submissions bounce
//! off between the real ones, and the close freezes the outcome. The
//! report collects everything a reviewer would check by hand.

use std::thread;

use canvass_core::{Candidate, CanvassError, OfficialId, StateResult};
use canvass_tally::{SharedTally, TallySnapshot};

use crate::{generate_states, ScenarioConfig};

/// Configuration for a certification run
#[derive(Clone, Debug)]
pub struct CertificationConfig {
    /// Slate configuration
    pub scenario: ScenarioConfig,
    /// Concurrent reader threads
    pub reader_count: usize,
    /// Snapshots each reader takes
    pub reads_per_reader: usize,
    /// Interleave invalid submissions between the real ones
    pub adversarial: bool,
}

impl Default for CertificationConfig {
    fn default() -> Self {
        CertificationConfig {
            scenario: ScenarioConfig::default(),
            reader_count: 4,
            reads_per_reader: 500,
            adversarial: true,
        }
    }
}

impl CertificationConfig {
    /// Minimal run for quick checks
    pub fn minimal() -> Self {
        CertificationConfig {
            scenario: ScenarioConfig::light(),
            reader_count: 2,
            reads_per_reader: 100,
            adversarial: false,
        }
    }

    /// Standard run
    pub fn standard() -> Self {
        Self::default()
    }
}

/// Result of one certification run
#[derive(Debug)]
pub struct CertificationReport {
    /// Snapshot taken after the close
    pub final_snapshot: TallySnapshot,
    /// Size of the generated slate
    pub slate_size: u32,
    /// Valid submissions accepted
    pub accepted: u32,
    /// Probes rejected
    pub rejected: u32,
    /// Snapshots whose leader disagreed with their own totals
    pub torn_reads: u32,
    /// Probes rejected with an unexpected error kind
    pub misclassified_rejections: u32,
}

impl CertificationReport {
    pub fn passed(&self) -> bool {
        self.final_snapshot.ended
            && self.final_snapshot.leader
                == Candidate::leading(self.final_snapshot.seats_a, self.final_snapshot.seats_b)
            && self.accepted == self.slate_size
            && self.torn_reads == 0
            && self.misclassified_rejections == 0
    }
}

/// Certification harness
pub struct CertificationHarness {
    config: CertificationConfig,
}

impl CertificationHarness {
    pub fn new(config: CertificationConfig) -> Self {
        CertificationHarness { config }
    }

    /// Run the canvass end to end
    pub fn run(&self) -> CertificationReport {
        let authority = OfficialId::new(0xE1EC);
        let outsider = OfficialId::new(0xBAD);
        let shared = SharedTally::new(authority);
        let slate = generate_states(&self.config.scenario);

        let readers: Vec<_> = (0..self.config.reader_count)
            .map(|_| {
                let handle = shared.clone();
                let reads = self.config.reads_per_reader;
                thread::spawn(move || {
                    let mut torn = 0u32;
                    for _ in 0..reads {
                        let snap = handle.snapshot();
                        if snap.leader != Candidate::leading(snap.seats_a, snap.seats_b) {
                            torn += 1;
                        }
                    }
                    torn
                })
            })
            .collect();

        let mut accepted = 0u32;
        let mut rejected = 0u32;
        let mut misclassified = 0u32;
        let mut probe = |outcome: Result<(), CanvassError>, expect: fn(&CanvassError) -> bool| {
            rejected += 1;
            match outcome {
                Err(ref err) if expect(err) => {}
                _ => misclassified += 1,
            }
        };

        for (i, result) in slate.iter().enumerate() {
            if shared.submit_state_result(authority, result.clone()).is_ok() {
                accepted += 1;
            }

            if self.config.adversarial {
                match i % 3 {
                    0 => probe(
                        shared.submit_state_result(outsider, result.clone()),
                        |err| matches!(err, CanvassError::Unauthorized { .. }),
                    ),
                    1 => probe(
                        shared.submit_state_result(authority, result.clone()),
                        |err| matches!(err, CanvassError::DuplicateState { .. }),
                    ),
                    _ => probe(
                        shared.submit_state_result(
                            authority,
                            StateResult::new(format!("probe-tie-{i:02}"), 7, 7, 3),
                        ),
                        |err| matches!(err, CanvassError::TiedResult { .. }),
                    ),
                }
            }
        }

        let closed = shared.end_election(authority).is_ok();
        probe(shared.end_election(authority), |err| {
            matches!(err, CanvassError::ElectionAlreadyEnded)
        });
        probe(
            shared.submit_state_result(authority, StateResult::new("probe-late", 9, 1, 2)),
            |err| matches!(err, CanvassError::ElectionAlreadyEnded),
        );
        if !closed {
            misclassified += 1;
        }

        let torn_reads = readers
            .into_iter()
            .map(|reader| reader.join().unwrap_or(u32::MAX))
            .sum();

        CertificationReport {
            final_snapshot: shared.snapshot(),
            slate_size: slate.len() as u32,
            accepted,
            rejected,
            torn_reads,
            misclassified_rejections: misclassified,
        }
    }
}
