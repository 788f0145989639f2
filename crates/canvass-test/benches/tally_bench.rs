//! Benchmarks for canvass tally operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use canvass_core::{OfficialId, StateResult};
use canvass_tally::{ElectionTally, SharedTally};
use canvass_test::{generate_states, ScenarioConfig};

fn bench_submit_full_slate(c: &mut Criterion) {
    let authority = OfficialId::new(1);
    let slate = generate_states(&ScenarioConfig::default());

    c.bench_function("submit_50_states", |b| {
        b.iter(|| {
            let mut tally = ElectionTally::new(authority);
            for result in &slate {
                tally
                    .submit_state_result(authority, black_box(result.clone()))
                    .unwrap();
            }
            black_box(tally.current_leader())
        })
    });
}

fn bench_single_submission(c: &mut Criterion) {
    let authority = OfficialId::new(1);
    let result = StateResult::new("California", 1000, 900, 32);

    c.bench_function("submit_one_state", |b| {
        b.iter(|| {
            let mut tally = ElectionTally::new(authority);
            tally
                .submit_state_result(authority, black_box(result.clone()))
                .unwrap();
            black_box(tally.seat_totals())
        })
    });
}

fn bench_duplicate_rejection(c: &mut Criterion) {
    let authority = OfficialId::new(1);
    let mut tally = ElectionTally::new(authority);
    tally
        .submit_state_result(authority, StateResult::new("California", 1000, 900, 32))
        .unwrap();
    let resubmission = StateResult::new("California", 1000, 900, 32);

    c.bench_function("reject_duplicate_state", |b| {
        b.iter(|| black_box(tally.submit_state_result(authority, black_box(resubmission.clone()))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let authority = OfficialId::new(1);
    let mut tally = ElectionTally::new(authority);
    for result in generate_states(&ScenarioConfig::default()) {
        tally.submit_state_result(authority, result).unwrap();
    }

    c.bench_function("snapshot", |b| b.iter(|| black_box(tally.snapshot())));
}

fn bench_shared_read(c: &mut Criterion) {
    let authority = OfficialId::new(1);
    let shared = SharedTally::new(authority);
    for result in generate_states(&ScenarioConfig::default()) {
        shared.submit_state_result(authority, result).unwrap();
    }

    c.bench_function("shared_current_leader", |b| {
        b.iter(|| black_box(shared.current_leader()))
    });
}

criterion_group!(
    benches,
    bench_submit_full_slate,
    bench_single_submission,
    bench_duplicate_rejection,
    bench_snapshot,
    bench_shared_read,
);
criterion_main!(benches);
