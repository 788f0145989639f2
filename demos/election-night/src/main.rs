//! Election Night Example
//!
//! This example walks a two-candidate canvass through a full evening:
//! returns arrive state by state, the lead changes hands, bad submissions
//! bounce off, and certification locks the outcome.
//!
//! Run with `RUST_LOG=debug` to watch the tally's own log lines interleave
//! with the walkthrough.

use canvass_core::{CanvassResult, OfficialId, StateResult};
use canvass_tally::ElectionTally;
use tracing_subscriber::EnvFilter;

fn report(tally: &ElectionTally) {
    let (seats_a, seats_b) = tally.seat_totals();
    println!(
        "   Seats: A={seats_a:>3}  B={seats_b:>3}  → leader: {} (code {})",
        tally.current_leader(),
        tally.current_leader().code()
    );
}

fn main() -> CanvassResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Canvass: Election Night ===\n");

    // 1. Open the canvass
    println!("1. Opening the canvass...");
    let authority = OfficialId::new(0xE1EC);
    let impostor = OfficialId::new(0xBAD);
    let mut tally = ElectionTally::new(authority);
    println!("   Authority: {}", tally.authority());
    report(&tally);

    // 2. Early returns
    println!("\n2. Early returns");
    println!("   California reports: 1000 vs 900, 32 seats");
    tally.submit_state_result(authority, StateResult::new("California", 1000, 900, 32))?;
    report(&tally);

    println!("   Ohio reports: 800 vs 1200, 33 seats");
    tally.submit_state_result(authority, StateResult::new("Ohio", 800, 1200, 33))?;
    report(&tally);

    println!("   Texas reports: 2100 vs 2600, 38 seats");
    tally.submit_state_result(authority, StateResult::new("Texas", 2100, 2600, 38))?;
    report(&tally);

    // 3. The lead changes hands
    println!("\n3. The late states swing it back");
    println!("   New York reports: 2000 vs 1500, 29 seats");
    tally.submit_state_result(authority, StateResult::new("New York", 2000, 1500, 29))?;
    report(&tally);

    println!("   Florida reports: 900 vs 800, 30 seats");
    tally.submit_state_result(authority, StateResult::new("Florida", 900, 800, 30))?;
    report(&tally);

    // 4. Submissions that bounce off
    println!("\n4. Submissions that bounce off");
    let probes = [
        (impostor, StateResult::new("Georgia", 700, 600, 16)),
        (authority, StateResult::new("California", 4, 9, 12)),
        (authority, StateResult::new("Nevada", 500, 500, 6)),
        (authority, StateResult::new("Wyoming", 90, 80, 0)),
    ];
    for (caller, result) in probes {
        let label = result.to_string();
        match tally.submit_state_result(caller, result) {
            Ok(()) => println!("   accepted {label}"),
            Err(err) => println!("   REJECTED {label}\n      → {err}"),
        }
    }
    report(&tally);

    // 5. Certification
    println!("\n5. Certification");
    tally.end_election(authority)?;
    println!("   The canvass is closed. Final leader: {}", tally.current_leader());

    if let Err(err) = tally.end_election(authority) {
        println!("   Closing again → {err}");
    }
    if let Err(err) =
        tally.submit_state_result(authority, StateResult::new("Georgia", 700, 600, 16))
    {
        println!("   Late returns from Georgia → {err}");
    }

    // 6. The journal
    println!("\n6. Replaying the journal");
    for (i, entry) in tally.journal().iter().enumerate() {
        println!("   [{i}] {entry:?}");
    }

    // 7. Final snapshot
    println!("\n7. Final snapshot");
    let snap = tally.snapshot();
    println!("   States recorded: {}", snap.states_recorded);
    println!("   Seats: A={} B={}", snap.seats_a, snap.seats_b);
    println!("   Margin: {} seats", snap.margin());
    println!("   Leader code for external readers: {}", snap.leader_code());
    println!("   Ended: {}", snap.ended);

    println!("\n=== Canvass Complete ===");
    Ok(())
}
