use std::time::{Duration, Instant};

use humanize_core::TelemetrySimulator;

/// Poll granularity for the tick loop. Fine enough that no metric's own
/// interval is missed by more than this.
const POLL: Duration = Duration::from_millis(100);

pub fn run(seconds: u64) {
    let mut sim = TelemetrySimulator::new();
    let deadline = Instant::now() + Duration::from_secs(seconds);

    println!("Watching boulevard telemetry for {seconds}s (Ctrl-C to stop early)\n");
    println!("  start: {}", sim.snapshot().summary());

    while Instant::now() < deadline {
        std::thread::sleep(POLL);
        let applied = sim.tick_due(Instant::now());
        if !applied.is_empty() {
            let names: Vec<&str> = applied.iter().map(|m| m.name()).collect();
            println!("  [{}] {}", names.join(","), sim.snapshot().summary());
        }
    }

    println!("\n  final: {}", sim.snapshot().summary());
}
