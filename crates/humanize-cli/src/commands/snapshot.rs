use humanize_core::TelemetrySimulator;

pub fn run(json: bool, ticks: u32) {
    let mut sim = TelemetrySimulator::new();
    for _ in 0..ticks {
        sim.tick_all();
    }
    let snap = sim.snapshot();

    if json {
        match serde_json::to_string_pretty(snap) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("snapshot serialization failed: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Boulevard telemetry ({} tick(s) applied):\n", ticks);
    println!("  {}", snap.summary());
    println!(
        "  step goal progress: {:.1}%{}",
        snap.step_pct(),
        if snap.goal_reached() { "  🎉 goal reached" } else { "" }
    );
}
