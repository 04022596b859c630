use humanize_core::{GatewayConfig, InsightGateway, TelemetrySimulator};

pub fn run(prompt: &str) {
    if prompt.trim().is_empty() {
        eprintln!("Nothing to ask — give the planner a question.");
        std::process::exit(1);
    }

    let gateway = match InsightGateway::from_config(GatewayConfig::from_env()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Could not set up the insight gateway: {e}");
            std::process::exit(1);
        }
    };

    let mut sim = TelemetrySimulator::new();
    sim.tick_all();

    println!("⟳ Analyzing boulevard data...");
    match gateway.request_insight(prompt, sim.snapshot()) {
        Some(result) => {
            println!("\n[{}]", result.source);
            println!("{}", result.text);
        }
        // Unreachable for a non-empty prompt on a fresh gateway, but don't panic.
        None => println!("Request was not sent."),
    }
}
