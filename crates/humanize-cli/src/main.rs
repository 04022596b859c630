//! CLI for humanize-city — a boulevard in a box.

mod commands;
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "humanize")]
#[command(about = "humanize — simulated boulevard telemetry, smart seats, and AI planning insights")]
#[command(version = humanize_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current telemetry snapshot
    Snapshot {
        /// Emit JSON instead of the human-readable summary
        #[arg(long)]
        json: bool,

        /// Apply this many simulator ticks before printing
        #[arg(long, default_value = "0")]
        ticks: u32,
    },

    /// Run the simulator in real time and print each applied tick
    Watch {
        /// How long to run, in seconds
        #[arg(long, default_value = "10")]
        seconds: u64,
    },

    /// List smart-seat zones, or toggle one
    Seats {
        /// Toggle the fold flag on a zone by id (e.g. A2)
        #[arg(long)]
        fold: Option<String>,

        /// Toggle the shade flag on a zone by id
        #[arg(long)]
        shade: Option<String>,

        /// Emit JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Ask the AI planner one question against the current snapshot
    Insight {
        /// The question to ask
        prompt: Vec<String>,
    },

    /// Live TUI dashboard: metrics, seats, and the AI planner
    Dashboard,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot { json, ticks } => commands::snapshot::run(json, ticks),
        Commands::Watch { seconds } => commands::watch::run(seconds),
        Commands::Seats { fold, shade, json } => {
            commands::seats::run(fold.as_deref(), shade.as_deref(), json)
        }
        Commands::Insight { prompt } => commands::insight::run(&prompt.join(" ")),
        Commands::Dashboard => commands::dashboard::run(),
    }
}
