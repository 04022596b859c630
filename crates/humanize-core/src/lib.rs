//! # humanize-core
//!
//! **A boulevard in a box.**
//!
//! `humanize-core` is the core library behind humanize-city: a simulated
//! urban-telemetry playground modeled on a smart public-space deployment.
//! It owns the live metric state (steps, temperature, air quality, humidity,
//! wind), a board of IoT smart seats, and a gateway that turns free-text
//! questions plus the current telemetry into AI-generated planning insights.
//!
//! ## Quick Start
//!
//! ```no_run
//! use humanize_core::{GatewayConfig, InsightGateway, TelemetrySimulator};
//!
//! // Simulator seeded with the boulevard's reference values
//! let mut sim = TelemetrySimulator::new();
//! sim.tick_all();
//! println!("{}", sim.snapshot().summary());
//!
//! // Gateway: live AI insight, or a canned one when the service is down
//! let gateway = InsightGateway::from_config(GatewayConfig::from_env()).unwrap();
//! if let Some(result) = gateway.request_insight("Where should we add shade?", sim.snapshot()) {
//!     println!("[{}] {}", result.source, result.text);
//! }
//! ```
//!
//! ## Architecture
//!
//! Simulator (bounded random walks) → snapshot → rendering layer
//! Prompt + snapshot → Gateway → external text API → insight or fallback
//!
//! All simulated data is either seeded from fixed reference values or
//! perturbed by bounded random walks — there is no real sensor ingestion and
//! no persistence. The random source sits behind the [`WalkRng`] trait so
//! tests can script exact sequences, and the network sits behind
//! [`InsightTransport`] so tests never touch the wire.

pub mod config;
pub mod flow;
pub mod gateway;
pub mod insight;
pub mod metric;
pub mod rng;
pub mod seats;
pub mod simulator;
pub mod snapshot;

pub use config::GatewayConfig;
pub use flow::{FlowPoint, PEDESTRIAN_FLOW, peak_flow};
pub use gateway::{InsightGateway, InsightTransport, TransportError};
pub use insight::{
    CANNED_INSIGHTS, FALLBACK_PREFIX, InsightResult, InsightSource, NO_RESPONSE_TEXT,
};
pub use metric::{Metric, MetricInfo};
pub use rng::{ScriptedRng, ThreadWalkRng, WalkRng};
pub use seats::{SeatBoard, SeatCounts, SeatStatus, SeatZone};
pub use simulator::TelemetrySimulator;
pub use snapshot::MetricSnapshot;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
