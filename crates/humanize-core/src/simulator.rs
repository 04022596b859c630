//! Telemetry simulator — bounded random walks over the metric snapshot.
//!
//! Architecture:
//! 1. One owned [`MetricSnapshot`], seeded from the reference values
//! 2. One walk rule per metric, clamped to that metric's documented bounds
//! 3. Per-metric cadence: steps every 1.5 s, environment metrics every 2 s
//! 4. Callers drive it from their event loop via [`tick_due`]; dropping the
//!    loop stops the simulation
//!
//! The walks are pure arithmetic and cannot fail. The random source comes in
//! through [`WalkRng`] so tests can script exact sequences.
//!
//! [`tick_due`]: TelemetrySimulator::tick_due

use std::time::Instant;

use crate::metric::Metric;
use crate::rng::{ThreadWalkRng, WalkRng};
use crate::snapshot::MetricSnapshot;

/// Owns the live snapshot and advances it with bounded random walks.
pub struct TelemetrySimulator {
    snapshot: MetricSnapshot,
    rng: Box<dyn WalkRng>,
    last_tick: [Instant; Metric::ALL.len()],
}

impl TelemetrySimulator {
    /// Simulator with reference seed values and the production rng.
    pub fn new() -> Self {
        Self::with_rng(Box::new(ThreadWalkRng))
    }

    /// Simulator with an injected random source.
    pub fn with_rng(rng: Box<dyn WalkRng>) -> Self {
        Self::with_snapshot(MetricSnapshot::default(), rng)
    }

    /// Simulator over an explicit starting snapshot.
    pub fn with_snapshot(snapshot: MetricSnapshot, rng: Box<dyn WalkRng>) -> Self {
        let now = Instant::now();
        Self {
            snapshot,
            rng,
            last_tick: [now; Metric::ALL.len()],
        }
    }

    /// Read-only view of the current values.
    pub fn snapshot(&self) -> &MetricSnapshot {
        &self.snapshot
    }

    /// Apply one walk step to a single metric.
    pub fn tick(&mut self, metric: Metric) {
        let s = &mut self.snapshot;
        match metric {
            Metric::Steps => {
                // Frozen once the goal is reached; monotonic until then.
                if s.steps < s.step_goal {
                    let delta = self.rng.int_in(3, 15) as u32;
                    s.steps = (s.steps + delta).min(s.step_goal);
                }
            }
            Metric::Temperature => {
                s.temperature_c = (s.temperature_c + self.rng.float_in(-0.1, 0.1)).clamp(15.0, 50.0);
            }
            Metric::AirQuality => {
                s.air_quality_index =
                    (s.air_quality_index + self.rng.int_in(-1, 1) as i32).clamp(20, 120);
            }
            Metric::Humidity => {
                s.humidity_pct = (s.humidity_pct + self.rng.int_in(-1, 1) as i32).clamp(10, 60);
            }
            Metric::Wind => {
                s.wind_kph = (s.wind_kph + self.rng.int_in(-1, 1) as i32).clamp(0, 30);
            }
        }
    }

    /// Apply one walk step to every metric, ignoring cadence. Intended for
    /// tests and one-shot CLI use.
    pub fn tick_all(&mut self) {
        for metric in Metric::ALL {
            self.tick(metric);
        }
    }

    /// Apply a walk step to every metric whose own interval has elapsed at
    /// `now`. Returns the metrics that ticked.
    pub fn tick_due(&mut self, now: Instant) -> Vec<Metric> {
        let mut applied = Vec::new();
        for (i, metric) in Metric::ALL.into_iter().enumerate() {
            if now.duration_since(self.last_tick[i]) >= metric.info().interval {
                self.tick(metric);
                self.last_tick[i] = now;
                applied.push(metric);
            }
        }
        applied
    }
}

impl Default for TelemetrySimulator {
    fn default() -> Self {
        Self::new()
    }
}
