//! Point-in-time telemetry snapshot.
//!
//! One flat record holding every simulated metric. The simulator mutates it
//! through the documented tick rules; everything else reads it.

use serde::{Deserialize, Serialize};

/// Daily step goal. Steps freeze once they reach it.
pub const STEP_GOAL: u32 = 10_000;

/// Current values of all simulated boulevard metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub steps: u32,
    pub step_goal: u32,
    pub temperature_c: f64,
    pub air_quality_index: i32,
    pub humidity_pct: i32,
    pub wind_kph: i32,
}

impl Default for MetricSnapshot {
    /// Reference seed values for the boulevard deployment.
    fn default() -> Self {
        Self {
            steps: 7842,
            step_goal: STEP_GOAL,
            temperature_c: 32.4,
            air_quality_index: 58,
            humidity_pct: 24,
            wind_kph: 12,
        }
    }
}

impl MetricSnapshot {
    /// Step progress toward the goal, 0–100.
    pub fn step_pct(&self) -> f64 {
        if self.step_goal == 0 {
            return 100.0;
        }
        (self.steps as f64 / self.step_goal as f64 * 100.0).min(100.0)
    }

    /// Whether the daily step goal has been reached.
    pub fn goal_reached(&self) -> bool {
        self.steps >= self.step_goal
    }

    /// AQI display band: Good below 50, Moderate below 100, Unhealthy above.
    pub fn aqi_label(&self) -> &'static str {
        if self.air_quality_index < 50 {
            "Good"
        } else if self.air_quality_index < 100 {
            "Moderate"
        } else {
            "Unhealthy"
        }
    }

    /// Plain-text one-liner of every value, used for prompt context and the
    /// `snapshot` command.
    pub fn summary(&self) -> String {
        format!(
            "steps {}/{}, temp {:.1}°C, AQI {} ({}), humidity {}%, wind {} km/h",
            self.steps,
            self.step_goal,
            self.temperature_c,
            self.air_quality_index,
            self.aqi_label(),
            self.humidity_pct,
            self.wind_kph,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_values_match_reference() {
        let snap = MetricSnapshot::default();
        assert_eq!(snap.steps, 7842);
        assert_eq!(snap.step_goal, 10_000);
        assert!((snap.temperature_c - 32.4).abs() < f64::EPSILON);
        assert_eq!(snap.air_quality_index, 58);
        assert_eq!(snap.humidity_pct, 24);
        assert_eq!(snap.wind_kph, 12);
    }

    #[test]
    fn aqi_bands() {
        let mut snap = MetricSnapshot::default();
        snap.air_quality_index = 30;
        assert_eq!(snap.aqi_label(), "Good");
        snap.air_quality_index = 58;
        assert_eq!(snap.aqi_label(), "Moderate");
        snap.air_quality_index = 110;
        assert_eq!(snap.aqi_label(), "Unhealthy");
    }

    #[test]
    fn step_pct_caps_at_hundred() {
        let mut snap = MetricSnapshot::default();
        snap.steps = 25_000;
        assert_eq!(snap.step_pct(), 100.0);
    }

    #[test]
    fn summary_embeds_every_metric() {
        let snap = MetricSnapshot::default();
        let s = snap.summary();
        assert!(s.contains("7842"));
        assert!(s.contains("32.4"));
        assert!(s.contains("58"));
        assert!(s.contains("24%"));
        assert!(s.contains("12 km/h"));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snap = MetricSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: MetricSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
