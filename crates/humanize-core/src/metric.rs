//! Simulated metric catalog.
//!
//! Every metric the simulator manages declares static metadata via
//! [`MetricInfo`]: display name, unit, a one-line description, its own tick
//! cadence, and the documented bounds of its walk.

use std::time::Duration;

/// A metric managed by the telemetry simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Citizen step count, monotonic until the daily goal.
    Steps,
    /// Ambient temperature in °C.
    Temperature,
    /// Air-quality index.
    AirQuality,
    /// Relative humidity in percent.
    Humidity,
    /// Wind speed in km/h.
    Wind,
}

/// Metadata about a simulated metric.
#[derive(Debug, Clone)]
pub struct MetricInfo {
    /// Unique identifier (e.g. `"air_quality"`).
    pub name: &'static str,
    /// Display unit.
    pub unit: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
    /// Wall-clock interval between walk applications for this metric.
    pub interval: Duration,
    /// Documented clamp bounds of the walk, when fixed.
    ///
    /// `None` for steps: its upper bound is the snapshot's step goal.
    pub bounds: Option<(f64, f64)>,
}

static STEPS_INFO: MetricInfo = MetricInfo {
    name: "steps",
    unit: "steps",
    description: "Citizen step count, climbing toward the daily goal",
    interval: Duration::from_millis(1500),
    bounds: None,
};

static TEMPERATURE_INFO: MetricInfo = MetricInfo {
    name: "temperature",
    unit: "°C",
    description: "Ambient boulevard temperature",
    interval: Duration::from_millis(2000),
    bounds: Some((15.0, 50.0)),
};

static AIR_QUALITY_INFO: MetricInfo = MetricInfo {
    name: "air_quality",
    unit: "AQI",
    description: "Air-quality index from the boulevard sensor bank",
    interval: Duration::from_millis(2000),
    bounds: Some((20.0, 120.0)),
};

static HUMIDITY_INFO: MetricInfo = MetricInfo {
    name: "humidity",
    unit: "%",
    description: "Relative humidity",
    interval: Duration::from_millis(2000),
    bounds: Some((10.0, 60.0)),
};

static WIND_INFO: MetricInfo = MetricInfo {
    name: "wind",
    unit: "km/h",
    description: "Wind speed along the promenade",
    interval: Duration::from_millis(2000),
    bounds: Some((0.0, 30.0)),
};

impl Metric {
    /// Every managed metric, in display order.
    pub const ALL: [Metric; 5] = [
        Metric::Steps,
        Metric::Temperature,
        Metric::AirQuality,
        Metric::Humidity,
        Metric::Wind,
    ];

    /// Metric metadata.
    pub fn info(&self) -> &'static MetricInfo {
        match self {
            Metric::Steps => &STEPS_INFO,
            Metric::Temperature => &TEMPERATURE_INFO,
            Metric::AirQuality => &AIR_QUALITY_INFO,
            Metric::Humidity => &HUMIDITY_INFO,
            Metric::Wind => &WIND_INFO,
        }
    }

    /// Convenience: name from info.
    pub fn name(&self) -> &'static str {
        self.info().name
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
