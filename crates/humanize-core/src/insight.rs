//! Insight results and the canned fallback pool.
//!
//! An insight is a short natural-language planning recommendation: generated
//! live by the external text API, or drawn from the fixed pool when the
//! service is unreachable. The user always sees prose, never a raw error.

use rand::Rng;
use serde::Serialize;

/// Fixed pool of cached insights used when the AI service is unreachable.
pub const CANNED_INSIGHTS: [&str; 5] = [
    "🌿 Peak pedestrian flow at 18:00–19:00 suggests deploying 40% more activated seating in Zone C during evening hours.",
    "☁️ AQI exceeds 60 in afternoon windows — recommend dynamic shade deployment and misting activation between 13:00–16:00.",
    "📍 Heritage Path shows 2.3× engagement vs. standard routes. Expand storytelling nodes at Ottoman Archway and Spice Market Echo.",
    "🌡️ Temperature gradient between zones A and C exceeds 4°C. IoT-controlled microclimate adjustments can reduce heat stress by 31%.",
    "🚶 Pedestrian dwell time near art installations averages 4.7 min vs. 1.2 min in open corridors — prioritize cultural anchor points in expansion.",
];

/// Warning prefix prepended to a canned insight on the failure path.
pub const FALLBACK_PREFIX: &str = "⚠️ Unable to reach AI service. Here's a cached insight:\n\n";

/// Substituted when a successful response yields no usable text.
pub const NO_RESPONSE_TEXT: &str = "No response generated.";

/// Where an insight's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    /// Generated by the external text API.
    Live,
    /// Drawn from the canned pool after a failure.
    Fallback,
}

impl std::fmt::Display for InsightSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A resolved insight query. At most one is displayed at a time; a new result
/// replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightResult {
    pub text: String,
    pub source: InsightSource,
}

impl InsightResult {
    /// A live result from extracted response text.
    pub fn live(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: InsightSource::Live,
        }
    }

    /// The failure-path result: warning prefix plus one random canned insight.
    pub fn fallback() -> Self {
        let idx = rand::rng().random_range(0..CANNED_INSIGHTS.len());
        Self {
            text: format!("{FALLBACK_PREFIX}{}", CANNED_INSIGHTS[idx]),
            source: InsightSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_prefix_plus_pool_entry() {
        for _ in 0..50 {
            let result = InsightResult::fallback();
            assert_eq!(result.source, InsightSource::Fallback);
            let tail = result
                .text
                .strip_prefix(FALLBACK_PREFIX)
                .expect("fallback must start with the warning prefix");
            assert!(CANNED_INSIGHTS.contains(&tail));
        }
    }

    #[test]
    fn live_result_keeps_text_verbatim() {
        let result = InsightResult::live("Plant more trees.");
        assert_eq!(result.text, "Plant more trees.");
        assert_eq!(result.source, InsightSource::Live);
    }
}
