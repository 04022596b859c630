//! Integration tests for humanize-core.
//!
//! These exercise the full loop the dashboard drives: simulator ticks →
//! snapshot → gateway request → insight result, plus seat-board toggles.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use humanize_core::gateway::{InsightTransport, TransportError};
use humanize_core::{
    CANNED_INSIGHTS, FALLBACK_PREFIX, GatewayConfig, InsightGateway, InsightSource, Metric,
    ScriptedRng, SeatBoard, SeatStatus, TelemetrySimulator,
};
use serde_json::{Value, json};

#[test]
fn long_run_stays_inside_documented_bounds() {
    let mut sim = TelemetrySimulator::new();
    let mut prev_steps = sim.snapshot().steps;
    for _ in 0..10_000 {
        sim.tick_all();
        let s = sim.snapshot();
        assert!(s.steps >= prev_steps && s.steps <= s.step_goal);
        assert!((20..=120).contains(&s.air_quality_index));
        assert!((10..=60).contains(&s.humidity_pct));
        assert!((0..=30).contains(&s.wind_kph));
        assert!((15.0..=50.0).contains(&s.temperature_c));
        prev_steps = s.steps;
    }
    // 10k ticks at 3..=15 steps each is far past the goal: must be frozen there.
    assert_eq!(sim.snapshot().steps, sim.snapshot().step_goal);
}

#[test]
fn scripted_session_is_reproducible() {
    let run = || {
        let mut sim = TelemetrySimulator::with_rng(Box::new(ScriptedRng::new(
            (0..60i64).map(|i| (i % 19) - 9),
            (0..20).map(|i| f64::from(i) / 250.0 - 0.04),
        )));
        for _ in 0..10 {
            sim.tick_all();
        }
        sim.snapshot().clone()
    };
    assert_eq!(run(), run());
}

struct ScriptedService {
    calls: AtomicUsize,
    payload: Value,
    fail: bool,
}

impl InsightTransport for ScriptedService {
    fn send(&self, body: &Value) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // The request must carry the live snapshot in its system context.
        assert!(body["system"].as_str().unwrap().contains("AQI"));
        if self.fail {
            Err(TransportError::Status(502))
        } else {
            Ok(self.payload.clone())
        }
    }
}

#[test]
fn live_insight_round_trip_uses_current_snapshot() {
    let mut sim = TelemetrySimulator::new();
    sim.tick_all();

    let service = Arc::new(ScriptedService {
        calls: AtomicUsize::new(0),
        payload: json!({ "content": [{ "type": "text", "text": "Plant more trees." }] }),
        fail: false,
    });
    let gateway = InsightGateway::with_transport(service.clone(), &GatewayConfig::default());

    let result = gateway
        .request_insight("How do we cool Zone C?", sim.snapshot())
        .expect("non-empty prompt must resolve");
    assert_eq!(result.text, "Plant more trees.");
    assert_eq!(result.source, InsightSource::Live);
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);

    // The gateway is idle again: a follow-up query is accepted.
    assert!(gateway.request_insight("And Zone A?", sim.snapshot()).is_some());
}

#[test]
fn dead_service_degrades_to_canned_insight() {
    let service = Arc::new(ScriptedService {
        calls: AtomicUsize::new(0),
        payload: json!({}),
        fail: true,
    });
    let gateway = InsightGateway::with_transport(service, &GatewayConfig::default());

    let sim = TelemetrySimulator::new();
    let result = gateway
        .request_insight("Anything?", sim.snapshot())
        .unwrap();
    assert_eq!(result.source, InsightSource::Fallback);
    let tail = result.text.strip_prefix(FALLBACK_PREFIX).unwrap();
    assert!(CANNED_INSIGHTS.contains(&tail));
}

#[test]
fn seat_board_session_flow() {
    let mut board = SeatBoard::default();
    let before = board.counts();
    assert_eq!(before.occupied + before.available + before.folded, 6);

    // Fold an available zone, shade it, unfold it: back where we started.
    assert_eq!(board.toggle_fold("C2"), Some(SeatStatus::Folded));
    assert_eq!(board.toggle_shade("C2"), Some(SeatStatus::Folded));
    assert_eq!(board.toggle_fold("C2"), Some(SeatStatus::Available));
    assert_eq!(board.toggle_shade("C2"), Some(SeatStatus::Available));

    let after = board.counts();
    assert_eq!(before, after);
}

#[test]
fn metric_catalog_drives_the_simulator() {
    // Every cataloged metric is tickable without affecting the others' bounds.
    let mut sim = TelemetrySimulator::new();
    for metric in Metric::ALL {
        sim.tick(metric);
    }
    assert!(sim.snapshot().steps >= 7842);
}
