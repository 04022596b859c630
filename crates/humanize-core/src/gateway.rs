//! Insight request gateway — one outbound POST per user question.
//!
//! Packages a free-text prompt with a fixed system/context string embedding
//! the current telemetry snapshot, sends it to the configured text API, and
//! returns either the generated text or a canned fallback. All failures are
//! recovered here; nothing propagates as fatal.
//!
//! Query lifecycle: `Idle -> Sending -> {Succeeded, Failed} -> Idle`. One
//! outstanding request per gateway — a submission while one is in flight is
//! rejected, so exactly one result reaches the display per accepted query.
//!
//! The wire sits behind [`InsightTransport`] so tests inject fake services.
//! The external response schema is treated as untyped: text is extracted
//! defensively from either of the shapes seen in the field, never assumed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::{Value, json};
use thiserror::Error;

use crate::config::GatewayConfig;
use crate::flow::peak_flow;
use crate::insight::{InsightResult, NO_RESPONSE_TEXT};
use crate::snapshot::MetricSnapshot;

/// Wire-level failure. Every variant resolves to the fallback insight.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connectivity, DNS, or timeout.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx response from the service.
    #[error("service returned status {0}")]
    Status(u16),
}

/// Sends a prepared request body and returns the decoded JSON payload.
pub trait InsightTransport: Send + Sync {
    fn send(&self, body: &Value) -> Result<Value, TransportError>;
}

/// Version header the reference messages endpoint expects.
const API_VERSION: &str = "2023-06-01";

/// Production transport: blocking HTTP POST with a hard timeout.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &GatewayConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl InsightTransport for HttpTransport {
    fn send(&self, body: &Value) -> Result<Value, TransportError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .header("anthropic-version", API_VERSION)
            .json(body);
        // Missing key: still send; the 401 lands on the ordinary failure path.
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response.json()?)
    }
}

/// Gateway between user questions and the external text API.
pub struct InsightGateway {
    transport: Arc<dyn InsightTransport>,
    model: String,
    max_tokens: u32,
    in_flight: AtomicBool,
}

impl InsightGateway {
    /// Gateway over the production HTTP transport.
    pub fn from_config(config: GatewayConfig) -> Result<Self, TransportError> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(transport, &config))
    }

    /// Gateway over an injected transport (tests, offline demos).
    pub fn with_transport(transport: Arc<dyn InsightTransport>, config: &GatewayConfig) -> Self {
        Self {
            transport,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a request is currently in flight.
    pub fn is_sending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit a question against the current snapshot.
    ///
    /// Returns `None` without touching the network when the trimmed prompt is
    /// empty or another request is already in flight. Otherwise blocks until
    /// the call resolves and always yields a result: live text on success, a
    /// canned fallback on any failure.
    pub fn request_insight(&self, prompt: &str, snapshot: &MetricSnapshot) -> Option<InsightResult> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            log::debug!("ignoring empty insight prompt");
            return None;
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            log::debug!("insight request already in flight; rejecting new submission");
            return None;
        }
        let result = self.dispatch(prompt, snapshot);
        self.in_flight.store(false, Ordering::SeqCst);
        Some(result)
    }

    fn dispatch(&self, prompt: &str, snapshot: &MetricSnapshot) -> InsightResult {
        let body = self.request_body(prompt, snapshot);
        match self.transport.send(&body) {
            Ok(payload) => match extract_text(&payload) {
                Some(text) if !text.trim().is_empty() => InsightResult::live(text),
                _ => {
                    log::warn!("insight response carried no usable text; substituting default");
                    InsightResult::live(NO_RESPONSE_TEXT)
                }
            },
            Err(err) => {
                log::warn!("insight request failed: {err}");
                InsightResult::fallback()
            }
        }
    }

    fn request_body(&self, prompt: &str, snapshot: &MetricSnapshot) -> Value {
        json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": system_prompt(snapshot),
            "messages": [{ "role": "user", "content": prompt }],
        })
    }
}

/// Fixed system/context string with the snapshot's values embedded as text.
fn system_prompt(snapshot: &MetricSnapshot) -> String {
    let peak = peak_flow();
    format!(
        "You are an expert urban design AI assistant for the HumanizeCity platform \
         at Riyadh Sports Boulevard, Saudi Arabia. You analyze pedestrian flow data, \
         environmental sensors (temperature, AQI), and IoT seat usage to provide \
         strategic recommendations for humanizing Saudi cities. \
         Current data: peak pedestrian flow at {} ({} users), {}. \
         Respond with 2-3 concise, actionable urban design recommendations. \
         Use emojis. Be specific with percentages or metrics.",
        peak.hour,
        peak.flow,
        snapshot.summary(),
    )
}

/// Pull generated text out of a provider payload without assuming a schema.
///
/// Two shapes are tolerated: a `content` array of blocks with `text` fields
/// (joined with newlines), or a flat top-level `text` string. Anything else
/// is treated as absent.
fn extract_text(payload: &Value) -> Option<String> {
    if let Some(blocks) = payload.get("content").and_then(Value::as_array) {
        let joined: Vec<&str> = blocks
            .iter()
            .filter_map(|block| block.get("text").and_then(Value::as_str))
            .collect();
        return Some(joined.join("\n"));
    }
    payload
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::{CANNED_INSIGHTS, FALLBACK_PREFIX, InsightSource};
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use std::sync::mpsc;
    use std::thread;
    use std::time::{Duration, Instant};

    /// Transport that records calls and replays a scripted outcome.
    struct FakeTransport {
        calls: AtomicUsize,
        outcome: Mutex<Option<Result<Value, TransportError>>>,
    }

    impl FakeTransport {
        fn ok(payload: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: Mutex::new(Some(Ok(payload))),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: Mutex::new(Some(Err(TransportError::Status(503)))),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl InsightTransport for FakeTransport {
        fn send(&self, _body: &Value) -> Result<Value, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(TransportError::Status(500)))
        }
    }

    fn gateway(transport: Arc<dyn InsightTransport>) -> InsightGateway {
        InsightGateway::with_transport(transport, &GatewayConfig::default())
    }

    #[test]
    fn empty_prompt_is_a_no_op() {
        let transport = FakeTransport::ok(json!({"text": "unused"}));
        let gw = gateway(transport.clone());
        assert!(gw.request_insight("", &MetricSnapshot::default()).is_none());
        assert!(gw.request_insight("   \n\t", &MetricSnapshot::default()).is_none());
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn block_shape_success_returns_live_text() {
        let transport = FakeTransport::ok(json!({
            "content": [{ "type": "text", "text": "Plant more trees." }]
        }));
        let result = gateway(transport)
            .request_insight("test", &MetricSnapshot::default())
            .unwrap();
        assert_eq!(result.text, "Plant more trees.");
        assert_eq!(result.source, InsightSource::Live);
    }

    #[test]
    fn flat_shape_success_returns_live_text() {
        let transport = FakeTransport::ok(json!({ "text": "Plant more trees." }));
        let result = gateway(transport)
            .request_insight("test", &MetricSnapshot::default())
            .unwrap();
        assert_eq!(result.text, "Plant more trees.");
        assert_eq!(result.source, InsightSource::Live);
    }

    #[test]
    fn multiple_blocks_join_with_newlines() {
        let transport = FakeTransport::ok(json!({
            "content": [
                { "type": "text", "text": "Add shade." },
                { "type": "text", "text": "Add seats." }
            ]
        }));
        let result = gateway(transport)
            .request_insight("test", &MetricSnapshot::default())
            .unwrap();
        assert_eq!(result.text, "Add shade.\nAdd seats.");
    }

    #[test]
    fn malformed_payload_substitutes_default_text() {
        for payload in [json!({}), json!({"content": []}), json!({"content": "nope"})] {
            let transport = FakeTransport::ok(payload);
            let result = gateway(transport)
                .request_insight("test", &MetricSnapshot::default())
                .unwrap();
            assert_eq!(result.text, NO_RESPONSE_TEXT);
            assert_eq!(result.source, InsightSource::Live);
        }
    }

    #[test]
    fn transport_failure_yields_canned_fallback() {
        let result = gateway(FakeTransport::failing())
            .request_insight("test", &MetricSnapshot::default())
            .unwrap();
        assert_eq!(result.source, InsightSource::Fallback);
        let tail = result.text.strip_prefix(FALLBACK_PREFIX).unwrap();
        assert!(CANNED_INSIGHTS.contains(&tail));
    }

    #[test]
    fn request_body_embeds_snapshot_and_prompt() {
        let gw = gateway(FakeTransport::ok(json!({})));
        let body = gw.request_body("Where should we add shade?", &MetricSnapshot::default());
        assert_eq!(body["model"], "claude-sonnet-4-20250514");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Where should we add shade?");
        let system = body["system"].as_str().unwrap();
        assert!(system.contains("7842"));
        assert!(system.contains("18:00"));
        assert!(system.contains("920"));
    }

    /// Transport that blocks until released, to hold the gateway in `Sending`.
    struct GatedTransport {
        calls: AtomicUsize,
        gate: Mutex<mpsc::Receiver<()>>,
    }

    impl InsightTransport for GatedTransport {
        fn send(&self, _body: &Value) -> Result<Value, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let _ = self.gate.lock().unwrap().recv();
            Ok(json!({ "text": "first answer" }))
        }
    }

    #[test]
    fn second_submission_while_sending_is_rejected() {
        let (release, gate) = mpsc::channel();
        let transport = Arc::new(GatedTransport {
            calls: AtomicUsize::new(0),
            gate: Mutex::new(gate),
        });
        let gw = Arc::new(gateway(transport.clone()));

        let first = {
            let gw = Arc::clone(&gw);
            thread::spawn(move || gw.request_insight("first", &MetricSnapshot::default()))
        };

        // Wait until the first request is actually on the wire.
        let deadline = Instant::now() + Duration::from_secs(2);
        while transport.calls.load(Ordering::SeqCst) == 0 {
            assert!(Instant::now() < deadline, "first request never dispatched");
            thread::sleep(Duration::from_millis(5));
        }
        assert!(gw.is_sending());

        // The overlapping submission is rejected without a network call.
        assert!(gw.request_insight("second", &MetricSnapshot::default()).is_none());

        release.send(()).unwrap();
        let result = first.join().unwrap().unwrap();
        assert_eq!(result.text, "first answer");
        assert_eq!(result.source, InsightSource::Live);
        // Exactly one request reached the transport.
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert!(!gw.is_sending());
    }
}
