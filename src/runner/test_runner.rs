use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use serde_json::{Value, json};

use crate::models::Endpoint;

/// Artificial pacing delay before a simulated call settles. UX pacing only,
/// not a timeout.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(800);

/// Body of a settled simulated call: the canned response parsed as JSON, or
/// the raw string when it is not a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(Value),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub status: u16,
    pub body: ResponseBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestResult {
    fn settled(body: ResponseBody) -> Self {
        Self { status: 200, body, error: None }
    }

    fn failure(message: String) -> Self {
        Self {
            status: 500,
            body: ResponseBody::Json(json!({})),
            error: Some(message),
        }
    }
}

/// Emulates calling an endpoint from the data already on its description.
/// Never performs network I/O. Each invocation settles exactly once; when
/// invocations overlap, the slot keeps the result of the latest invocation.
pub struct TestRunner {
    latency: Duration,
    tickets: AtomicU64,
    slot: Mutex<Option<(u64, TestResult)>>,
}

impl TestRunner {
    pub fn new() -> Self {
        Self::with_latency(SIMULATED_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            tickets: AtomicU64::new(0),
            slot: Mutex::new(None),
        }
    }

    pub async fn run(&self, endpoint: &Endpoint) -> TestResult {
        let ticket = self.tickets.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.latency).await;

        let sample = endpoint.sample_response.clone();
        // Decode on its own task so a failure there surfaces as a 500 result
        // instead of unwinding into the caller.
        let result = match tokio::spawn(async move { decode(&sample) }).await {
            Ok(body) => TestResult::settled(body),
            Err(err) => TestResult::failure(format!("simulated call failed: {}", err)),
        };

        self.settle(ticket, result.clone());
        result
    }

    /// The most recently settled result, if any invocation has settled yet.
    pub fn latest(&self) -> Option<TestResult> {
        self.slot
            .lock()
            .expect("result slot lock")
            .as_ref()
            .map(|(_, result)| result.clone())
    }

    // Last invocation wins: an older invocation never overwrites the result
    // of a newer one, regardless of settle order.
    fn settle(&self, ticket: u64, result: TestResult) {
        let mut slot = self.slot.lock().expect("result slot lock");
        match &*slot {
            Some((latest, _)) if *latest > ticket => {}
            _ => *slot = Some((ticket, result)),
        }
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(sample: &str) -> ResponseBody {
    match serde_json::from_str::<Value>(sample) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Raw(sample.to_string()),
    }
}
