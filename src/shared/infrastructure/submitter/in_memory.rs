// In memory implementation of the Submitter port.
//
// Purpose
// - Support handler tests and local development without the remote API.
//
// Responsibilities
// - Record every submission for inspection.
// - Answer with a canned response, or fail when toggled offline or set to reject.

use crate::shared::infrastructure::submitter::{Endpoint, SubmissionError, Submitter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSubmission {
    pub endpoint: String,
    pub payload: serde_json::Value,
}

pub struct InMemorySubmitter {
    pub calls: Mutex<Vec<RecordedSubmission>>,
    response: serde_json::Value,
    reject_status: Option<u16>,
    is_offline: bool,
    delay_ms: AtomicU64,
}

impl Default for InMemorySubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySubmitter {
    pub fn new() -> Self {
        Self::responding_with(serde_json::json!({ "status": "ok" }))
    }

    pub fn responding_with(response: serde_json::Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
            reject_status: None,
            is_offline: false,
            delay_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn reject_with(&mut self, status: u16) {
        self.reject_status = Some(status);
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait::async_trait]
impl Submitter for InMemorySubmitter {
    async fn submit(
        &self,
        endpoint: &Endpoint,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, SubmissionError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        self.calls.lock().await.push(RecordedSubmission {
            endpoint: endpoint.name.clone(),
            payload: payload.clone(),
        });

        if self.is_offline {
            return Err(SubmissionError::Offline);
        }
        if let Some(status) = self.reject_status {
            return Err(SubmissionError::Status { status });
        }
        Ok(self.response.clone())
    }
}
