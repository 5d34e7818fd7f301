// Port for the one outbound call a form makes after it validates.
//
// Purpose
// - Let the submit pipeline send a payload to the remote salon API without
//   knowing whether it is HTTP, a local store or a test double.
//
// Responsibilities
// - Exactly one call per submission. No retries.
// - Collapse every failure (status, transport, timeout) into SubmissionError.
//   Callers treat all variants the same; the variants exist for logs.
//
// Testing guidance
// - Use InMemorySubmitter to record calls and simulate an unavailable API.

pub mod http;
pub mod in_memory;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {status}")]
    Status { status: u16 },

    #[error("submitter offline")]
    Offline,

    #[error("rejected: {0}")]
    Rejected(String),
}

/// Where a flow submits to. The path is joined onto the submitter's base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub name: String,
    pub path: String,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        endpoint: &Endpoint,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, SubmissionError>;
}
