use crate::shared::infrastructure::submitter::SubmissionError;

/// Outcome of one submission attempt. Produced once, consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success { server_response: serde_json::Value },
    Failure { error: SubmissionError },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }
}

impl From<Result<serde_json::Value, SubmissionError>> for SubmissionResult {
    fn from(result: Result<serde_json::Value, SubmissionError>) -> Self {
        match result {
            Ok(server_response) => SubmissionResult::Success { server_response },
            Err(error) => SubmissionResult::Failure { error },
        }
    }
}
