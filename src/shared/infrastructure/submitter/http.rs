use crate::shared::infrastructure::submitter::{Endpoint, SubmissionError, Submitter};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct HttpSubmitterConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpSubmitterConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Submits JSON payloads to the remote salon API with a POST per call.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    base_url: String,
    client: Client,
}

impl HttpSubmitter {
    pub fn new(config: HttpSubmitterConfig) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path.trim_start_matches('/'))
    }
}

fn classify(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        SubmissionError::Timeout
    } else {
        SubmissionError::Transport(err.to_string())
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(
        &self,
        endpoint: &Endpoint,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, SubmissionError> {
        let url = self.url(endpoint);
        debug!(endpoint = %endpoint.name, %url, "submitting form");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %endpoint.name, status = status.as_u16(), "submission rejected by api");
            return Err(SubmissionError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(classify)?;
        Ok(serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null))
    }
}
