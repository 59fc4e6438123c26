use crate::{
    Error, Result,
    config::RelayConfig,
    messages::{BackendAnswer, BackendQuestion},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Sends one question and returns the backend's answer text.
    async fn ask(&self, question: &str) -> Result<String>;
}

/// Question-answering backend reached over HTTP.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpBackend {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint_url.clone(),
            timeout: config.timeout(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn exchange(&self, question: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&BackendQuestion { question })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Backend {} answered with status {}", self.endpoint, status);
            return Err(Error::BackendStatus {
                status: status.as_u16(),
            });
        }

        let body: BackendAnswer = response.json().await.map_err(|e| {
            if e.is_decode() {
                Error::malformed(e.to_string())
            } else {
                self.transport_error(e)
            }
        })?;

        Ok(body.answer)
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        warn!("Backend request to {} failed: {}", self.endpoint, e);
        Error::BackendUnreachable {
            endpoint: self.endpoint.clone(),
        }
    }
}

#[async_trait]
impl BackendClient for HttpBackend {
    async fn ask(&self, question: &str) -> Result<String> {
        debug!(
            "Forwarding question ({} chars) to {}",
            question.len(),
            self.endpoint
        );

        match self.timeout {
            // Dropping the exchange future on expiry aborts the request.
            Some(limit) => tokio::time::timeout(limit, self.exchange(question))
                .await
                .map_err(|_| {
                    warn!("Backend {} timed out after {:?}", self.endpoint, limit);
                    Error::BackendTimeout {
                        timeout_ms: limit.as_millis() as u64,
                    }
                })?,
            None => self.exchange(question).await,
        }
    }
}
