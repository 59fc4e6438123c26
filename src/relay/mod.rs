//! Forwards questions from restricted UI contexts to the backend and routes
//! each result back to the caller that asked.

mod listener;

pub use listener::{Envelope, Responder, channel};

use crate::{
    backend::{BackendClient, HttpBackend},
    config::RelayConfig,
    messages::{AnswerResponse, QuestionRequest, RelayMessage},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct Relay {
    backend: Arc<dyn BackendClient>,
}

impl Relay {
    pub fn new(backend: Arc<dyn BackendClient>) -> Self {
        Self { backend }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        info!(
            "Relaying questions to {} (timeout: {:?})",
            config.endpoint_url, config.timeout_millis
        );
        Self::new(Arc::new(HttpBackend::new(config)))
    }

    /// Runs one backend exchange. Every failure becomes `AnswerResponse::Failed`.
    pub async fn handle(&self, request: &QuestionRequest) -> AnswerResponse {
        match self.backend.ask(&request.question).await {
            Ok(answer) => {
                debug!("Backend answered ({} chars)", answer.len());
                AnswerResponse::answered(answer)
            }
            Err(e) => {
                if e.is_backend_failure() {
                    warn!("Backend exchange failed: {}", e);
                } else {
                    error!("Relay request failed: {}", e);
                }
                AnswerResponse::failed(e.to_string())
            }
        }
    }

    /// Listener entry point.
    ///
    /// Returns `true` when the message was recognized and its reply will be
    /// delivered later through `responder`. Unrecognized messages drop the
    /// responder without replying and return `false`.
    pub fn on_message(&self, message: Value, responder: Responder) -> bool {
        let Some(RelayMessage::AskQuestion(request)) = RelayMessage::from_json(&message) else {
            debug!("Ignoring unrecognized message");
            return false;
        };

        let relay = self.clone();
        let span = info_span!("relay_request", request_id = %Uuid::new_v4());
        tokio::spawn(
            async move {
                let response = relay.handle(&request).await;
                if !responder.respond(response) {
                    debug!("Caller went away before the reply was delivered");
                }
            }
            .instrument(span),
        );

        true
    }
}
