//! The UI side of the relay channel: sends questions and tracks the state
//! of each exchange. Rendering lives elsewhere.

use crate::{
    Error, Result,
    messages::{AnswerResponse, QuestionRequest},
    relay::{Envelope, Responder},
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct SurfaceClient {
    relay: mpsc::Sender<Envelope>,
}

impl SurfaceClient {
    pub fn new(relay: mpsc::Sender<Envelope>) -> Self {
        Self { relay }
    }

    /// False once the relay listener is gone (e.g. the runtime was reloaded).
    pub fn is_connected(&self) -> bool {
        !self.relay.is_closed()
    }

    /// Sends one question and waits for its reply.
    ///
    /// A broken channel is reported as `Error::ChannelUnavailable` without
    /// attempting the relay call.
    pub async fn ask(&self, question: &str) -> Result<AnswerResponse> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::EmptyQuestion);
        }

        if !self.is_connected() {
            warn!("Relay channel is closed");
            return Err(Error::ChannelUnavailable);
        }

        let (responder, reply) = Responder::new();
        let envelope = Envelope {
            message: QuestionRequest::new(question).to_message(),
            responder,
        };

        self.relay
            .send(envelope)
            .await
            .map_err(|_| Error::ChannelUnavailable)?;

        debug!("Question sent, awaiting reply");
        reply.await.map_err(|_| Error::ChannelUnavailable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeState {
    Pending,
    Answered(String),
    Failed(String),
}

/// One question and what the surface currently shows for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    pub state: ExchangeState,
}

impl Exchange {
    pub fn pending(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            state: ExchangeState::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == ExchangeState::Pending
    }

    /// Applies the outcome of `SurfaceClient::ask`. Only a pending exchange
    /// transitions; returns whether it did.
    pub fn resolve(&mut self, outcome: Result<AnswerResponse>) -> bool {
        if !self.is_pending() {
            return false;
        }

        self.state = match outcome {
            Ok(AnswerResponse::Answered { answer }) => ExchangeState::Answered(answer),
            Ok(AnswerResponse::Failed { error }) => ExchangeState::Failed(error),
            Err(e) => ExchangeState::Failed(e.to_string()),
        };
        true
    }
}
