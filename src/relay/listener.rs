use super::Relay;
use crate::messages::AnswerResponse;
use serde_json::Value;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};
use tracing::{debug, info};

/// One-shot completion handle for a single inbound message.
///
/// `respond` consumes the handle, so a request can be answered at most once.
/// Dropping it unanswered closes the caller's receiver.
#[derive(Debug)]
pub struct Responder {
    tx: oneshot::Sender<AnswerResponse>,
}

impl Responder {
    pub fn new() -> (Self, oneshot::Receiver<AnswerResponse>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Returns false when the caller stopped waiting.
    pub fn respond(self, response: AnswerResponse) -> bool {
        self.tx.send(response).is_ok()
    }
}

/// A message paired with the handle its reply must go to.
#[derive(Debug)]
pub struct Envelope {
    pub message: Value,
    pub responder: Responder,
}

impl Relay {
    /// Dispatches every inbound envelope until all senders are dropped.
    pub async fn listen(self, mut inbox: mpsc::Receiver<Envelope>) {
        info!("Relay listener started");

        while let Some(envelope) = inbox.recv().await {
            let accepted = self.on_message(envelope.message, envelope.responder);
            debug!("Inbound message accepted: {}", accepted);
        }

        info!("Relay listener stopped: all senders dropped");
    }
}

/// Spawns a listener for `relay` and returns the sending half of its inbox.
pub fn channel(relay: Relay, capacity: usize) -> (mpsc::Sender<Envelope>, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(capacity);
    let handle = tokio::spawn(relay.listen(rx));
    (tx, handle)
}
