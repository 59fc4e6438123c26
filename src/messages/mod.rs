//! Message shapes exchanged between UI surfaces, the relay and the backend.

mod types;

pub use types::*;

use serde_json::Value;

/// Inbound messages the relay recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayMessage {
    AskQuestion(QuestionRequest),
}

impl RelayMessage {
    /// Returns `None` for anything that is not a well-formed recognized
    /// message. The discriminator is `kind`, with `type` accepted too.
    pub fn from_json(value: &Value) -> Option<Self> {
        let kind = value
            .get("kind")
            .or_else(|| value.get("type"))
            .and_then(Value::as_str)?;

        match kind {
            ASK_QUESTION => {
                let question = value.get("question").and_then(Value::as_str)?;
                Some(Self::AskQuestion(QuestionRequest::new(question)))
            }
            _ => None,
        }
    }
}
