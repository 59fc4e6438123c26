use serde::{Deserialize, Serialize};

pub const ASK_QUESTION: &str = "ASK_QUESTION";

/// UI Surface -> Relay: a question to forward to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

impl QuestionRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    /// Envelope form as sent over the messaging channel.
    pub fn to_message(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": ASK_QUESTION,
            "question": self.question,
        })
    }
}

/// Relay -> UI Surface: the single reply to one `QuestionRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireAnswer", try_from = "WireAnswer")]
pub enum AnswerResponse {
    Answered { answer: String },
    Failed { error: String },
}

impl AnswerResponse {
    pub fn answered(answer: impl Into<String>) -> Self {
        Self::Answered {
            answer: answer.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Answered { .. })
    }
}

#[derive(Serialize, Deserialize)]
struct WireAnswer {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<AnswerResponse> for WireAnswer {
    fn from(response: AnswerResponse) -> Self {
        match response {
            AnswerResponse::Answered { answer } => Self {
                success: true,
                answer: Some(answer),
                error: None,
            },
            AnswerResponse::Failed { error } => Self {
                success: false,
                answer: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireAnswer> for AnswerResponse {
    type Error = String;

    fn try_from(wire: WireAnswer) -> Result<Self, Self::Error> {
        match (wire.success, wire.answer, wire.error) {
            (true, Some(answer), _) => Ok(Self::Answered { answer }),
            (true, None, _) => Err("successful response is missing 'answer'".to_string()),
            (false, _, Some(error)) => Ok(Self::Failed { error }),
            (false, _, None) => Err("failed response is missing 'error'".to_string()),
        }
    }
}

/// Relay -> Backend request body.
#[derive(Debug, Clone, Serialize)]
pub struct BackendQuestion<'a> {
    pub question: &'a str,
}

/// Backend -> Relay response body.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendAnswer {
    pub answer: String,
}
