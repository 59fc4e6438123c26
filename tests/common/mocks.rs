use async_trait::async_trait;
use qa_relay::{Error, Result, backend::BackendClient};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted outcome for one question.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Answer(String),
    Status(u16),
    Unreachable,
}

/// Mock backend for testing the relay without a network
#[derive(Debug, Clone)]
pub struct MockBackend {
    pub outcomes: Arc<Mutex<HashMap<String, (MockOutcome, Duration)>>>,
    pub questions: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(HashMap::new())),
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_outcome(self, question: &str, outcome: MockOutcome) -> Self {
        self.with_delayed_outcome(question, outcome, Duration::ZERO)
    }

    pub fn with_delayed_outcome(
        self,
        question: &str,
        outcome: MockOutcome,
        delay: Duration,
    ) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .insert(question.to_string(), (outcome, delay));
        self
    }

    pub fn get_questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendClient for MockBackend {
    async fn ask(&self, question: &str) -> Result<String> {
        self.questions.lock().unwrap().push(question.to_string());

        let scripted = self.outcomes.lock().unwrap().get(question).cloned();
        let (outcome, delay) = scripted.unwrap_or((MockOutcome::Status(404), Duration::ZERO));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match outcome {
            MockOutcome::Answer(answer) => Ok(answer),
            MockOutcome::Status(status) => Err(Error::BackendStatus { status }),
            MockOutcome::Unreachable => Err(Error::BackendUnreachable {
                endpoint: "mock://backend".to_string(),
            }),
        }
    }
}
