use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Could not reach the backend at {endpoint}. Make sure the question-answering server is running."
    )]
    BackendUnreachable { endpoint: String },

    #[error("Backend returned HTTP {status}")]
    BackendStatus { status: u16 },

    #[error(
        "Backend did not respond within {timeout_ms} ms. It may still be starting up, try again shortly."
    )]
    BackendTimeout { timeout_ms: u64 },

    #[error("Backend returned an unexpected response: {0}")]
    MalformedResponse(String),

    #[error("Extension context invalidated. Please refresh the page to continue.")]
    ChannelUnavailable,

    #[error("Question must not be empty")]
    EmptyQuestion,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// True for failures raised by the outbound backend exchange.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            Self::BackendUnreachable { .. }
                | Self::BackendStatus { .. }
                | Self::BackendTimeout { .. }
                | Self::MalformedResponse(_)
        )
    }
}
