use lambda_http::http;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("non 200 response found: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("no IP in HTTP response")]
    EmptyIp,

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response builder rejected the status or headers.
    #[error("failed to build response: {0}")]
    Response(#[from] http::Error),

    /// The reqwest client could not be built, e.g. no TLS backend.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl HandlerError {
    pub fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }
}

pub type Result<T> = std::result::Result<T, HandlerError>;
