use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP Error: {status}")]
    Status { status: StatusCode, body: String },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected response body: {0}")]
    Decode(String),
    #[error("Invalid endpoint: {0}")]
    Endpoint(String),
}

impl FetchError {
    /// Upstream response text, when the failure came with one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            FetchError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
