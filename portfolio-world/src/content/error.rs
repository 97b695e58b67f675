use thiserror::Error;

/// Why one content list could not be refreshed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("request failed with status code {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
