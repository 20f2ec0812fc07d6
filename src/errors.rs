use thiserror::Error;

/// A failed fetch against the volumes API.
///
/// Connectivity failures, non-2xx statuses and undecodable bodies all end up
/// here; callers get exactly one observable failure outcome and no subtype to
/// branch on. The message is kept for logs only.
#[derive(Debug, Clone, Error)]
#[error("fetch failed: {message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
