use thiserror::Error;

/// Anything that stops a listing fetch from producing a list.
///
/// The variants only shape the log line; every one of them is handled the
/// same way by the view.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Listing service returned HTTP {0}")]
    Status(u16),
    #[error("Could not decode listings: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}
