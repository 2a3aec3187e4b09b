//! Error types for site-notes.
//!
//! Field extraction itself never fails. These errors only arise when decoding
//! note payloads from raw bytes.

/// Error type for payload decoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload was not valid JSON.
    #[error("JSON parsing failed: {0}")]
    Json(String),

    /// The payload was valid JSON but not a note object or array of notes.
    #[error("Invalid note payload: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for payload decoding.
pub type Result<T> = std::result::Result<T, Error>;
