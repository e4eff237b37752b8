//! Failure types for the layers around the pool core.
//!
//! None of these are fatal: a failed source falls through to the next one
//! and a failed save leaves the in-memory figures in place.

/// A data source could not supply the match document
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Request never completed (offline, or page opened from the file system)
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed match document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Browser storage disabled, full or unavailable
    #[error("storage error: {0}")]
    Storage(String),

    #[error("export failed: {0}")]
    Export(String),
}

/// Admin form input rejected before it reaches the match record
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AdminError {
    #[error("{field}: '{raw}' is not a number")]
    InvalidAmount { field: &'static str, raw: String },

    #[error("{field}: amounts cannot be negative")]
    NegativeAmount { field: &'static str },

    #[error("match time '{0}' is not a valid date and time")]
    InvalidMatchTime(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}
