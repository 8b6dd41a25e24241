//! Error Types

use thiserror::Error;

/// Any failure while fetching a tab's collection.
///
/// The `Display` output is shown verbatim in the error panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// Server answered outside the 2xx range.
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// Request never produced a response (network down, CORS, ...).
    #[error("{0}")]
    Transport(String),

    /// Response body was not the expected JSON array.
    #[error("{0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        FetchFailure::Parse(err.to_string())
    }
}

/// A `data-tab` value that names no known tab.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab: {0:?}")]
pub struct UnknownTab(pub String);
