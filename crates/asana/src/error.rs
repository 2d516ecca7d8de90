//! Error types for the Asana task source.

use thiserror::Error;

/// Errors that can occur while loading tasks from Asana.
#[derive(Error, Debug)]
pub enum AsanaError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("Asana API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response or snapshot JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
