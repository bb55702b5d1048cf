//! Error types for Punk API operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching or rendering beers.
#[derive(Debug, Error)]
pub enum PunkError {
    /// HTTP transport error (connection refused, DNS, TLS, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not a JSON array of beers.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// API answered with a non-success status.
    #[error("Punk API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Output file could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing rendered output to stdout failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl PunkError {
    /// True for failures that happened before a response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, PunkError::Network(_))
    }

    /// True when the response arrived but could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, PunkError::Decode(_))
    }
}

/// Result type alias for Punk API operations.
pub type Result<T> = core::result::Result<T, PunkError>;
