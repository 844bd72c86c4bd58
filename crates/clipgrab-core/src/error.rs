//! Error types for clipgrab
//!
//! Provides a single error enum with human-readable messages
//! and string serialization for JSON error bodies.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all clipgrab operations
///
/// A page whose media URL cannot be located is not an error here:
/// that outcome is reported as [`crate::ExtractionResult::Failure`].
#[derive(Error, Debug)]
pub enum ClipgrabError {
    /// Transport-level HTTP failure (connect, timeout, body decode)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Page or metadata endpoint answered with a non-2xx status
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// Document could not be parsed at all
    #[error("Failed to parse document: {0}")]
    ParseError(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Image API answered with a non-2xx status
    #[error("Error from external API: {body}")]
    Upstream { status: u16, body: String },
}

impl ClipgrabError {
    /// Whether the error came from retrieving the document
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::HttpStatus { .. })
    }
}

impl Serialize for ClipgrabError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for clipgrab operations
pub type Result<T> = std::result::Result<T, ClipgrabError>;
