//! Core data types for clipgrab
//!
//! Contains the records produced and consumed by the extraction pass.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value substituted for any metadata field that could not be located
pub const PLACEHOLDER: &str = "Unknown";

/// Reason reported when no media URL could be located
pub const MEDIA_NOT_FOUND: &str = "download/media URL not found";

/// Quality label (e.g. "720p") to direct media URL
///
/// Unordered. Labels are opaque and never parsed.
pub type QualityMap = HashMap<String, String>;

/// A metadata value that is either numeric or free text
///
/// Structured providers usually report views and duration as numbers,
/// markup only ever yields text. Serialized untagged so both shapes
/// survive a JSON round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// The placeholder value
    pub fn placeholder() -> Self {
        FieldValue::Text(PLACEHOLDER.to_string())
    }

    /// Whether this value is the placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text == PLACEHOLDER)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Metadata of a single video page
///
/// Always carries all four fields; anything that could not be located
/// holds [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Video title
    pub title: String,

    /// Display name of the uploader
    pub uploader_name: String,

    /// View count
    pub view_count: FieldValue,

    /// Duration, in seconds or as the page's own duration string
    pub duration_seconds: FieldValue,
}

impl PageMetadata {
    /// A record where every field is the placeholder
    pub fn placeholder() -> Self {
        Self {
            title: PLACEHOLDER.to_string(),
            uploader_name: PLACEHOLDER.to_string(),
            view_count: FieldValue::placeholder(),
            duration_seconds: FieldValue::placeholder(),
        }
    }
}

/// Video record as exposed by a structured metadata provider
///
/// Every property may be missing; readers fall back to [`PLACEHOLDER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredVideo {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub views: Option<FieldValue>,

    #[serde(default)]
    pub duration: Option<FieldValue>,

    #[serde(default)]
    pub uploader: Option<String>,

    /// Available renditions keyed by quality label
    #[serde(default)]
    pub qualities: QualityMap,
}

/// A page as handed back by a page source, before parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageDocument {
    /// Raw HTML of the video page
    Markup(String),

    /// Already structured record from a metadata provider
    Structured(StructuredVideo),
}

/// Outcome of one extraction pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExtractionResult {
    Success {
        metadata: PageMetadata,
        primary_url: String,
        request_url: String,
    },
    Failure {
        reason: String,
    },
}

impl ExtractionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success { .. })
    }
}
