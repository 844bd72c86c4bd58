//! Result assembly
//!
//! Combines extracted metadata and the located media URL into the single
//! outcome of an extraction pass.

use crate::types::{ExtractionResult, MEDIA_NOT_FOUND, PageMetadata};

/// Builds the extraction outcome
///
/// A missing media URL is the only failure; metadata placeholders never
/// turn a result into a failure. The URL is passed through without any
/// scheme or reachability check.
pub fn assemble(
    request_url: &str,
    metadata: PageMetadata,
    best_url: Option<String>,
) -> ExtractionResult {
    match best_url {
        Some(primary_url) => ExtractionResult::Success {
            metadata,
            primary_url,
            request_url: request_url.to_string(),
        },
        None => ExtractionResult::Failure {
            reason: MEDIA_NOT_FOUND.to_string(),
        },
    }
}
