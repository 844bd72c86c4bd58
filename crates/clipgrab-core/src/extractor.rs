//! Main extraction API for clipgrab
//!
//! Combines a page source with the parsers and the assembler.

use crate::assemble::assemble;
use crate::client::{ClientConfig, PageClient};
use crate::error::Result;
use crate::parser::{ParsedPage, extract_fields, locate_best_url};
use crate::source::{MetadataApiSource, PageSource, SourceStrategy};
use crate::types::{ExtractionResult, PageDocument};
use crate::url::validate_page_url;

/// Runs one synchronous extraction pass over an already loaded document
///
/// # Errors
/// Returns `ParseError` if the document cannot be parsed. A missing media
/// URL is reported as [`ExtractionResult::Failure`], not as an error.
pub fn extract_document(request_url: &str, document: PageDocument) -> Result<ExtractionResult> {
    let page = ParsedPage::parse(document)?;

    let metadata = extract_fields(&page);
    let best_url = locate_best_url(&page);
    tracing::debug!(
        request_url,
        title = %metadata.title,
        found_media = best_url.is_some(),
        "extraction pass finished"
    );

    Ok(assemble(request_url, metadata, best_url))
}

/// Main extraction API
///
/// Loads a page through its [`PageSource`] and runs [`extract_document`]
/// on it. Holds no state between calls.
pub struct VideoExtractor<S = SourceStrategy> {
    source: S,
}

impl VideoExtractor<SourceStrategy> {
    /// Extractor that scrapes raw markup, with default client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn markup() -> Result<Self> {
        Self::markup_with_config(ClientConfig::default())
    }

    /// Extractor that scrapes raw markup
    pub fn markup_with_config(config: ClientConfig) -> Result<Self> {
        let client = PageClient::with_config(config)?;
        Ok(Self::new(SourceStrategy::Markup(client)))
    }

    /// Extractor backed by a structured metadata provider
    pub fn structured_with_config(endpoint: &str, config: ClientConfig) -> Result<Self> {
        let provider = MetadataApiSource::with_config(endpoint, config)?;
        Ok(Self::new(SourceStrategy::Structured(provider)))
    }

    /// Name of the wired-in strategy
    pub fn strategy_name(&self) -> &'static str {
        self.source.name()
    }
}

impl<S: PageSource> VideoExtractor<S> {
    /// Create an extractor over any page source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Extracts metadata and the primary media URL of a video page
    ///
    /// # Arguments
    /// * `url` - Video page URL
    ///
    /// # Returns
    /// `Success` with metadata and media URL, or `Failure` when no media
    /// URL could be located
    ///
    /// # Errors
    /// - `InvalidUrl` if `url` is not an absolute http(s) URL
    /// - `HttpError` / `HttpStatus` if the page cannot be loaded
    /// - `ParseError` if the page is empty
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> clipgrab_core::Result<()> {
    /// use clipgrab_core::{ExtractionResult, VideoExtractor};
    /// let extractor = VideoExtractor::markup()?;
    /// match extractor.extract("https://example.com/videos/sample-clip").await? {
    ///     ExtractionResult::Success { metadata, primary_url, .. } => {
    ///         println!("{}: {}", metadata.title, primary_url);
    ///     }
    ///     ExtractionResult::Failure { reason } => println!("failed: {}", reason),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        let url = validate_page_url(url)?;

        let document = self.source.load(url).await.inspect_err(|e| {
            tracing::warn!(url, error = %e, "failed to load page");
        })?;

        extract_document(url, document)
    }
}
