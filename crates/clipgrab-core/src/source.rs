//! Page sources
//!
//! A page source turns a page URL into a [`PageDocument`]. The markup
//! source returns raw HTML, the metadata API source returns an already
//! structured record. [`SourceStrategy`] selects one at wiring time.

use std::future::Future;

use crate::client::{ClientConfig, PageClient, build_http_client, ensure_success};
use crate::error::{ClipgrabError, Result};
use crate::types::{PageDocument, StructuredVideo};
use crate::url::build_metadata_url;

/// Something that can load a video page for extraction
pub trait PageSource {
    fn load(&self, url: &str) -> impl Future<Output = Result<PageDocument>> + Send;
}

impl PageSource for PageClient {
    async fn load(&self, url: &str) -> Result<PageDocument> {
        self.fetch(url).await.map(PageDocument::Markup)
    }
}

/// Structured metadata provider reached over HTTP
///
/// Issues `GET {endpoint}?url=<page url>` and expects a JSON
/// [`StructuredVideo`] in return.
pub struct MetadataApiSource {
    client: reqwest::Client,
    endpoint: String,
}

impl MetadataApiSource {
    /// Create a provider client with default configuration
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_config(endpoint, ClientConfig::default())
    }

    /// Create a provider client with custom configuration
    pub fn with_config(endpoint: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(&config)?,
            endpoint: endpoint.into(),
        })
    }

    /// Look up the structured record for a page
    ///
    /// # Errors
    /// - `HttpError` - transport failure or a body that is not a video record
    /// - `HttpStatus` - any non-2xx status
    pub async fn lookup(&self, page_url: &str) -> Result<StructuredVideo> {
        let url = build_metadata_url(&self.endpoint, page_url);
        tracing::debug!(url = %url, "querying metadata provider");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ClipgrabError::HttpError)?;

        ensure_success(response, &url)?
            .json::<StructuredVideo>()
            .await
            .map_err(ClipgrabError::HttpError)
    }
}

impl PageSource for MetadataApiSource {
    async fn load(&self, url: &str) -> Result<PageDocument> {
        self.lookup(url).await.map(PageDocument::Structured)
    }
}

/// The extraction strategy, chosen by which collaborator is wired in
pub enum SourceStrategy {
    /// Fetch raw markup and scrape it
    Markup(PageClient),

    /// Ask a structured metadata provider
    Structured(MetadataApiSource),
}

impl SourceStrategy {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            SourceStrategy::Markup(_) => "markup",
            SourceStrategy::Structured(_) => "structured",
        }
    }
}

impl PageSource for SourceStrategy {
    async fn load(&self, url: &str) -> Result<PageDocument> {
        match self {
            SourceStrategy::Markup(client) => client.load(url).await,
            SourceStrategy::Structured(provider) => provider.load(url).await,
        }
    }
}
