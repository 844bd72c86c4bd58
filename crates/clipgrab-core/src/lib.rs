//! Clipgrab Core Library
//!
//! Extracts metadata and a direct media URL from video pages, and relays
//! image generation requests to an external API.
//!
//! # Overview
//!
//! One extraction pass takes a loaded page and produces an
//! [`ExtractionResult`]:
//! - the field extractor reads title, uploader, views and duration, using
//!   `"Unknown"` for anything it cannot find
//! - the media locator picks the primary media URL
//! - the assembler combines both, failing only when no media URL exists
//!
//! Pages come from a [`PageSource`]: either raw markup fetched by
//! [`PageClient`], or a structured record from [`MetadataApiSource`].
//!
//! # Example
//!
//! ```no_run
//! use clipgrab_core::{ExtractionResult, Result, VideoExtractor};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let extractor = VideoExtractor::markup()?;
//!
//!     match extractor.extract("https://example.com/videos/sample-clip").await? {
//!         ExtractionResult::Success { metadata, primary_url, .. } => {
//!             println!("{} by {}", metadata.title, metadata.uploader_name);
//!             println!("media: {}", primary_url);
//!         }
//!         ExtractionResult::Failure { reason } => eprintln!("{}", reason),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Media URL lookup
//!
//! Markup pages are searched for the literal `video_url: "..."` inside
//! `<script>` blocks; the first hit wins and escapes are left as they are.
//! Structured records choose the quality label that sorts last as a plain
//! string, which is not the same as the highest resolution.

mod assemble;
mod client;
mod error;
mod extractor;
pub mod parser;
pub mod relay;
mod source;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, PageClient};

// Re-export error types
pub use error::{ClipgrabError, Result};

// Re-export extraction steps
pub use assemble::assemble;
pub use parser::{ParsedPage, extract_fields, locate_best_url};

// Re-export main extraction API
pub use extractor::{VideoExtractor, extract_document};

// Re-export page sources
pub use source::{MetadataApiSource, PageSource, SourceStrategy};

// Re-export relay types
pub use relay::{ImageRelay, ImageToImageRequest, RelayConfig, TextToImageRequest};

// Re-export data types
pub use types::{
    ExtractionResult, FieldValue, MEDIA_NOT_FOUND, PLACEHOLDER, PageDocument, PageMetadata,
    QualityMap, StructuredVideo,
};
