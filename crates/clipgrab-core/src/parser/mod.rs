//! Page parsers for clipgrab
//!
//! Contains the field extractor and the media locator. Both work on a
//! [`ParsedPage`], whose variant decides which lookup strategy applies.

pub mod fields;
pub mod media;

use scraper::Html;

use crate::error::{ClipgrabError, Result};
use crate::types::{PageDocument, StructuredVideo};

pub use fields::{extract_fields, extract_markup_fields, structured_fields};
pub use media::{best_by_label, locate_best_url, locate_in_script_texts, locate_in_scripts};

/// A page ready for extraction
pub enum ParsedPage {
    /// Parsed HTML tree (raw-markup strategy)
    Markup(Html),

    /// Structured provider record (structured strategy)
    Structured(StructuredVideo),
}

impl ParsedPage {
    /// Parses a fetched document
    ///
    /// # Errors
    /// Returns `ParseError` if the markup is empty
    pub fn parse(document: PageDocument) -> Result<Self> {
        match document {
            PageDocument::Markup(html) => {
                if html.trim().is_empty() {
                    return Err(ClipgrabError::ParseError(
                        "document is empty".to_string(),
                    ));
                }
                Ok(ParsedPage::Markup(Html::parse_document(&html)))
            }
            PageDocument::Structured(video) => Ok(ParsedPage::Structured(video)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_markup() {
        let result = ParsedPage::parse(PageDocument::Markup("  \n\t ".to_string()));
        match result {
            Err(ClipgrabError::ParseError(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected ParseError"),
        }
    }

    #[test]
    fn test_parse_markup() {
        let page = ParsedPage::parse(PageDocument::Markup("<p>hi</p>".to_string())).unwrap();
        assert!(matches!(page, ParsedPage::Markup(_)));
    }

    #[test]
    fn test_parse_structured_passes_through() {
        let video = StructuredVideo {
            title: Some("Clip".to_string()),
            ..Default::default()
        };
        let page = ParsedPage::parse(PageDocument::Structured(video.clone())).unwrap();
        match page {
            ParsedPage::Structured(parsed) => assert_eq!(parsed, video),
            ParsedPage::Markup(_) => panic!("Expected structured page"),
        }
    }
}
