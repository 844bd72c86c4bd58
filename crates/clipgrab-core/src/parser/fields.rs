//! Metadata field extraction
//!
//! Every field has its own lookup and falls back to [`PLACEHOLDER`]
//! independently of the others.

use scraper::{Html, Selector};

use super::ParsedPage;
use crate::types::{FieldValue, PLACEHOLDER, PageMetadata, StructuredVideo};

const TITLE_SELECTOR: &str = r#"meta[property="og:title"]"#;
const DURATION_SELECTOR: &str = r#"meta[itemprop="duration"]"#;
const UPLOADER_SELECTOR: &str = ".video-uploader__name";

/// Extracts metadata using the lookups that match the page's strategy
pub fn extract_fields(page: &ParsedPage) -> PageMetadata {
    match page {
        ParsedPage::Markup(document) => extract_markup_fields(document),
        ParsedPage::Structured(video) => structured_fields(video),
    }
}

/// Extracts metadata from a parsed HTML page
///
/// Views are never present in markup and always come back as the placeholder.
pub fn extract_markup_fields(document: &Html) -> PageMetadata {
    let title = first_attr(document, TITLE_SELECTOR, "content")
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let duration_seconds = first_attr(document, DURATION_SELECTOR, "content")
        .map(FieldValue::Text)
        .unwrap_or_else(FieldValue::placeholder);
    let uploader_name =
        first_text(document, UPLOADER_SELECTOR).unwrap_or_else(|| PLACEHOLDER.to_string());

    PageMetadata {
        title,
        uploader_name,
        view_count: FieldValue::placeholder(),
        duration_seconds,
    }
}

/// Reads metadata from a structured provider record
pub fn structured_fields(video: &StructuredVideo) -> PageMetadata {
    PageMetadata {
        title: video
            .title
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        uploader_name: video
            .uploader
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        view_count: video.views.clone().unwrap_or_else(FieldValue::placeholder),
        duration_seconds: video
            .duration
            .clone()
            .unwrap_or_else(FieldValue::placeholder),
    }
}

/// Attribute of the first element matching `selector`
///
/// A matching element without the attribute counts as absent.
fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()?
        .value()
        .attr(attr)
        .map(|value| value.to_string())
}

/// Trimmed text of the first element matching `selector`, if non-empty
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let text = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page(head: &str, body: &str) -> Html {
        Html::parse_document(&format!(
            "<html><head>{}</head><body>{}</body></html>",
            head, body
        ))
    }

    const FULL_HEAD: &str = r#"
        <meta property="og:title" content="Sample Clip">
        <meta itemprop="duration" content="PT5M12S">
    "#;
    const FULL_BODY: &str = r#"
        <div class="video-uploader">
            <a class="video-uploader__name" href="/users/alice99"> alice99 </a>
        </div>
    "#;

    #[test]
    fn test_extract_all_markup_fields() {
        let metadata = extract_markup_fields(&page(FULL_HEAD, FULL_BODY));

        assert_eq!(metadata.title, "Sample Clip");
        assert_eq!(metadata.duration_seconds, FieldValue::from("PT5M12S"));
        assert_eq!(metadata.uploader_name, "alice99");
        assert!(metadata.view_count.is_placeholder());
    }

    #[test]
    fn test_missing_title() {
        let head = r#"<meta itemprop="duration" content="PT5M12S">"#;
        let metadata = extract_markup_fields(&page(head, FULL_BODY));

        assert_eq!(metadata.title, PLACEHOLDER);
        assert_eq!(metadata.duration_seconds, FieldValue::from("PT5M12S"));
        assert_eq!(metadata.uploader_name, "alice99");
    }

    #[test]
    fn test_missing_duration() {
        let head = r#"<meta property="og:title" content="Sample Clip">"#;
        let metadata = extract_markup_fields(&page(head, FULL_BODY));

        assert_eq!(metadata.title, "Sample Clip");
        assert!(metadata.duration_seconds.is_placeholder());
        assert_eq!(metadata.uploader_name, "alice99");
    }

    #[test]
    fn test_missing_uploader() {
        let metadata = extract_markup_fields(&page(FULL_HEAD, "<p>no uploader</p>"));

        assert_eq!(metadata.title, "Sample Clip");
        assert_eq!(metadata.duration_seconds, FieldValue::from("PT5M12S"));
        assert_eq!(metadata.uploader_name, PLACEHOLDER);
    }

    #[test]
    fn test_empty_uploader_element_is_absent() {
        let body = r#"<span class="video-uploader__name">   </span>"#;
        let metadata = extract_markup_fields(&page(FULL_HEAD, body));
        assert_eq!(metadata.uploader_name, PLACEHOLDER);
    }

    #[test]
    fn test_meta_without_content_is_absent() {
        let head = r#"<meta property="og:title">"#;
        let metadata = extract_markup_fields(&page(head, ""));
        assert_eq!(metadata.title, PLACEHOLDER);
    }

    #[test]
    fn test_first_match_wins() {
        let head = r#"
            <meta property="og:title" content="First">
            <meta property="og:title" content="Second">
        "#;
        let metadata = extract_markup_fields(&page(head, ""));
        assert_eq!(metadata.title, "First");
    }

    #[test]
    fn test_title_tag_is_not_used() {
        let head = "<title>Page Title | Site</title>";
        let metadata = extract_markup_fields(&page(head, ""));
        assert_eq!(metadata.title, PLACEHOLDER);
    }

    #[test]
    fn test_structured_fields_all_present() {
        let video = StructuredVideo {
            title: Some("Clip".to_string()),
            views: Some(FieldValue::from(4821)),
            duration: Some(FieldValue::from(312)),
            uploader: Some("bob".to_string()),
            ..Default::default()
        };

        let metadata = structured_fields(&video);
        assert_eq!(metadata.title, "Clip");
        assert_eq!(metadata.view_count, FieldValue::from(4821));
        assert_eq!(metadata.duration_seconds, FieldValue::from(312));
        assert_eq!(metadata.uploader_name, "bob");
    }

    #[test]
    fn test_structured_fields_all_missing() {
        let metadata = structured_fields(&StructuredVideo::default());
        assert_eq!(metadata, PageMetadata::placeholder());
    }

    #[test]
    fn test_extract_fields_dispatches_on_strategy() {
        let markup = ParsedPage::Markup(page(FULL_HEAD, FULL_BODY));
        assert_eq!(extract_fields(&markup).title, "Sample Clip");

        let structured = ParsedPage::Structured(StructuredVideo {
            views: Some(FieldValue::from(7)),
            ..Default::default()
        });
        let metadata = extract_fields(&structured);
        assert_eq!(metadata.view_count, FieldValue::from(7));
        assert_eq!(metadata.title, PLACEHOLDER);
    }

    proptest! {
        #[test]
        fn prop_missing_title_node_yields_placeholder(
            body in "[a-zA-Z0-9 ]{0,64}",
            other_meta in "[a-z]{1,12}",
        ) {
            let head = format!(r#"<meta property="{}" content="x">"#, other_meta);
            let metadata = extract_markup_fields(&page(&head, &format!("<p>{}</p>", body)));
            prop_assert_eq!(metadata.title, PLACEHOLDER);
        }

        #[test]
        fn prop_fields_do_not_interfere(
            has_title in any::<bool>(),
            has_duration in any::<bool>(),
            has_uploader in any::<bool>(),
            title in "[A-Za-z][A-Za-z0-9 ]{0,20}[A-Za-z0-9]",
            uploader in "[a-z][a-z0-9]{0,15}",
        ) {
            let mut head = String::new();
            if has_title {
                head.push_str(&format!(r#"<meta property="og:title" content="{}">"#, title));
            }
            if has_duration {
                head.push_str(r#"<meta itemprop="duration" content="PT1M">"#);
            }
            let body = if has_uploader {
                format!(r#"<span class="video-uploader__name">{}</span>"#, uploader)
            } else {
                String::new()
            };

            let metadata = extract_markup_fields(&page(&head, &body));

            let expected_title = if has_title { title.clone() } else { PLACEHOLDER.to_string() };
            let expected_duration = if has_duration {
                FieldValue::from("PT1M")
            } else {
                FieldValue::placeholder()
            };
            let expected_uploader = if has_uploader { uploader.clone() } else { PLACEHOLDER.to_string() };

            prop_assert_eq!(metadata.title, expected_title);
            prop_assert_eq!(metadata.duration_seconds, expected_duration);
            prop_assert_eq!(metadata.uploader_name, expected_uploader);
            prop_assert!(metadata.view_count.is_placeholder());
        }
    }
}
