//! Media URL locator
//!
//! Finds the single primary media URL of a page. Markup pages are scanned
//! for a `video_url: "..."` assignment inside `<script>` blocks, structured
//! records pick from their quality map. A page only ever uses the lookup
//! matching its strategy.

use regex::Regex;
use scraper::{Html, Selector};

use super::ParsedPage;
use crate::types::QualityMap;

// Literal and case-sensitive. The value stops at the first quote, so an
// escaped quote inside the URL truncates it, and escapes are not decoded.
const VIDEO_URL_PATTERN: &str = r#"video_url: "([^"\n]*)""#;

/// Locates the primary media URL using the lookup for the page's strategy
pub fn locate_best_url(page: &ParsedPage) -> Option<String> {
    match page {
        ParsedPage::Markup(document) => locate_in_scripts(document),
        ParsedPage::Structured(video) => best_by_label(&video.qualities),
    }
}

/// Scans `<script>` blocks in document order for the first `video_url` value
pub fn locate_in_scripts(document: &Html) -> Option<String> {
    let selector = Selector::parse("script").ok()?;
    let Ok(re) = Regex::new(VIDEO_URL_PATTERN) else {
        return None;
    };

    document.select(&selector).find_map(|element| {
        let script = element.text().collect::<String>();
        first_video_url(&re, &script)
    })
}

/// Returns the first `video_url` value across the given script bodies
pub fn locate_in_script_texts<'a, I>(scripts: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let Ok(re) = Regex::new(VIDEO_URL_PATTERN) else {
        return None;
    };

    scripts
        .into_iter()
        .find_map(|script| first_video_url(&re, script))
}

fn first_video_url(re: &Regex, script: &str) -> Option<String> {
    re.captures(script)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Picks the URL whose quality label sorts last lexically
///
/// Labels are compared as plain strings, not as resolutions, so "720p"
/// outranks "1080p".
pub fn best_by_label(qualities: &QualityMap) -> Option<String> {
    qualities
        .iter()
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, url)| url.clone())
}
