//! URL helper functions for clipgrab
//!
//! Validates page URLs and builds metadata-provider query URLs.

use ::url::Url;

use crate::error::{ClipgrabError, Result};

/// Checks that a page URL is absolute http(s) with a host
///
/// # Arguments
/// * `url` - Page URL as received from the caller
///
/// # Returns
/// The URL with surrounding whitespace removed
///
/// # Errors
/// Returns `InvalidUrl` if the URL does not parse, uses another scheme,
/// or has no host
///
/// # Example
/// ```
/// use clipgrab_core::url::validate_page_url;
/// assert!(validate_page_url("https://example.com/videos/1").is_ok());
/// assert!(validate_page_url("ftp://example.com/videos/1").is_err());
/// ```
pub fn validate_page_url(url: &str) -> Result<&str> {
    let trimmed = url.trim();
    let parsed =
        Url::parse(trimmed).map_err(|_| ClipgrabError::InvalidUrl(trimmed.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ClipgrabError::InvalidUrl(trimmed.to_string()));
    }

    Ok(trimmed)
}

/// Builds the metadata-provider lookup URL for a page
///
/// # Example
/// ```
/// use clipgrab_core::url::build_metadata_url;
/// let url = build_metadata_url("http://localhost:9000/video", "https://example.com/v?id=1");
/// assert_eq!(url, "http://localhost:9000/video?url=https%3A%2F%2Fexample.com%2Fv%3Fid%3D1");
/// ```
pub fn build_metadata_url(endpoint: &str, page_url: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{}{}url={}",
        endpoint,
        separator,
        urlencoding::encode(page_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_https_url() {
        let url = validate_page_url("https://example.com/videos/sample-clip-123");
        assert_eq!(url.unwrap(), "https://example.com/videos/sample-clip-123");
    }

    #[test]
    fn test_validate_trims_whitespace() {
        let url = validate_page_url("  http://example.com/v/1 \n");
        assert_eq!(url.unwrap(), "http://example.com/v/1");
    }

    #[test]
    fn test_validate_rejects_other_schemes() {
        match validate_page_url("ftp://example.com/file") {
            Err(ClipgrabError::InvalidUrl(url)) => assert_eq!(url, "ftp://example.com/file"),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_validate_rejects_missing_host() {
        assert!(validate_page_url("https://").is_err());
    }

    #[test]
    fn test_validate_rejects_malformed_hosts() {
        for url in [
            "https://exa mple.com/v",
            "https://@/x",
            "http://:80/v",
            "https://[/v",
        ] {
            match validate_page_url(url) {
                Err(ClipgrabError::InvalidUrl(rejected)) => assert_eq!(rejected, url),
                other => panic!("Expected InvalidUrl for {}, got {:?}", url, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_relative_and_opaque() {
        assert!(validate_page_url("not a url").is_err());
        assert!(validate_page_url("/videos/1").is_err());
        assert!(validate_page_url("javascript:alert(1)").is_err());
        assert!(validate_page_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_page_url("").is_err());
        assert!(validate_page_url("   ").is_err());
    }

    #[test]
    fn test_build_metadata_url_existing_query() {
        let url = build_metadata_url("http://meta.local/video?key=1", "https://a.b/c");
        assert_eq!(url, "http://meta.local/video?key=1&url=https%3A%2F%2Fa.b%2Fc");
    }
}
