//! Image generation relay
//!
//! Forwards text-to-image and image-to-image requests to the Creart AI API
//! as form posts and hands the upstream JSON back untouched.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::{ClientConfig, build_http_client};
use crate::error::{ClipgrabError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.creartai.com/api/v1";

/// Configuration for the image relay
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// API base URL (default: Creart AI v1)
    pub base_url: String,
    /// Timeout for text-to-image calls in seconds (default: 60)
    pub text_timeout_secs: u64,
    /// Timeout for image-to-image calls in seconds (default: 120)
    pub image_timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            text_timeout_secs: 60,
            image_timeout_secs: 120,
        }
    }
}

fn default_aspect_ratio() -> String {
    "1x1".to_string()
}

fn default_guidance_scale() -> f64 {
    9.5
}

/// Text-to-image generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextToImageRequest {
    pub prompt: String,

    #[serde(default)]
    pub negative_prompt: String,

    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,

    #[serde(default = "default_guidance_scale")]
    pub guidance_scale: f64,

    #[serde(default)]
    pub seed: Option<i64>,
}

/// Image-to-image generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageToImageRequest {
    #[serde(flatten)]
    pub params: TextToImageRequest,

    /// Source image, base64 encoded
    pub input_image_base64: String,
}

/// Client for the image generation API
pub struct ImageRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl ImageRelay {
    /// Create a relay with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(RelayConfig::default())
    }

    /// Create a relay with custom configuration
    pub fn with_config(config: RelayConfig) -> Result<Self> {
        // Per-call timeouts are set on each request
        let client = build_http_client(&ClientConfig {
            timeout_secs: config.image_timeout_secs.max(config.text_timeout_secs),
            ..Default::default()
        })?;
        Ok(Self { client, config })
    }

    /// Generate an image from a prompt
    ///
    /// # Errors
    /// - `Upstream` if the API answers with a non-2xx status
    /// - `HttpError` for transport errors or a non-JSON body
    pub async fn text_to_image(&self, request: &TextToImageRequest) -> Result<serde_json::Value> {
        let form = build_form(request, "text2image", "");
        self.post("text2image", &form, self.config.text_timeout_secs)
            .await
    }

    /// Transform an image according to a prompt
    ///
    /// # Errors
    /// - `Upstream` if the API answers with a non-2xx status
    /// - `HttpError` for transport errors or a non-JSON body
    pub async fn image_to_image(
        &self,
        request: &ImageToImageRequest,
    ) -> Result<serde_json::Value> {
        let form = build_form(&request.params, "image2image", &request.input_image_base64);
        self.post("image2image", &form, self.config.image_timeout_secs)
            .await
    }

    async fn post(
        &self,
        endpoint: &str,
        form: &[(&'static str, String)],
        timeout_secs: u64,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        tracing::info!(url = %url, "forwarding image request");

        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(timeout_secs))
            .form(form)
            .send()
            .await
            .map_err(ClipgrabError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read image API error body");
                    String::new()
                }
            };
            tracing::warn!(status = status.as_u16(), "image API returned error status");
            return Err(ClipgrabError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(ClipgrabError::HttpError)
    }
}

/// Builds the form fields sent upstream
///
/// A missing seed is sent as an empty field.
fn build_form(
    params: &TextToImageRequest,
    image_type: &str,
    image_base64: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("prompt", params.prompt.clone()),
        ("input_image_type", image_type.to_string()),
        ("input_image_base64", image_base64.to_string()),
        ("negative_prompt", params.negative_prompt.clone()),
        ("aspect_ratio", params.aspect_ratio.clone()),
        ("guidance_scale", params.guidance_scale.to_string()),
        (
            "seed",
            params.seed.map(|seed| seed.to_string()).unwrap_or_default(),
        ),
    ]
}
