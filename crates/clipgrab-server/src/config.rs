use std::env;

use anyhow::{Context, Result};
use clipgrab_core::{ClientConfig, RelayConfig, VideoExtractor, relay::DEFAULT_BASE_URL};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_address: String,
    pub fetch_timeout_secs: u64,
    /// Structured metadata provider endpoint; markup scraping when unset
    pub metadata_api: Option<String>,
    pub relay_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8000".to_string());
        let fetch_timeout_secs = match lookup("CLIPGRAB_FETCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("CLIPGRAB_FETCH_TIMEOUT_SECS is not a number: {raw}"))?,
            None => ClientConfig::default().timeout_secs,
        };
        let metadata_api = lookup("CLIPGRAB_METADATA_API").filter(|v| !v.trim().is_empty());
        let relay_base_url =
            lookup("CREART_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            bind_address,
            fetch_timeout_secs,
            metadata_api,
            relay_base_url,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout_secs: self.fetch_timeout_secs,
            ..Default::default()
        }
    }

    pub fn relay_config(&self) -> RelayConfig {
        RelayConfig {
            base_url: self.relay_base_url.clone(),
            ..Default::default()
        }
    }

    pub fn build_extractor(&self) -> Result<VideoExtractor> {
        let extractor = match &self.metadata_api {
            Some(endpoint) => VideoExtractor::structured_with_config(endpoint, self.client_config())?,
            None => VideoExtractor::markup_with_config(self.client_config())?,
        };
        Ok(extractor)
    }
}
