// src/services/fetcher.rs

//! Page fetcher service.
//!
//! Downloads one search results page per call.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::ScraperConfig;
use crate::utils::http::create_client;
use crate::utils::url::page_url;

/// Source of raw results page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the markup of the 1-based results page `page`.
    async fn fetch_page(&self, page: u32) -> Result<String>;
}

/// Fetches results pages over HTTP.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher for the configured search target.
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = create_client(config)?;
        Self::with_client(client, &config.base_url)
    }

    /// Create a fetcher that reuses an existing client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        // Reject a bad target before any request goes out.
        url::Url::parse(base_url)?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, page: u32) -> Result<String> {
        let url = page_url(&self.base_url, page)?;
        log::debug!("GET {}", url);

        let fail = |e: reqwest::Error| AppError::fetch(page, url.as_str(), e);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fail)?;

        response.text().await.map_err(fail)
    }
}
