use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::PageFetcher;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;

/// Plain HTTP fetcher. One attempt per page, no retries.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Self::new(Duration::from_secs(config.timeout), &config.user_agent)
    }
}

#[async_trait]
impl PageFetcher for RequestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        Ok(html)
    }
}
