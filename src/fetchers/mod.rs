use async_trait::async_trait;

use crate::error::ScrapeError;

mod request;

pub use request::RequestFetcher;

/// Source of raw page HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}
