//! Fetching and parsing job postings for quick add.
//!
//! Fetching goes through [`PageFetcher`] and field extraction through
//! [`JobPostingExtractor`], so new job boards plug in without touching the
//! handler.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::http::StatusCode;
use thiserror::Error;

pub mod linkedin;

pub use linkedin::LinkedInExtractor;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Fields pulled out of a posting. Anything not found stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedPosting {
    pub job_title: String,
    pub company_name: String,
    pub job_location: String,
}

pub trait JobPostingExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    fn handles(&self, url: &str) -> bool;

    fn extract(&self, html: &str) -> ScrapedPosting;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(FetchedPage { status, body })
    }
}

#[derive(Clone)]
pub struct Scraper {
    fetcher: Arc<dyn PageFetcher>,
    extractors: Arc<Vec<Box<dyn JobPostingExtractor>>>,
}

impl Scraper {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        let extractors: Vec<Box<dyn JobPostingExtractor>> = vec![Box::new(LinkedInExtractor)];
        Self {
            fetcher,
            extractors: Arc::new(extractors),
        }
    }

    pub fn extractor_for(&self, url: &str) -> Option<&dyn JobPostingExtractor> {
        self.extractors
            .iter()
            .find(|extractor| extractor.handles(url))
            .map(|extractor| &**extractor)
    }

    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.fetcher.fetch(url).await
    }
}
