use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::routes::demo_progress::demo_progress_models::DemoProgressResponse;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("progress endpoint answered with status {0}")]
    Status(u16),
    #[error("progress request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("progress body could not be decoded: {0}")]
    Decode(String),
}

/// Where the dashboard gets its data from.
#[async_trait]
pub trait ProgressSource: Send + Sync {
    async fn fetch_progress(&self) -> Result<DemoProgressResponse, FetchError>;
}

/// Fetches `GET /api/demo-progress` over HTTP.
pub struct HttpProgressSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProgressSource {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ProgressSource for HttpProgressSource {
    async fn fetch_progress(&self) -> Result<DemoProgressResponse, FetchError> {
        let res = self.client.get(&self.url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        res.json::<DemoProgressResponse>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
