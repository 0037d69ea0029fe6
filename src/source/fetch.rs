//! Remote document retrieval.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

/// Timeout applied to one document request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Error retrieving a source document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}")]
    Status { status: StatusCode },
}

/// Retrieves a remote tabular document as raw bytes.
///
/// One call per invocation; there is no retry policy at this layer.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

/// HTTP fetcher backed by a shared reqwest client.
///
/// Redirects are followed (the sheet export endpoint redirects), and
/// the whole request is bounded by [`FETCH_TIMEOUT`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
