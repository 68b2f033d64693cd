//! The author listing and the PoetryDB client that fetches it.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use serde::Deserialize;

use crate::error::Error;

/// Default PoetryDB author-listing endpoint.
pub const POETRYDB_AUTHOR_URL: &str = "https://poetrydb.org/author";

/// Why the author listing could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("poetrydb answered {0}")]
    Status(StatusCode),

    /// Connection failure, timeout, or an interrupted body.
    #[error("poetrydb request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("poetrydb body is not a list of authors: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Anything that can list author names, in a stable order.
#[async_trait]
pub trait AuthorSource: Send + Sync {
    async fn authors(&self) -> Result<Vec<String>, UpstreamError>;
}

/// Accepted body shapes. PoetryDB itself sends the `authors` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorListing {
    Bare(Vec<String>),
    Wrapped { authors: Vec<String> },
}

impl From<AuthorListing> for Vec<String> {
    fn from(listing: AuthorListing) -> Self {
        match listing {
            AuthorListing::Bare(authors) | AuthorListing::Wrapped { authors } => authors,
        }
    }
}

/// Parses an author-listing body, keeping the order received.
pub fn parse_authors(body: &[u8]) -> Result<Vec<String>, UpstreamError> {
    let listing: AuthorListing = serde_json::from_slice(body)?;
    Ok(listing.into())
}

/// HTTP client for the PoetryDB author endpoint.
///
/// One GET per call: no retries, no caching.
#[derive(Clone, Debug)]
pub struct PoetryDb {
    client: reqwest::Client,
    url: String,
}

impl PoetryDb {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl AuthorSource for PoetryDb {
    async fn authors(&self) -> Result<Vec<String>, UpstreamError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await?;
        let authors = parse_authors(&body)?;
        tracing::debug!(url = %self.url, count = authors.len(), "fetched author listing");
        Ok(authors)
    }
}
