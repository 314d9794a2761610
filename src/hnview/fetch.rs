//! # Story Fetching
//!
//! The network side of a search: building the [`QueryUrl`] and turning it into stories.
//!
//! [`StoryFetcher`] is the seam. The controller only sees `Ok(stories)` or "it failed";
//! [`FetchError`] keeps the cause around so the caller can log it.

use crate::model::Story;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// The full request target: base endpoint followed by the encoded query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrl(String);

impl QueryUrl {
    pub fn new(endpoint: &str, query: &str) -> Self {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        Self(format!("{}{}", endpoint, encoded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("server answered {0}")]
    Status(StatusCode),

    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}

#[async_trait]
pub trait StoryFetcher {
    async fn fetch(&self, url: &QueryUrl) -> Result<Vec<Story>, FetchError>;
}

#[derive(Deserialize)]
struct SearchPage {
    hits: Vec<Story>,
}

/// Fetches from the search API over HTTP.
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// `timeout` bounds each whole request; `None` waits as long as the server does.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder =
            Client::builder().user_agent(concat!("hnview/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FetchError::Request)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl StoryFetcher for HttpFetcher {
    async fn fetch(&self, url: &QueryUrl) -> Result<Vec<Story>, FetchError> {
        debug!(url = url.as_str(), "fetch: GET");
        let response = self
            .http
            .get(url.as_str())
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Request)?;
        let page: SearchPage = serde_json::from_slice(&body).map_err(FetchError::Decode)?;
        debug!(hits = page.hits.len(), "fetch: decoded response");
        Ok(page.hits)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Answers fetches from a script, in order, and remembers what was asked.
    ///
    /// Once the script runs out every fetch fails with a 503.
    #[derive(Default)]
    pub struct StubFetcher {
        responses: Mutex<VecDeque<Result<Vec<Story>, FetchError>>>,
        requests: Mutex<Vec<QueryUrl>>,
    }

    impl StubFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_stories(self, stories: Vec<Story>) -> Self {
            self.push(Ok(stories));
            self
        }

        pub fn with_failure(self) -> Self {
            self.push(Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
            self
        }

        fn push(&self, response: Result<Vec<Story>, FetchError>) {
            if let Ok(mut responses) = self.responses.lock() {
                responses.push_back(response);
            }
        }

        pub fn requests(&self) -> Vec<QueryUrl> {
            self.requests
                .lock()
                .map(|r| r.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl StoryFetcher for StubFetcher {
        async fn fetch(&self, url: &QueryUrl) -> Result<Vec<Story>, FetchError> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(url.clone());
            }
            self.responses
                .lock()
                .ok()
                .and_then(|mut r| r.pop_front())
                .unwrap_or(Err(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE)))
        }
    }
}
