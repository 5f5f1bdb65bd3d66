//! Retry-free resource fetching with structured outcomes.

use std::time::Duration;

use reqwest::Client;

use xcforge_util::errors::XcforgeError;

/// Default timeout for asset downloads; callers may override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Build a shared reqwest client for asset downloads.
pub fn build_client(timeout: Duration) -> miette::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent("xcforge/0.2")
        .build()
        .map_err(|e| {
            XcforgeError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// Outcome of one fetch. Non-2xx statuses and transport errors are
/// `Failure`, so callers decide whether a miss is fatal.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Success(Vec<u8>),
    Failure(String),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

/// A source of remote resources. The production implementation is
/// [`HttpFetcher`]; tests substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait ResourceFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// HTTP-backed fetcher. Blocking from the caller's point of view: one
/// request at a time, no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> miette::Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }
}

impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        tracing::debug!(url, "fetching resource");
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Failure(format!("request to {url} failed: {e}")),
        };
        let status = response.status();
        if !status.is_success() {
            return FetchOutcome::Failure(format!("HTTP {status} fetching {url}"));
        }
        match response.bytes().await {
            Ok(bytes) => FetchOutcome::Success(bytes.to_vec()),
            Err(e) => FetchOutcome::Failure(format!("failed to read response from {url}: {e}")),
        }
    }
}
