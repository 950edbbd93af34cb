//! HTTP fetching of listing pages.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Source of raw listing markup, one page per call.
///
/// [`ListingClient`] is the network implementation; tests drive the
/// aggregator with in-memory fixtures instead.
pub trait PageFetcher {
    /// Returns the body of `url`.
    ///
    /// # Errors
    ///
    /// Implementations return a fetch-class [`ScraperError`] on transport or
    /// status failure.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScraperError>>;
}

/// HTTP client for promotions listing pages.
///
/// Every non-2xx response is a typed error and nothing is retried: one failed
/// page aborts the catalog build.
pub struct ListingClient {
    client: Client,
}

impl ListingClient {
    /// Creates a `ListingClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one listing page and returns its HTML body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`] on HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ScraperError::Http`] on network, TLS, timeout or body decode failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .header(reqwest::header::ACCEPT_LANGUAGE, "pt-BR,pt;q=0.9")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "fetched listing page");
        Ok(body)
    }
}

impl PageFetcher for ListingClient {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.fetch_page(url).await
    }
}
