//! HTTP client for the StockTrack search endpoint.

use std::time::Duration;

use reqwest::Client;

use cardstock_core::ProductRecord;

use crate::error::SearchError;
use crate::normalize::normalize_hit;
use crate::retry::retry_with_backoff;
use crate::types::SearchResponse;

/// HTTP client for the StockTrack search endpoint.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx responses
/// as typed errors. Transient errors (429, network failures, 5xx) are
/// automatically retried with exponential backoff up to `max_retries`
/// additional attempts.
pub struct StockTrackClient {
    client: Client,
    search_url: String,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl StockTrackClient {
    /// Creates a `StockTrackClient` with configured endpoint, timeout,
    /// `User-Agent`, and retry policy.
    ///
    /// `search_url` is the full endpoint URL (e.g.
    /// `https://stocktrack.ca/st/search.php`); the SKU is appended as the `q`
    /// query parameter. Point it at a mock server in tests.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors. Set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidSearchUrl`] if
    /// `search_url` does not parse as an absolute URL.
    pub fn new(
        search_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SearchError> {
        // Validate eagerly so a bad config fails at startup, not on the
        // first lookup.
        reqwest::Url::parse(search_url).map_err(|e| SearchError::InvalidSearchUrl {
            url: search_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            search_url: search_url.to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Runs one search round-trip for a digit-filtered SKU, with automatic
    /// retry on transient errors, and returns the parsed response envelope.
    ///
    /// # Errors
    ///
    /// - [`SearchError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`SearchError::NotFound`] — HTTP 404 (not retried).
    /// - [`SearchError::UnexpectedStatus`] — any other non-2xx status (5xx retried, 4xx not).
    /// - [`SearchError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`SearchError::Deserialize`] — response body is not valid JSON (not retried).
    pub async fn search(&self, sku: &str) -> Result<SearchResponse, SearchError> {
        let url = self.search_query_url(sku)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(SearchError::RateLimited { retry_after_secs });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(SearchError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(SearchError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<SearchResponse>(&body).map_err(|e| {
                    SearchError::Deserialize {
                        context: format!("search response for SKU {sku}"),
                        source: e,
                    }
                })
            }
        })
        .await
    }

    /// Full lookup pipeline: search for the SKU, take the first hit, and
    /// normalize it into a [`ProductRecord`].
    ///
    /// # Errors
    ///
    /// Everything [`search`](Self::search) can return, plus
    /// [`SearchError::ProductNotFound`] when the search succeeds with no hits.
    pub async fn lookup(&self, sku: &str) -> Result<ProductRecord, SearchError> {
        let response = self.search(sku).await?;
        normalize_hit(sku, response.into_first_hit())
    }

    /// Builds the search URL with the SKU as the `q` query parameter.
    fn search_query_url(&self, sku: &str) -> Result<String, SearchError> {
        let mut url =
            reqwest::Url::parse(&self.search_url).map_err(|e| SearchError::InvalidSearchUrl {
                url: self.search_url.clone(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("q", sku);
        Ok(url.to_string())
    }
}
