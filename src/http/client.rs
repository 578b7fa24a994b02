//! Low-level HTTP client: `KlaviyoHttp`.
//!
//! Builds one authenticated request per call, runs it through the retry loop,
//! always reads the response body to the end, and either decodes a 2xx body or
//! hands the status and body to [`Error::from_response`]. Sub-clients in
//! `domain/<name>/client.rs` wrap this.

use crate::error::{Error, Result};
use crate::http::retry::{parse_retry_after, Attempt, RetryConfig};
use crate::network::{API_REVISION, AUTH_SCHEME};
use crate::shared::QueryParams;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

const JSON: &str = "application/json";
const REVISION_HEADER: &str = "revision";

/// Low-level HTTP client for the Klaviyo REST API.
#[derive(Clone)]
pub struct KlaviyoHttp {
    base_url: String,
    /// NEVER exposed publicly.
    api_key: String,
    client: Client,
    retry: RetryConfig,
}

impl KlaviyoHttp {
    pub fn new(base_url: &str, api_key: &str, client: Client, retry: RetryConfig) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            retry,
        }
    }

    /// The transport used when none is injected.
    pub fn default_client() -> Result<Client> {
        Ok(Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    // ── Typed helpers ────────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T> {
        let body = self.execute(Method::GET, path, Some(query), None).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = serde_json::to_vec(body)?;
        let body = self.execute(Method::POST, path, None, Some(payload)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST whose success body carries nothing the caller needs.
    pub(crate) async fn post_discard<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let payload = serde_json::to_vec(body)?;
        self.execute(Method::POST, path, None, Some(payload)).await?;
        Ok(())
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = serde_json::to_vec(body)?;
        let body = self.execute(Method::PATCH, path, None, Some(payload)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // ── Request pipeline ─────────────────────────────────────────────────

    /// Sends the request, retrying per [`RetryConfig`], and returns the body
    /// of a 2xx response.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let url = self.url(path, query);
        let mut attempt: u32 = 0;

        loop {
            tracing::debug!(method = %method, url = %url, attempt, "Sending request");
            let can_retry = attempt < self.retry.max_retries;

            let resp = match self.request(&method, &url, payload.as_deref()).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    if can_retry && self.retry.should_retry(&Attempt::Transport(&e)) {
                        self.backoff(&url, attempt, None, None).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            };

            let status = resp.status().as_u16();
            if can_retry && self.retry.should_retry(&Attempt::Status(status)) {
                let retry_after = if status == 429 || status == 503 {
                    resp.headers()
                        .get(RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(parse_retry_after)
                } else {
                    None
                };
                drain(resp).await;
                self.backoff(&url, attempt, Some(status), retry_after).await;
                attempt += 1;
                continue;
            }

            if status == 429 {
                drain(resp).await;
                tracing::warn!(url = %url, attempts = attempt + 1, "Rate limited, giving up");
                return Err(Error::TooManyRequests);
            }

            let body = resp.bytes().await?;
            if (200..300).contains(&status) {
                return Ok(body.to_vec());
            }
            return Err(Error::from_response(status, &body));
        }
    }

    fn request(&self, method: &Method, url: &str, payload: Option<&[u8]>) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("{} {}", AUTH_SCHEME, self.api_key))
            .header(ACCEPT, JSON)
            .header(REVISION_HEADER, API_REVISION);

        if *method == Method::POST || *method == Method::PATCH || *method == Method::PUT {
            req = req.header(CONTENT_TYPE, JSON);
        }
        if let Some(p) = payload {
            req = req.body(p.to_vec());
        }
        req
    }

    async fn backoff(
        &self,
        url: &str,
        attempt: u32,
        status: Option<u16>,
        retry_after: Option<Duration>,
    ) {
        let delay = self.retry.delay_for_attempt(attempt, retry_after);
        tracing::debug!(
            attempt = attempt + 1,
            max = self.retry.max_retries,
            delay_ms = delay.as_millis() as u64,
            status,
            "Retrying request to {}",
            url
        );
        futures_timer::Delay::new(delay).await;
    }

    fn url(&self, path: &str, query: Option<&QueryParams>) -> String {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        match query {
            Some(q) if !q.is_empty() => format!("{}?{}", url, q.encode()),
            _ => url,
        }
    }
}

/// Reads the rest of the body so the connection can go back to the pool.
async fn drain(resp: Response) {
    let status = resp.status().as_u16();
    if let Err(e) = resp.bytes().await {
        tracing::debug!(status, error = %e, "Failed to drain response body");
    }
}

impl fmt::Debug for KlaviyoHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KlaviyoHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("retry", &self.retry)
            .finish()
    }
}
