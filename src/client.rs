//! High-level client: `KlaviyoClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::bulk_import::client::BulkImports;
use crate::domain::event::client::Events;
use crate::domain::profile::client::Profiles;
use crate::error::{Result, ValidationError};
use crate::http::{KlaviyoHttp, RetryConfig};

// Re-export sub-client types for convenience.
pub use crate::domain::bulk_import::client::BulkImports as BulkImportsClient;
pub use crate::domain::event::client::Events as EventsClient;
pub use crate::domain::profile::client::Profiles as ProfilesClient;

/// The primary entry point for the Klaviyo SDK.
///
/// Cheap to clone; clones share the connection pool. Safe to use from many
/// tasks at once.
#[derive(Debug, Clone)]
pub struct KlaviyoClient {
    pub(crate) http: KlaviyoHttp,
}

impl KlaviyoClient {
    pub fn builder() -> KlaviyoClientBuilder {
        KlaviyoClientBuilder::default()
    }

    /// Client with default transport and retry settings.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn http(&self) -> &KlaviyoHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn profiles(&self) -> Profiles<'_> {
        Profiles { client: self }
    }

    pub fn events(&self) -> Events<'_> {
        Events { client: self }
    }

    pub fn bulk_imports(&self) -> BulkImports<'_> {
        BulkImports { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct KlaviyoClientBuilder {
    api_key: String,
    base_url: String,
    http_client: Option<reqwest::Client>,
    retry: RetryConfig,
}

impl Default for KlaviyoClientBuilder {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            http_client: None,
            retry: RetryConfig::default(),
        }
    }
}

impl KlaviyoClientBuilder {
    /// Private API key, sent as `Authorization: Klaviyo-API-Key <key>`.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = key.to_string();
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Use a caller-built transport (proxies, timeouts, TLS roots).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<KlaviyoClient> {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(ValidationError::MissingApiKey.into());
        }
        let client = match self.http_client {
            Some(client) => client,
            None => KlaviyoHttp::default_client()?,
        };
        Ok(KlaviyoClient {
            http: KlaviyoHttp::new(&self.base_url, api_key, client, self.retry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    #[test]
    fn test_build_rejects_empty_key() {
        let err = KlaviyoClient::builder().api_key("  ").build().unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingApiKey)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_build_defaults() {
        let client = KlaviyoClient::new("pk_test").unwrap();
        assert_eq!(client.http().base_url(), crate::network::DEFAULT_API_URL);
        assert_eq!(client.http().retry_config().max_retries, 4);
    }

    #[test]
    fn test_build_overrides() {
        let client = KlaviyoClient::builder()
            .api_key("pk_test")
            .base_url("http://127.0.0.1:9999/api/")
            .retry(RetryConfig::none())
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "http://127.0.0.1:9999/api");
        assert_eq!(client.http().retry_config().max_retries, 0);
    }

    #[test]
    fn test_debug_hides_key() {
        let client = KlaviyoClient::new("pk_secret_123").unwrap();
        assert!(!format!("{client:?}").contains("pk_secret_123"));
    }
}
