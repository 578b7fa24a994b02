//! Network constants for the Klaviyo REST API.

/// Default REST API base URL. Endpoint paths are joined beneath it.
pub const DEFAULT_API_URL: &str = "https://a.klaviyo.com/api";

/// API revision pinned by this SDK, sent as the `revision` header.
pub const API_REVISION: &str = "2024-02-15";

/// Scheme prefix of the `Authorization` header value.
pub const AUTH_SCHEME: &str = "Klaviyo-API-Key";
