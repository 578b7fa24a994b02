//! Helpers shared by the HTTP integration tests.

#![allow(dead_code)]

use std::time::Duration;

use klaviyo_sdk::client::KlaviyoClient;
use klaviyo_sdk::http::RetryConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "pk_test_0123456789";

/// Retries with millisecond waits so tests stay fast.
pub fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        wait_min: Duration::from_millis(1),
        wait_max: Duration::from_millis(5),
        ..RetryConfig::default()
    }
}

pub fn client_for(server: &MockServer, retry: RetryConfig) -> KlaviyoClient {
    KlaviyoClient::builder()
        .api_key(API_KEY)
        .base_url(&server.uri())
        .retry(retry)
        .build()
        .expect("client should build")
}

pub fn profile_json(id: &str, email: &str) -> Value {
    json!({
        "type": "profile",
        "id": id,
        "attributes": {
            "email": email,
            "phone_number": null,
            "external_id": null,
            "first_name": "Sarah",
            "last_name": "Mason",
            "organization": null,
            "title": null,
            "image": null,
            "created": "2024-01-30T05:10:00+00:00",
            "updated": "2024-01-30T05:12:00+00:00",
            "last_event_date": null,
            "location": {"city": "Boston", "country": "United States", "latitude": null},
            "properties": {"plan": "gold"}
        },
        "links": {"self": format!("https://a.klaviyo.com/api/profiles/{id}/")}
    })
}

pub fn error_json(status: u16, code: &str, title: &str) -> Value {
    json!({
        "errors": [{
            "id": "7f1a2b3c-0000-4000-8000-000000000001",
            "status": status,
            "code": code,
            "title": title,
            "detail": format!("{title} detail"),
            "source": {"pointer": "/data/"}
        }]
    })
}
