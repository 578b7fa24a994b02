//! HTTP client layer: `KlaviyoHttp` with a configurable retry policy.

pub mod client;
pub mod retry;

pub use client::KlaviyoHttp;
pub use retry::{default_retry_policy, Attempt, RetryConfig, RetryPredicate};
