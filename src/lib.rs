//! # Klaviyo SDK
//!
//! An async Rust client for the Klaviyo REST API: profiles, events and bulk
//! profile imports.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: JSON:API envelope, query parameters, domain models and the
//!    error taxonomy (always available, no transport)
//! 2. **HTTP API**: `KlaviyoHttp` with authentication, revision pinning and retries
//! 3. **High-Level Client**: `KlaviyoClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use klaviyo_sdk::prelude::*;
//!
//! let client = KlaviyoClient::new("pk_...")?;
//!
//! let profiles = client.profiles().list(&[Param::page_size(50)]).await?;
//! client
//!     .profiles()
//!     .update(&profiles[0].id, &[ProfileUpdate::first_name("Sarah")])
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared wire building blocks used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire bodies, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policy.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `KlaviyoClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{Param, Properties, QueryParams};

    // Domain types: profile
    pub use crate::domain::profile::{
        ExistingProfile, Location, LocationUpdate, NewProfile, ProfileAttributes, ProfileUpdate,
        PropertyUpdate,
    };

    // Domain types: event, bulk import
    pub use crate::domain::bulk_import::{BulkImportJob, MAX_BULK_IMPORT_PROFILES};
    pub use crate::domain::event::{ExistingEvent, NewEvent, ProfileRef};

    // Errors
    pub use crate::error::{ApiError, ApiErrors, BadHttpResponse, Error, ErrorKind, ValidationError};

    // Network
    pub use crate::network::{API_REVISION, DEFAULT_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        BulkImportsClient, EventsClient, KlaviyoClient, KlaviyoClientBuilder, ProfilesClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{Attempt, RetryConfig};
}
