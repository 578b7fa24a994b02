//! Shared wire-level building blocks used across all domain modules.
//!
//! - `envelope`: the JSON:API `{"data": {...}}` document and resource object
//! - `params`: query parameters for collection endpoints
//! - `serde_util`: serde helpers for the backend's nullable fields

pub mod envelope;
pub mod params;
pub mod serde_util;

pub use envelope::{Document, Resource, ResourceRef};
pub use params::{Param, QueryParams};

/// Open-ended custom properties attached to profiles and events.
///
/// Keys keep their insertion order so payloads serialize in the order
/// they were built.
pub type Properties = serde_json::Map<String, serde_json::Value>;

// ─── Resource types ──────────────────────────────────────────────────────────

/// JSON:API `type` of a profile resource.
pub const PROFILE_TYPE: &str = "profile";

/// JSON:API `type` of an event resource.
pub const EVENT_TYPE: &str = "event";

/// JSON:API `type` of a metric resource.
pub const METRIC_TYPE: &str = "metric";

/// JSON:API `type` of a list resource.
pub const LIST_TYPE: &str = "list";

/// JSON:API `type` of a bulk profile import job.
pub const BULK_IMPORT_JOB_TYPE: &str = "profile-bulk-import-job";
