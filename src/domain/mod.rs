//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: domain types callers build and receive
//! - `wire.rs`: request bodies in the backend's JSON:API shape
//! - `client.rs`: sub-client with the HTTP methods for that resource

pub mod bulk_import;
pub mod event;
pub mod profile;
