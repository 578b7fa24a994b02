//! JSON:API envelope codec.
//!
//! Every request and response body is wrapped in a top-level `data` member.
//! Outgoing resources carry `type`, an optional `id`, their `attributes` and
//! optional `meta`; collection responses carry a `data` array instead.

use serde::{Deserialize, Serialize};

/// Top-level JSON:API document: `{"data": T}`.
///
/// `T` is a single resource for item endpoints and a `Vec` for collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

impl<T> Document<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Unwraps the envelope.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// A resource object: `{"type", "id"?, "attributes", "meta"?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<A, M = serde_json::Value> {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub attributes: A,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

impl<A, M> Resource<A, M> {
    pub fn new(kind: &str, attributes: A) -> Self {
        Self {
            kind: kind.to_string(),
            id: None,
            attributes,
            meta: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_meta(mut self, meta: M) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Wraps this resource in a top-level document.
    pub fn into_document(self) -> Document<Self> {
        Document::new(self)
    }
}

/// A resource identifier without attributes: `{"type", "id"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ResourceRef {
    pub fn new(kind: &str, id: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            id: id.into(),
        }
    }
}
