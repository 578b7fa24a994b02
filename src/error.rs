//! Unified SDK error types and API error translation.

use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum Error {
    /// The API key is missing or was rejected (401).
    #[error("klaviyo: invalid or missing API key")]
    InvalidApiKey,

    /// The endpoint kept answering 429 until retries ran out.
    #[error("klaviyo: too many requests for calling endpoint")]
    TooManyRequests,

    /// The requested profile does not exist (404).
    #[error("klaviyo: a profile does not exist")]
    ProfileDoesNotExist,

    /// A profile with one of the given identifiers already exists (409).
    #[error("klaviyo: a profile already exists with one of these identifiers: {duplicate_profile_id}")]
    ProfileAlreadyExists { duplicate_profile_id: String },

    /// Any other API error payload.
    #[error("{0}")]
    Api(ApiErrors),

    /// A non-2xx response whose body is not an API error document.
    #[error("{0}")]
    BadResponse(#[from] BadHttpResponse),

    /// Rejected locally before any request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Discriminant of [`Error`], comparable with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidApiKey,
    TooManyRequests,
    ProfileDoesNotExist,
    ProfileAlreadyExists,
    Api,
    BadResponse,
    Validation,
    Http,
    Json,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidApiKey => ErrorKind::InvalidApiKey,
            Error::TooManyRequests => ErrorKind::TooManyRequests,
            Error::ProfileDoesNotExist => ErrorKind::ProfileDoesNotExist,
            Error::ProfileAlreadyExists { .. } => ErrorKind::ProfileAlreadyExists,
            Error::Api(_) => ErrorKind::Api,
            Error::BadResponse(_) => ErrorKind::BadResponse,
            Error::Validation(_) => ErrorKind::Validation,
            #[cfg(feature = "http")]
            Error::Http(_) => ErrorKind::Http,
            Error::Json(_) => ErrorKind::Json,
        }
    }

    /// Translates a non-2xx response into a semantic error.
    ///
    /// Only the first error object is classified. When it matches none of the
    /// known status/code pairs, every decoded object is kept in [`Error::Api`].
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let document: ErrorDocument = match serde_json::from_slice(body) {
            Ok(document) => document,
            Err(cause) => {
                return Error::BadResponse(BadHttpResponse {
                    status,
                    body: body.to_vec(),
                    cause,
                })
            }
        };

        let Some(first) = document.errors.first() else {
            return Error::Api(ApiErrors(vec![ApiError {
                status,
                title: "Bad HTTP status".to_string(),
                detail: String::from_utf8_lossy(body).into_owned(),
                ..ApiError::default()
            }]));
        };

        let classified = match (status, first.code.as_str()) {
            (409, "duplicate_profile") => Some(Error::ProfileAlreadyExists {
                duplicate_profile_id: first.meta.duplicate_profile_id.clone().unwrap_or_default(),
            }),
            (404, "not_found") => Some(Error::ProfileDoesNotExist),
            (401, "not_authenticated" | "authentication_failed") => Some(Error::InvalidApiKey),
            _ => None,
        };
        classified.unwrap_or_else(|| Error::Api(ApiErrors(document.errors)))
    }
}

// ─── API error payload ───────────────────────────────────────────────────────

/// `{"errors": [...]}` body of a failed request.
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorDocument {
    #[serde(default)]
    errors: Vec<ApiError>,
}

/// One error object returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub status: u16,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub detail: String,
    /// JSON pointer into the request body that caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ApiErrorSource>,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub meta: ApiErrorMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorSource {
    #[serde(default)]
    pub pointer: Option<String>,
    #[serde(default)]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_profile_id: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Klaviyo API Error (ID: {}, Status: {}, Code: {}) - {}: {}",
            self.id, self.status, self.code, self.title, self.detail
        )
    }
}

impl std::error::Error for ApiError {}

/// All error objects of one response, in the order received.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrors(pub Vec<ApiError>);

impl ApiErrors {
    pub fn first(&self) -> Option<&ApiError> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ApiError> {
        self.0.iter()
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{}", single),
            errors => {
                write!(f, "{} errors occurred:", errors.len())?;
                for err in errors {
                    write!(f, "\n\t* {}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ApiErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.first().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ─── Bad response ────────────────────────────────────────────────────────────

/// A non-2xx response whose body could not be decoded as an error document.
#[derive(Debug, Error)]
#[error("klaviyo: bad HTTP response: {cause}")]
pub struct BadHttpResponse {
    status: u16,
    body: Vec<u8>,
    #[source]
    cause: serde_json::Error,
}

impl BadHttpResponse {
    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn cause(&self) -> &serde_json::Error {
        &self.cause
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Errors detected before a request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("API key must not be empty")]
    MissingApiKey,

    #[error("bulk import requires at least one profile")]
    EmptyBatch,

    #[error("bulk import accepts at most {max} profiles, got {len}")]
    BatchTooLarge { len: usize, max: usize },
}
