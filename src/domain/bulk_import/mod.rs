//! Bulk profile import: up to 10,000 profiles submitted as one async job.
//!
//! Only submission is covered; the returned job id can be polled separately.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest batch one job accepts.
pub const MAX_BULK_IMPORT_PROFILES: usize = 10_000;

/// Rejects empty or over-limit batches before anything is sent.
pub fn validate_batch_size(len: usize) -> Result<(), ValidationError> {
    match len {
        0 => Err(ValidationError::EmptyBatch),
        n if n > MAX_BULK_IMPORT_PROFILES => Err(ValidationError::BatchTooLarge {
            len: n,
            max: MAX_BULK_IMPORT_PROFILES,
        }),
        _ => Ok(()),
    }
}

/// A submitted bulk import job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkImportJob {
    pub id: String,
    #[serde(default)]
    pub attributes: BulkImportJobAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkImportJobAttributes {
    /// `queued`, `processing`, `complete` or `cancelled`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub completed_count: Option<u64>,
    #[serde(default)]
    pub failed_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_bounds() {
        assert_eq!(validate_batch_size(0), Err(ValidationError::EmptyBatch));
        assert_eq!(validate_batch_size(1), Ok(()));
        assert_eq!(validate_batch_size(10_000), Ok(()));
        assert_eq!(
            validate_batch_size(10_001),
            Err(ValidationError::BatchTooLarge {
                len: 10_001,
                max: 10_000
            })
        );
    }

    #[test]
    fn test_job_deserialize() {
        let json = r#"{
            "type": "profile-bulk-import-job",
            "id": "ZXhhbXBsZS1qb2I",
            "attributes": {
                "status": "queued",
                "created_at": "2024-02-20T10:00:00+00:00",
                "total_count": 2,
                "completed_count": 0,
                "failed_count": 0,
                "completed_at": null,
                "expires_at": "2024-02-27T10:00:00+00:00",
                "started_at": null
            }
        }"#;
        let job: BulkImportJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, "ZXhhbXBsZS1qb2I");
        assert_eq!(job.attributes.status.as_deref(), Some("queued"));
        assert_eq!(job.attributes.total_count, Some(2));
        assert!(job.attributes.completed_at.is_none());
    }
}
