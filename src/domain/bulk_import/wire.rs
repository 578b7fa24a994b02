//! Wire types for `POST /profile-bulk-import-jobs`.

use crate::domain::profile::{NewProfile, ProfileAttributes};
use crate::error::ValidationError;
use crate::shared::{Document, Resource, ResourceRef, BULK_IMPORT_JOB_TYPE, LIST_TYPE, PROFILE_TYPE};
use serde::Serialize;

use super::validate_batch_size;

#[derive(Debug, Clone, Serialize)]
pub struct BulkImportJobData<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: BulkImportJobPayload<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<BulkImportRelationships>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkImportJobPayload<'a> {
    pub profiles: Document<Vec<Resource<&'a ProfileAttributes>>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkImportRelationships {
    pub lists: Document<Vec<ResourceRef>>,
}

pub type BulkImportBody<'a> = Document<BulkImportJobData<'a>>;

/// Body for `POST /profile-bulk-import-jobs`, optionally adding every
/// imported profile to `list_id`.
pub fn bulk_import_body<'a>(
    profiles: &'a [NewProfile],
    list_id: Option<&str>,
) -> Result<BulkImportBody<'a>, ValidationError> {
    validate_batch_size(profiles.len())?;

    let records = profiles
        .iter()
        .map(|p| Resource::new(PROFILE_TYPE, &p.attributes))
        .collect();

    Ok(Document::new(BulkImportJobData {
        kind: BULK_IMPORT_JOB_TYPE,
        attributes: BulkImportJobPayload {
            profiles: Document::new(records),
        },
        relationships: list_id.map(|id| BulkImportRelationships {
            lists: Document::new(vec![ResourceRef::new(LIST_TYPE, id)]),
        }),
    }))
}
