//! Bulk imports sub-client.

use crate::client::KlaviyoClient;
use crate::domain::bulk_import::wire::bulk_import_body;
use crate::domain::bulk_import::BulkImportJob;
use crate::domain::profile::NewProfile;
use crate::error::Result;
use crate::shared::Document;

const BULK_IMPORT_JOBS_PATH: &str = "profile-bulk-import-jobs";

pub struct BulkImports<'a> {
    pub(crate) client: &'a KlaviyoClient,
}

impl<'a> BulkImports<'a> {
    /// Starts a job importing `profiles`. Between 1 and
    /// [`MAX_BULK_IMPORT_PROFILES`](super::MAX_BULK_IMPORT_PROFILES) profiles
    /// are accepted; anything else fails without a request.
    pub async fn submit(&self, profiles: &[NewProfile]) -> Result<BulkImportJob> {
        self.submit_inner(profiles, None).await
    }

    /// Like [`submit`](Self::submit), also adding every profile to `list_id`.
    pub async fn submit_to_list(&self, profiles: &[NewProfile], list_id: &str) -> Result<BulkImportJob> {
        self.submit_inner(profiles, Some(list_id)).await
    }

    async fn submit_inner(&self, profiles: &[NewProfile], list_id: Option<&str>) -> Result<BulkImportJob> {
        let body = bulk_import_body(profiles, list_id)?;
        tracing::debug!(count = profiles.len(), list_id, "Submitting bulk profile import");
        let doc: Document<BulkImportJob> = self.client.http.post(BULK_IMPORT_JOBS_PATH, &body).await?;
        Ok(doc.into_data())
    }
}
