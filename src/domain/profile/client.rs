//! Profiles sub-client: list, fetch, create, update, upsert.

use crate::client::KlaviyoClient;
use crate::domain::profile::wire::{create_profile_body, update_profile_body, upsert_profile_body};
use crate::domain::profile::{ExistingProfile, NewProfile, ProfileUpdate, UpdateRequest};
use crate::error::Result;
use crate::shared::{Document, Param, QueryParams, PROFILE_TYPE};

const PROFILES_PATH: &str = "profiles";
const PROFILE_IMPORT_PATH: &str = "profile-import";

/// Sub-client for profile operations.
pub struct Profiles<'a> {
    pub(crate) client: &'a KlaviyoClient,
}

impl<'a> Profiles<'a> {
    /// `GET /profiles`.
    pub async fn list(&self, params: &[Param]) -> Result<Vec<ExistingProfile>> {
        let query = QueryParams::from_params(PROFILE_TYPE, params);
        let doc: Document<Vec<ExistingProfile>> =
            self.client.http.get(PROFILES_PATH, &query).await?;
        Ok(doc.into_data())
    }

    /// Creates a profile.
    ///
    /// Fails with [`Error::ProfileAlreadyExists`](crate::error::Error::ProfileAlreadyExists)
    /// when one of its identifiers is taken.
    pub async fn create(&self, profile: &NewProfile) -> Result<ExistingProfile> {
        let doc: Document<ExistingProfile> = self
            .client
            .http
            .post(PROFILES_PATH, &create_profile_body(profile))
            .await?;
        Ok(doc.into_data())
    }

    /// Fails with [`Error::ProfileDoesNotExist`](crate::error::Error::ProfileDoesNotExist)
    /// for an unknown id.
    pub async fn get(&self, profile_id: &str) -> Result<ExistingProfile> {
        let path = format!("{}/{}/", PROFILES_PATH, urlencoding::encode(profile_id));
        let doc: Document<ExistingProfile> =
            self.client.http.get(&path, &QueryParams::new()).await?;
        Ok(doc.into_data())
    }

    /// Applies `updates` to the stored profile. Fields no unit touches are left
    /// as they are.
    pub async fn update(
        &self,
        profile_id: &str,
        updates: &[ProfileUpdate],
    ) -> Result<ExistingProfile> {
        let request = UpdateRequest::compose(updates);
        let path = format!("{}/{}", PROFILES_PATH, urlencoding::encode(profile_id));
        let doc: Document<ExistingProfile> = self
            .client
            .http
            .patch(&path, &update_profile_body(profile_id, &request))
            .await?;
        Ok(doc.into_data())
    }

    /// Creates a profile or updates the one matching its identifiers
    /// (email, phone number, external id).
    pub async fn create_or_update(&self, updates: &[ProfileUpdate]) -> Result<ExistingProfile> {
        let request = UpdateRequest::compose(updates);
        let doc: Document<ExistingProfile> = self
            .client
            .http
            .post(PROFILE_IMPORT_PATH, &upsert_profile_body(&request))
            .await?;
        Ok(doc.into_data())
    }
}
