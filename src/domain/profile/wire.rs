//! Wire types for profile requests.

use super::{NewProfile, ProfileAttributes, UpdateRequest};
use crate::shared::{Document, Properties, Resource, PROFILE_TYPE};
use serde::{Deserialize, Serialize};

/// `meta` of a profile write: `{"patch_properties": {"unset": [...]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMeta {
    pub patch_properties: PatchProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchProperties {
    pub unset: Vec<String>,
}

pub type CreateProfileBody<'a> = Document<Resource<&'a ProfileAttributes>>;
pub type WriteProfileBody<'a> = Document<Resource<&'a Properties, ProfileMeta>>;

/// Body for `POST /profiles`.
pub fn create_profile_body(profile: &NewProfile) -> CreateProfileBody<'_> {
    Resource::new(PROFILE_TYPE, &profile.attributes).into_document()
}

/// Body for `PATCH /profiles/{id}`.
pub fn update_profile_body<'a>(id: &str, request: &'a UpdateRequest) -> WriteProfileBody<'a> {
    write_body(request).with_id(id).into_document()
}

/// Body for `POST /profile-import`.
pub fn upsert_profile_body(request: &UpdateRequest) -> WriteProfileBody<'_> {
    write_body(request).into_document()
}

fn write_body(request: &UpdateRequest) -> Resource<&Properties, ProfileMeta> {
    let resource = Resource::new(PROFILE_TYPE, &request.attributes);
    if request.unset.is_empty() {
        resource
    } else {
        resource.with_meta(ProfileMeta {
            patch_properties: PatchProperties {
                unset: request.unset.clone(),
            },
        })
    }
}
