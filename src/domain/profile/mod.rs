//! Profile domain: new and existing profiles, location, partial updates.

#[cfg(feature = "http")]
pub mod client;
pub mod update;
pub mod wire;

use crate::shared::serde_util::null_as_default;
use crate::shared::Properties;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use update::{LocationUpdate, ProfileUpdate, PropertyUpdate, UpdateRequest};

// ─── Location ────────────────────────────────────────────────────────────────

/// Geographical location of a profile. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

// ─── ProfileAttributes ───────────────────────────────────────────────────────

/// Identity and descriptive attributes shared by new and existing profiles.
///
/// Absent fields are omitted from outgoing payloads. To change individual
/// fields of a stored profile use [`ProfileUpdate`] instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(
        default,
        deserialize_with = "null_as_default::deserialize",
        skip_serializing_if = "Properties::is_empty"
    )]
    pub properties: Properties,
}

// ─── NewProfile ──────────────────────────────────────────────────────────────

/// A profile that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProfile {
    pub attributes: ProfileAttributes,
}

impl NewProfile {
    pub fn new(attributes: ProfileAttributes) -> Self {
        Self { attributes }
    }

    /// Converts the present fields of this profile into update units.
    ///
    /// Absent fields produce no unit, so applying the result never clears
    /// anything on the stored profile. Location and properties are grouped
    /// into one nested unit each, and only when they have a present field.
    pub fn to_updates(&self) -> Vec<ProfileUpdate> {
        let attr = &self.attributes;
        let mut updates = Vec::new();

        let scalars = [
            ("email", &attr.email),
            ("phone_number", &attr.phone_number),
            ("external_id", &attr.external_id),
            ("anonymous_id", &attr.anonymous_id),
            ("first_name", &attr.first_name),
            ("last_name", &attr.last_name),
            ("organization", &attr.organization),
            ("title", &attr.title),
            ("image", &attr.image),
        ];
        for (key, value) in scalars {
            if let Some(value) = value {
                updates.push(ProfileUpdate::attribute(key, value.clone()));
            }
        }

        if let Some(loc) = &attr.location {
            let location = LocationUpdate::from_location(loc);
            if !location.is_empty() {
                updates.push(ProfileUpdate::Location(location));
            }
        }

        if !attr.properties.is_empty() {
            updates.push(ProfileUpdate::properties(
                attr.properties
                    .iter()
                    .map(|(name, value)| PropertyUpdate::new(name.clone(), value.clone())),
            ));
        }

        updates
    }
}

// ─── ExistingProfile ─────────────────────────────────────────────────────────

/// A stored profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingProfile {
    pub id: String,
    pub attributes: ExistingProfileAttributes,
}

/// Profile attributes plus server-maintained timestamps.
///
/// Timestamps are optional because sparse fieldsets may leave them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingProfileAttributes {
    #[serde(flatten)]
    pub profile: ProfileAttributes,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_event_date: Option<DateTime<Utc>>,
}

impl std::ops::Deref for ExistingProfileAttributes {
    type Target = ProfileAttributes;

    fn deref(&self) -> &Self::Target {
        &self.profile
    }
}
