//! Partial profile updates.
//!
//! An update is an ordered list of [`ProfileUpdate`] units. [`UpdateRequest::compose`]
//! applies them in order to an empty accumulator, so attributes no unit touches
//! never appear in the outgoing payload and cannot be cleared by accident.
//!
//! ```rust,ignore
//! let updates = [
//!     ProfileUpdate::phone_number("+15005550007"),
//!     ProfileUpdate::location([LocationUpdate::City("Boston".into())]),
//!     ProfileUpdate::properties([PropertyUpdate::new("pseudonym", "Ms. Octopus")]),
//!     ProfileUpdate::unset_properties(["skype"]),
//! ];
//! client.profiles().update(profile_id, &updates).await?;
//! ```

use super::Location;
use crate::shared::Properties;
use serde_json::Value;

// ─── Units ───────────────────────────────────────────────────────────────────

/// One mutation of a profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    /// Sets a single top-level attribute.
    Attribute { key: String, value: Value },
    /// Replaces `location` with an object built from the given units.
    Location(Vec<LocationUpdate>),
    /// Sets `properties` to an object built from the given units. Properties
    /// not listed keep their stored values.
    Properties(Vec<PropertyUpdate>),
    /// Deletes the named custom properties.
    UnsetProperties(Vec<String>),
}

impl ProfileUpdate {
    pub fn attribute(key: impl Into<String>, value: impl Into<Value>) -> Self {
        ProfileUpdate::Attribute {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self::attribute("email", email.into())
    }

    pub fn phone_number(phone_number: impl Into<String>) -> Self {
        Self::attribute("phone_number", phone_number.into())
    }

    pub fn external_id(external_id: impl Into<String>) -> Self {
        Self::attribute("external_id", external_id.into())
    }

    pub fn anonymous_id(anonymous_id: impl Into<String>) -> Self {
        Self::attribute("anonymous_id", anonymous_id.into())
    }

    pub fn first_name(first_name: impl Into<String>) -> Self {
        Self::attribute("first_name", first_name.into())
    }

    pub fn last_name(last_name: impl Into<String>) -> Self {
        Self::attribute("last_name", last_name.into())
    }

    pub fn organization(organization: impl Into<String>) -> Self {
        Self::attribute("organization", organization.into())
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self::attribute("title", title.into())
    }

    /// Image URL.
    pub fn image(image: impl Into<String>) -> Self {
        Self::attribute("image", image.into())
    }

    pub fn location(units: impl IntoIterator<Item = LocationUpdate>) -> Self {
        ProfileUpdate::Location(units.into_iter().collect())
    }

    pub fn properties(units: impl IntoIterator<Item = PropertyUpdate>) -> Self {
        ProfileUpdate::Properties(units.into_iter().collect())
    }

    pub fn unset_properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProfileUpdate::UnsetProperties(names.into_iter().map(Into::into).collect())
    }
}

/// One field of a profile location.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationUpdate {
    Address1(String),
    Address2(String),
    City(String),
    Country(String),
    Latitude(f64),
    Longitude(f64),
    Region(String),
    Zip(String),
    Timezone(String),
    Ip(String),
}

impl LocationUpdate {
    pub fn key(&self) -> &'static str {
        match self {
            LocationUpdate::Address1(_) => "address1",
            LocationUpdate::Address2(_) => "address2",
            LocationUpdate::City(_) => "city",
            LocationUpdate::Country(_) => "country",
            LocationUpdate::Latitude(_) => "latitude",
            LocationUpdate::Longitude(_) => "longitude",
            LocationUpdate::Region(_) => "region",
            LocationUpdate::Zip(_) => "zip",
            LocationUpdate::Timezone(_) => "timezone",
            LocationUpdate::Ip(_) => "ip",
        }
    }

    pub fn value(&self) -> Value {
        match self {
            LocationUpdate::Latitude(v) | LocationUpdate::Longitude(v) => Value::from(*v),
            LocationUpdate::Address1(s)
            | LocationUpdate::Address2(s)
            | LocationUpdate::City(s)
            | LocationUpdate::Country(s)
            | LocationUpdate::Region(s)
            | LocationUpdate::Zip(s)
            | LocationUpdate::Timezone(s)
            | LocationUpdate::Ip(s) => Value::String(s.clone()),
        }
    }

    /// Units for every present field of `loc`, in field order.
    pub fn from_location(loc: &Location) -> Vec<LocationUpdate> {
        let mut units = Vec::new();
        if let Some(v) = &loc.address1 {
            units.push(LocationUpdate::Address1(v.clone()));
        }
        if let Some(v) = &loc.address2 {
            units.push(LocationUpdate::Address2(v.clone()));
        }
        if let Some(v) = &loc.city {
            units.push(LocationUpdate::City(v.clone()));
        }
        if let Some(v) = &loc.country {
            units.push(LocationUpdate::Country(v.clone()));
        }
        if let Some(v) = loc.latitude {
            units.push(LocationUpdate::Latitude(v));
        }
        if let Some(v) = loc.longitude {
            units.push(LocationUpdate::Longitude(v));
        }
        if let Some(v) = &loc.region {
            units.push(LocationUpdate::Region(v.clone()));
        }
        if let Some(v) = &loc.zip {
            units.push(LocationUpdate::Zip(v.clone()));
        }
        if let Some(v) = &loc.timezone {
            units.push(LocationUpdate::Timezone(v.clone()));
        }
        if let Some(v) = &loc.ip {
            units.push(LocationUpdate::Ip(v.clone()));
        }
        units
    }
}

/// Sets one custom property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyUpdate {
    pub name: String,
    pub value: Value,
}

impl PropertyUpdate {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// ─── Composer ────────────────────────────────────────────────────────────────

/// Accumulated result of applying update units: the attributes to send and
/// the custom properties to delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRequest {
    /// Last write wins per key.
    pub attributes: Properties,
    /// Property names to delete, first occurrence order, no duplicates.
    pub unset: Vec<String>,
}

impl UpdateRequest {
    /// Applies `updates` in order to an empty request.
    ///
    /// A property that is both set and unset in the same request is unset:
    /// it is dropped from the outgoing `properties` object and kept in
    /// [`UpdateRequest::unset`], regardless of unit order.
    pub fn compose<'a>(updates: impl IntoIterator<Item = &'a ProfileUpdate>) -> Self {
        let mut request = Self::default();
        for update in updates {
            request.apply(update);
        }

        if !request.unset.is_empty() {
            if let Some(Value::Object(properties)) = request.attributes.get_mut("properties") {
                for name in &request.unset {
                    properties.shift_remove(name);
                }
            }
        }

        request
    }

    fn apply(&mut self, update: &ProfileUpdate) {
        match update {
            ProfileUpdate::Attribute { key, value } => {
                self.attributes.insert(key.clone(), value.clone());
            }
            ProfileUpdate::Location(units) => {
                let mut location = Properties::new();
                for unit in units {
                    location.insert(unit.key().to_string(), unit.value());
                }
                self.attributes
                    .insert("location".to_string(), Value::Object(location));
            }
            ProfileUpdate::Properties(units) => {
                let mut properties = Properties::new();
                for unit in units {
                    properties.insert(unit.name.clone(), unit.value.clone());
                }
                self.attributes
                    .insert("properties".to_string(), Value::Object(properties));
            }
            ProfileUpdate::UnsetProperties(names) => {
                for name in names {
                    if !self.unset.contains(name) {
                        self.unset.push(name.clone());
                    }
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.unset.is_empty()
    }
}
