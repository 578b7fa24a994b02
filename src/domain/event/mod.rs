//! Event domain: tracked activity tied to a profile and a metric.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::serde_util::null_as_default;
use crate::shared::Properties;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── NewEvent ────────────────────────────────────────────────────────────────

/// An event that has not been created yet.
///
/// The profile and metric it belongs to are given separately when the event
/// is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEvent {
    /// When the event happened. The server uses the time of receipt if absent.
    pub time: Option<DateTime<Utc>>,
    /// Numeric value, e.g. an order total.
    pub value: Option<f64>,
    pub properties: Properties,
    /// Deduplication key; events with the same id for the same profile and
    /// metric are stored once.
    pub unique_id: Option<String>,
}

// ─── ProfileRef ──────────────────────────────────────────────────────────────

/// Identifies the profile an event is recorded for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileRef {
    Id(String),
    Email(String),
    PhoneNumber(String),
    ExternalId(String),
}

impl ProfileRef {
    pub fn id(id: impl Into<String>) -> Self {
        ProfileRef::Id(id.into())
    }

    pub fn email(email: impl Into<String>) -> Self {
        ProfileRef::Email(email.into())
    }

    pub fn phone_number(phone_number: impl Into<String>) -> Self {
        ProfileRef::PhoneNumber(phone_number.into())
    }

    pub fn external_id(external_id: impl Into<String>) -> Self {
        ProfileRef::ExternalId(external_id.into())
    }
}

// ─── ExistingEvent ───────────────────────────────────────────────────────────

/// A stored event as returned by `GET /events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: EventAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventAttributes {
    /// Unix seconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub event_properties: Properties,
}

impl EventAttributes {
    /// When the event happened, from `datetime` or else `timestamp`.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.datetime
            .or_else(|| self.timestamp.and_then(|s| DateTime::<Utc>::from_timestamp(s, 0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_event_deserialize() {
        let json = r#"{
            "type": "event",
            "id": "4bWz9vmQy4Y",
            "attributes": {
                "timestamp": 1706591400,
                "event_properties": {"EventName": "EmailSent", "PointClaimed": "1500"},
                "datetime": "2024-01-30T05:10:00+00:00",
                "uuid": "d13e0400-bf2d-11ee-8001-dd51f1217edd"
            },
            "relationships": {},
            "links": {}
        }"#;
        let event: ExistingEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, "event");
        assert_eq!(event.attributes.uuid, "d13e0400-bf2d-11ee-8001-dd51f1217edd");
        assert_eq!(event.attributes.event_properties["EventName"], "EmailSent");
        assert_eq!(
            event.attributes.time().unwrap().to_rfc3339(),
            "2024-01-30T05:10:00+00:00"
        );
    }

    #[test]
    fn test_time_falls_back_to_timestamp() {
        let attrs = EventAttributes {
            timestamp: Some(1706591400),
            ..EventAttributes::default()
        };
        assert_eq!(attrs.time().unwrap().to_rfc3339(), "2024-01-30T05:10:00+00:00");
    }
}
