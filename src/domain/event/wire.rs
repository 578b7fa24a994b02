//! Wire types for `POST /events`.
//!
//! The event's attributes embed two related resources, the profile and the
//! metric, each in its own `{"data": ...}` document. The server resolves or
//! creates both as part of the same request.

use super::{NewEvent, ProfileRef};
use crate::shared::{Document, Properties, Resource, ResourceRef, EVENT_TYPE, METRIC_TYPE, PROFILE_TYPE};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CreateEventAttributes<'a> {
    pub properties: &'a Properties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<&'a str>,
    pub metric: Document<Resource<MetricAttributes<'a>>>,
    pub profile: Document<ProfileData<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricAttributes<'a> {
    pub name: &'a str,
}

/// Profile reference inside an event: by id, or by one identifying attribute.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileData<'a> {
    Ref(ResourceRef),
    Attributes(Resource<ProfileIdentity<'a>>),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileIdentity<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<&'a str>,
}

impl<'a> From<&'a ProfileRef> for ProfileData<'a> {
    fn from(profile: &'a ProfileRef) -> Self {
        let identity = match profile {
            ProfileRef::Id(id) => return ProfileData::Ref(ResourceRef::new(PROFILE_TYPE, id.clone())),
            ProfileRef::Email(email) => ProfileIdentity {
                email: Some(email),
                ..ProfileIdentity::default()
            },
            ProfileRef::PhoneNumber(phone) => ProfileIdentity {
                phone_number: Some(phone),
                ..ProfileIdentity::default()
            },
            ProfileRef::ExternalId(external_id) => ProfileIdentity {
                external_id: Some(external_id),
                ..ProfileIdentity::default()
            },
        };
        ProfileData::Attributes(Resource::new(PROFILE_TYPE, identity))
    }
}

pub type CreateEventBody<'a> = Document<Resource<CreateEventAttributes<'a>>>;

/// Body for `POST /events`.
pub fn create_event_body<'a>(
    event: &'a NewEvent,
    profile: &'a ProfileRef,
    metric_name: &'a str,
) -> CreateEventBody<'a> {
    let attributes = CreateEventAttributes {
        properties: &event.properties,
        time: event.time,
        value: event.value,
        unique_id: event.unique_id.as_deref(),
        metric: Resource::new(METRIC_TYPE, MetricAttributes { name: metric_name }).into_document(),
        profile: Document::new(ProfileData::from(profile)),
    };
    Resource::new(EVENT_TYPE, attributes).into_document()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn event() -> NewEvent {
        let mut properties = Properties::new();
        properties.insert("EventName".into(), json!("EmailSent"));
        properties.insert("PointClaimed".into(), json!("1500"));
        NewEvent {
            time: Some(Utc.with_ymd_and_hms(2024, 1, 30, 5, 10, 0).unwrap()),
            value: Some(0.0),
            properties,
            unique_id: None,
        }
    }

    #[test]
    fn test_event_body_nests_profile_and_metric() {
        let event = event();
        let profile = ProfileRef::id("01HN6AFEHGF6F77WJRKT1C9JHG");
        let body = serde_json::to_value(create_event_body(&event, &profile, "Reward")).unwrap();
        assert_eq!(
            body,
            json!({
                "data": {
                    "type": "event",
                    "attributes": {
                        "properties": {"EventName": "EmailSent", "PointClaimed": "1500"},
                        "time": "2024-01-30T05:10:00Z",
                        "value": 0.0,
                        "metric": {"data": {"type": "metric", "attributes": {"name": "Reward"}}},
                        "profile": {"data": {"type": "profile", "id": "01HN6AFEHGF6F77WJRKT1C9JHG"}}
                    }
                }
            })
        );
    }

    #[test]
    fn test_event_profile_by_email() {
        let event = NewEvent::default();
        let profile = ProfileRef::email("sarah.mason@klaviyo-demo.com");
        let body = serde_json::to_value(create_event_body(&event, &profile, "Viewed")).unwrap();
        let attrs = &body["data"]["attributes"];
        assert_eq!(
            attrs["profile"],
            json!({"data": {"type": "profile", "attributes": {"email": "sarah.mason@klaviyo-demo.com"}}})
        );
        assert_eq!(attrs["properties"], json!({}));
        assert!(attrs.get("time").is_none());
        assert!(attrs.get("value").is_none());
    }
}
