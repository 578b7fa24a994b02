//! Event endpoints against a mock Klaviyo server.

mod common;

use chrono::{TimeZone, Utc};
use common::client_for;
use klaviyo_sdk::domain::event::{NewEvent, ProfileRef};
use klaviyo_sdk::http::RetryConfig;
use klaviyo_sdk::shared::{Param, Properties};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_event_accepts_empty_202() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let mut properties = Properties::new();
    properties.insert("EventName".into(), json!("EmailSent"));
    let event = NewEvent {
        time: Some(Utc.with_ymd_and_hms(2024, 1, 30, 5, 10, 0).unwrap()),
        value: Some(9.99),
        properties,
        unique_id: Some("order-1001".into()),
    };

    let client = client_for(&server, RetryConfig::none());
    client
        .events()
        .create(&event, &ProfileRef::external_id("crm-42"), "Placed Order")
        .await
        .expect("create event");

    let requests = server.received_requests().await.expect("recording enabled");
    let sent: Value = serde_json::from_slice(&requests[0].body).expect("json body");
    assert_eq!(
        sent,
        json!({
            "data": {
                "type": "event",
                "attributes": {
                    "properties": {"EventName": "EmailSent"},
                    "time": "2024-01-30T05:10:00Z",
                    "value": 9.99,
                    "unique_id": "order-1001",
                    "metric": {"data": {"type": "metric", "attributes": {"name": "Placed Order"}}},
                    "profile": {"data": {"type": "profile", "attributes": {"external_id": "crm-42"}}}
                }
            }
        })
    );
}

#[tokio::test]
async fn test_list_events() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("page[size]", "20"))
        .and(query_param("sort", "-datetime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "type": "event",
                "id": "4bWz9vmQy4Y",
                "attributes": {
                    "timestamp": 1706591400,
                    "event_properties": {"EventName": "EmailSent"},
                    "datetime": "2024-01-30T05:10:00+00:00",
                    "uuid": "4c4e8a00-bf29-11ee-8001-d2f5b4b3c6a2"
                },
                "relationships": {}
            }],
            "links": {"self": "https://a.klaviyo.com/api/events/", "next": null, "prev": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, RetryConfig::none());
    let events = client
        .events()
        .list(&[Param::default_page_size(), Param::sort("-datetime")])
        .await
        .expect("list events");

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "4bWz9vmQy4Y");
    assert_eq!(events[0].attributes.event_properties["EventName"], json!("EmailSent"));
    assert_eq!(
        events[0].attributes.time(),
        Some(Utc.with_ymd_and_hms(2024, 1, 30, 5, 10, 0).unwrap())
    );
}
