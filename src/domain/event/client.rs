//! Events sub-client.

use crate::client::KlaviyoClient;
use crate::domain::event::wire::create_event_body;
use crate::domain::event::{ExistingEvent, NewEvent, ProfileRef};
use crate::error::Result;
use crate::shared::{Document, Param, QueryParams, EVENT_TYPE};

const EVENTS_PATH: &str = "events";

pub struct Events<'a> {
    pub(crate) client: &'a KlaviyoClient,
}

impl<'a> Events<'a> {
    /// `GET /events`.
    pub async fn list(&self, params: &[Param]) -> Result<Vec<ExistingEvent>> {
        let query = QueryParams::from_params(EVENT_TYPE, params);
        let doc: Document<Vec<ExistingEvent>> = self.client.http.get(EVENTS_PATH, &query).await?;
        Ok(doc.into_data())
    }

    /// Records `event` for `profile` under the metric named `metric_name`.
    /// The metric is created on first use.
    pub async fn create(&self, event: &NewEvent, profile: &ProfileRef, metric_name: &str) -> Result<()> {
        self.client
            .http
            .post_discard(EVENTS_PATH, &create_event_body(event, profile, metric_name))
            .await
    }
}
