//! Notifications sent to users.

use super::push_time;
use crate::models::{Notification, NotificationType};
use crate::{PagerDutyClient, Result};
use chrono::{DateTime, Utc};
use pagerduty_core::query::QueryParams;
use pagerduty_core::Request;

/// Filters for [`PagerDutyClient::notifications`].
///
/// The API requires `since` and `until`; leaving them out is answered with
/// `400 Bad Request`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationListParams {
    /// Start of the window.
    pub since: Option<DateTime<Utc>>,
    /// End of the window.
    pub until: Option<DateTime<Utc>>,
    /// Time zone for rendered timestamps.
    pub time_zone: Option<String>,
    /// Only notifications of this channel.
    pub filter: Option<NotificationType>,
    /// Related objects to embed (`users`).
    pub include: Vec<String>,
}

impl NotificationListParams {
    /// Notifications sent between two instants.
    #[must_use]
    pub fn between(since: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self {
            since: Some(since),
            until: Some(until),
            ..Self::default()
        }
    }

    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_time(&mut params, "since", self.since);
        push_time(&mut params, "until", self.until);
        params.push_opt("time_zone", self.time_zone.as_deref());
        params.push_opt("filter", self.filter);
        params.push_each("include[]", &self.include);
        params
    }
}

impl PagerDutyClient {
    /// List notifications sent in a time window.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn notifications(
        &self,
        params: &NotificationListParams,
    ) -> Result<Vec<Notification>> {
        let request = Request::get("/notifications").query(params.to_query());
        self.connection().request_envelope(request, "notifications").await
    }
}
