//! Schedules, overrides and on-call users.

use super::{push_time, TimeWindow};
use crate::models::{Schedule, ScheduleOverride, TargetRef, User};
use crate::{PagerDutyClient, Result};
use chrono::{DateTime, Utc};
use pagerduty_core::query::QueryParams;
use pagerduty_core::Request;
use serde::Serialize;

/// Filters for [`PagerDutyClient::schedules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleListParams {
    /// Name filter.
    pub query: Option<String>,
}

impl ScheduleListParams {
    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("query", self.query.as_deref());
        params
    }
}

/// Rendering window for [`PagerDutyClient::schedule`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleParams {
    /// Start of the rendered window.
    pub since: Option<DateTime<Utc>>,
    /// End of the rendered window.
    pub until: Option<DateTime<Utc>>,
    /// Time zone for rendered timestamps.
    pub time_zone: Option<String>,
}

impl ScheduleParams {
    /// Convert the options to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_time(&mut params, "since", self.since);
        push_time(&mut params, "until", self.until);
        params.push_opt("time_zone", self.time_zone.as_deref());
        params
    }
}

/// Filters for [`PagerDutyClient::schedule_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideListParams {
    /// Start of the window.
    pub since: Option<DateTime<Utc>>,
    /// End of the window.
    pub until: Option<DateTime<Utc>>,
    /// Return overrides as they are, not truncated to the window.
    pub overflow: bool,
    /// Only overrides that can still be edited.
    pub editable: bool,
}

impl OverrideListParams {
    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_time(&mut params, "since", self.since);
        push_time(&mut params, "until", self.until);
        params.push_flag("overflow", self.overflow);
        params.push_flag("editable", self.editable);
        params
    }
}

/// Override for [`PagerDutyClient::create_schedule_override`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOverride {
    /// Start of the override.
    pub start: DateTime<Utc>,
    /// End of the override.
    pub end: DateTime<Utc>,
    /// User taking over.
    pub user_id: String,
}

#[derive(Serialize)]
struct OverridePayload {
    start: String,
    end: String,
    user: TargetRef,
}

#[derive(Serialize)]
struct OverrideBody {
    #[serde(rename = "override")]
    schedule_override: OverridePayload,
}

impl PagerDutyClient {
    /// List schedules.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn schedules(&self, params: &ScheduleListParams) -> Result<Vec<Schedule>> {
        let request = Request::get("/schedules").query(params.to_query());
        self.connection().request_envelope(request, "schedules").await
    }

    /// Fetch a schedule rendered for a window.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn schedule(&self, id: &str, params: &ScheduleParams) -> Result<Schedule> {
        let request = Request::get(format!("/schedules/{id}")).query(params.to_query());
        self.connection().request_envelope(request, "schedule").await
    }

    /// Delete a schedule. `true` on `204`, `false` on `404`.
    ///
    /// # Errors
    ///
    /// Returns every request error except `404`.
    pub async fn delete_schedule(&self, id: &str) -> Result<bool> {
        self.connection()
            .boolean_from_response(Request::delete(format!("/schedules/{id}")))
            .await
    }

    /// List overrides on a schedule.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn schedule_overrides(
        &self,
        id: &str,
        params: &OverrideListParams,
    ) -> Result<Vec<ScheduleOverride>> {
        let request =
            Request::get(format!("/schedules/{id}/overrides")).query(params.to_query());
        self.connection().request_envelope(request, "overrides").await
    }

    /// Create an override on a schedule.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn create_schedule_override(
        &self,
        id: &str,
        schedule_override: &NewOverride,
    ) -> Result<ScheduleOverride> {
        let body = OverrideBody {
            schedule_override: OverridePayload {
                start: super::iso8601(schedule_override.start),
                end: super::iso8601(schedule_override.end),
                user: TargetRef::new(schedule_override.user_id.as_str(), "user"),
            },
        };
        let request = Request::post(format!("/schedules/{id}/overrides")).json(&body)?;
        self.connection().request_envelope(request, "override").await
    }

    /// Remove an override. `true` on `204`, `false` on `404`.
    ///
    /// # Errors
    ///
    /// Returns every request error except `404`.
    pub async fn delete_schedule_override(
        &self,
        schedule_id: &str,
        override_id: &str,
    ) -> Result<bool> {
        let request = Request::delete(format!("/schedules/{schedule_id}/overrides/{override_id}"));
        self.connection().boolean_from_response(request).await
    }

    /// List the users on call for a schedule in a window.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn on_call_users(&self, id: &str, window: &TimeWindow) -> Result<Vec<User>> {
        let mut params = QueryParams::new();
        window.push_to(&mut params);
        let request = Request::get(format!("/schedules/{id}/users")).query(params);
        self.connection().request_envelope(request, "users").await
    }
}
