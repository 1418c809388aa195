//! Log entries.

use super::push_time;
use crate::models::LogEntry;
use crate::{PagerDutyClient, Result};
use chrono::{DateTime, Utc};
use pagerduty_core::query::QueryParams;
use pagerduty_core::Request;

/// Filters for [`PagerDutyClient::log_entries`] and
/// [`PagerDutyClient::incident_log_entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntryListParams {
    /// Time zone for rendered timestamps.
    pub time_zone: Option<String>,
    /// Start of the search window.
    pub since: Option<DateTime<Utc>>,
    /// End of the search window.
    pub until: Option<DateTime<Utc>>,
    /// Only the most important changes to each incident.
    pub is_overview: bool,
    /// Related objects to embed (`incidents`, `services`, `channels`, `teams`).
    pub include: Vec<String>,
    /// Teams (`team_ids[]=A,B`).
    pub team_ids: Vec<String>,
}

impl LogEntryListParams {
    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("time_zone", self.time_zone.as_deref());
        push_time(&mut params, "since", self.since);
        push_time(&mut params, "until", self.until);
        params.push_flag("is_overview", self.is_overview);
        params.push_each("include[]", &self.include);
        params.push_joined("team_ids[]", &self.team_ids);
        params
    }
}

/// Options for [`PagerDutyClient::log_entry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntryParams {
    /// Time zone for rendered timestamps.
    pub time_zone: Option<String>,
    /// Related objects to embed.
    pub include: Vec<String>,
}

impl LogEntryParams {
    /// Convert the options to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("time_zone", self.time_zone.as_deref());
        params.push_each("include[]", &self.include);
        params
    }
}

impl PagerDutyClient {
    /// List log entries across the account.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn log_entries(&self, params: &LogEntryListParams) -> Result<Vec<LogEntry>> {
        let request = Request::get("/log_entries").query(params.to_query());
        self.connection().request_envelope(request, "log_entries").await
    }

    /// Fetch a log entry.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn log_entry(&self, id: &str, params: &LogEntryParams) -> Result<LogEntry> {
        let request = Request::get(format!("/log_entries/{id}")).query(params.to_query());
        self.connection().request_envelope(request, "log_entry").await
    }
}
