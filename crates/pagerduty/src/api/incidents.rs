//! Incidents and their alerts, log entries and notes.

use super::log_entries::LogEntryListParams;
use super::push_time;
use crate::models::{Alert, AlertStatus, Incident, IncidentNote, IncidentStatus, LogEntry, Urgency};
use crate::{PagerDutyClient, Result};
use chrono::{DateTime, Utc};
use pagerduty_core::query::QueryParams;
use pagerduty_core::Request;

/// Filters for [`PagerDutyClient::incidents`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentListParams {
    /// Ignore `since`/`until` and search every incident (`date_range=all`).
    pub date_range_all: bool,
    /// Start of the search window.
    pub since: Option<DateTime<Utc>>,
    /// End of the search window.
    pub until: Option<DateTime<Utc>>,
    /// De-duplication key.
    pub incident_key: Option<String>,
    /// Time zone for rendered timestamps.
    pub time_zone: Option<String>,
    /// Sort field, e.g. `created_at:desc`.
    pub sort_by: Option<String>,
    /// Statuses to include, one `statuses[]` per value.
    pub statuses: Vec<IncidentStatus>,
    /// Urgencies to include, one `urgencies[]` per value.
    pub urgencies: Vec<Urgency>,
    /// Related objects to embed, one `include[]` per value.
    pub include: Vec<String>,
    /// Services (`service_ids[]=A,B`).
    pub service_ids: Vec<String>,
    /// Teams (`team_ids[]=A,B`).
    pub team_ids: Vec<String>,
    /// Assigned users (`user_ids[]=A,B`).
    pub user_ids: Vec<String>,
}

impl IncidentListParams {
    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.date_range_all {
            params.push("date_range", "all");
        } else {
            push_time(&mut params, "since", self.since);
            push_time(&mut params, "until", self.until);
        }
        params.push_opt("incident_key", self.incident_key.as_deref());
        params.push_opt("time_zone", self.time_zone.as_deref());
        params.push_opt("sort_by", self.sort_by.as_deref());
        params.push_each("statuses[]", &self.statuses);
        params.push_joined("service_ids[]", &self.service_ids);
        params.push_joined("team_ids[]", &self.team_ids);
        params.push_joined("user_ids[]", &self.user_ids);
        params.push_each("urgencies[]", &self.urgencies);
        params.push_each("include[]", &self.include);
        params
    }
}

/// Filters for [`PagerDutyClient::incident_alerts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentAlertParams {
    /// Statuses to include.
    pub statuses: Vec<AlertStatus>,
    /// De-duplication key.
    pub alert_key: Option<String>,
    /// Sort field.
    pub sort_by: Option<String>,
    /// Related objects to embed.
    pub include: Vec<String>,
}

impl IncidentAlertParams {
    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_each("statuses[]", &self.statuses);
        params.push_opt("alert_key", self.alert_key.as_deref());
        params.push_opt("sort_by", self.sort_by.as_deref());
        params.push_each("include[]", &self.include);
        params
    }
}

impl PagerDutyClient {
    /// List incidents.
    ///
    /// Without a window the API returns the last 30 days.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn incidents(&self, params: &IncidentListParams) -> Result<Vec<Incident>> {
        let request = Request::get("/incidents").query(params.to_query());
        self.connection().request_envelope(request, "incidents").await
    }

    /// Fetch an incident by ID or incident number.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn incident(&self, id: &str) -> Result<Incident> {
        self.connection()
            .request_envelope(Request::get(format!("/incidents/{id}")), "incident")
            .await
    }

    /// List the alerts grouped under an incident.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn incident_alerts(
        &self,
        id: &str,
        params: &IncidentAlertParams,
    ) -> Result<Vec<Alert>> {
        let request = Request::get(format!("/incidents/{id}/alerts")).query(params.to_query());
        self.connection().request_envelope(request, "alerts").await
    }

    /// List the log entries of an incident.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn incident_log_entries(
        &self,
        id: &str,
        params: &LogEntryListParams,
    ) -> Result<Vec<LogEntry>> {
        let request =
            Request::get(format!("/incidents/{id}/log_entries")).query(params.to_query());
        self.connection().request_envelope(request, "log_entries").await
    }

    /// List the notes on an incident.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn incident_notes(&self, id: &str) -> Result<Vec<IncidentNote>> {
        self.connection()
            .request_envelope(Request::get(format!("/incidents/{id}/notes")), "notes")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{client, single_query};
    use chrono::TimeZone;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn incident_json() -> Value {
        json!({
            "id": "PT4KHLK",
            "type": "incident",
            "summary": "[#1234] The server is on fire.",
            "incident_number": 1234,
            "title": "The server is on fire.",
            "created_at": "2015-10-06T21:30:42Z",
            "status": "resolved",
            "urgency": "high",
            "incident_key": "baf7cf21b1da41b4b0221008339ff357",
            "service": {"id": "PIJ90N7", "type": "generic_email_reference"},
            "assignments": [{
                "at": "2015-11-10T00:31:52Z",
                "assignee": {"id": "PXPGF42", "type": "user_reference"}
            }],
            "acknowledgements": [{
                "at": "2015-11-10T00:31:52Z",
                "acknowledger": {"id": "PXPGF42", "type": "user_reference"}
            }],
            "last_status_change_at": "2015-10-06T21:38:23Z",
            "escalation_policy": {"id": "PT20YPA", "type": "escalation_policy_reference"},
            "teams": [{"id": "PQ9K7I8", "type": "team_reference"}]
        })
    }

    #[test]
    fn date_range_overrides_window() {
        let params = IncidentListParams {
            date_range_all: true,
            since: Some(Utc.with_ymd_and_hms(2017, 5, 28, 23, 48, 27).unwrap()),
            ..IncidentListParams::default()
        };
        assert_eq!(
            params.to_query().into_pairs(),
            vec![("date_range", "all".to_string())]
        );
    }

    #[test]
    fn list_params_array_shapes() {
        let params = IncidentListParams {
            since: Some(Utc.with_ymd_and_hms(2017, 5, 28, 23, 48, 27).unwrap()),
            statuses: vec![IncidentStatus::Triggered, IncidentStatus::Acknowledged],
            urgencies: vec![Urgency::High],
            service_ids: vec!["PIJ90N7".into(), "PXCT22H".into()],
            user_ids: vec!["PXPGF42".into()],
            include: vec!["users".into()],
            ..IncidentListParams::default()
        };
        assert_eq!(
            params.to_query().into_pairs(),
            vec![
                ("since", "2017-05-28T23:48:27Z".to_string()),
                ("statuses[]", "triggered".to_string()),
                ("statuses[]", "acknowledged".to_string()),
                ("service_ids[]", "PIJ90N7,PXCT22H".to_string()),
                ("user_ids[]", "PXPGF42".to_string()),
                ("urgencies[]", "high".to_string()),
                ("include[]", "users".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn incidents_by_team() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/incidents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "incidents": [incident_json()], "limit": 25, "offset": 0, "more": false
            })))
            .mount(&server)
            .await;

        let incidents = client(&server)
            .incidents(&IncidentListParams {
                team_ids: vec!["P1HE60B".into(), "P7XILUG".into()],
                ..IncidentListParams::default()
            })
            .await
            .unwrap();

        assert_eq!(incidents[0].incident_number, 1234);
        assert_eq!(incidents[0].assignments[0].assignee.id, "PXPGF42");
        assert_eq!(
            single_query(&server).await,
            vec![("team_ids[]".to_string(), "P1HE60B,P7XILUG".to_string())]
        );
    }

    #[tokio::test]
    async fn incident_by_number() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/incidents/1234"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"incident": incident_json()})))
            .expect(1)
            .mount(&server)
            .await;

        let incident = client(&server).incident("1234").await.unwrap();
        assert_eq!(incident.id, "PT4KHLK");
        assert_eq!(incident.status, IncidentStatus::Resolved);
        assert_eq!(incident.urgency, Some(Urgency::High));
    }

    #[tokio::test]
    async fn incident_sub_resources() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/incidents/PT4KHLK/alerts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"alerts": [{
                "id": "PT4KHLK",
                "type": "alert",
                "created_at": "2015-10-06T21:30:42Z",
                "status": "resolved",
                "alert_key": "baf7cf21b1da41b4b0221008339ff357",
                "incident": {"id": "PT4KHLK", "type": "incident_reference"},
                "suppressed": false,
                "severity": "critical"
            }]})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/incidents/PT4KHLK/notes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"notes": [{
                "id": "PWL7QXS",
                "user": {"id": "PXPGF42", "type": "user_reference"},
                "content": "Firefighters are on the scene.",
                "created_at": "2013-03-06T15:28:51-05:00"
            }]})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/incidents/PT4KHLK/log_entries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"log_entries": [{
                "id": "Q02JTSNZWHSEKV",
                "type": "trigger_log_entry",
                "created_at": "2015-11-07T00:14:20Z",
                "agent": {"id": "PXPGF42", "type": "user_reference"},
                "channel": {"type": "web_trigger"}
            }]})))
            .mount(&server)
            .await;

        let client = client(&server);
        let alerts = client
            .incident_alerts(
                "PT4KHLK",
                &IncidentAlertParams {
                    statuses: vec![AlertStatus::Resolved],
                    ..IncidentAlertParams::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(alerts[0].severity.as_deref(), Some("critical"));
        assert_eq!(alerts[0].status, AlertStatus::Resolved);

        let notes = client.incident_notes("PT4KHLK").await.unwrap();
        assert_eq!(notes[0].content, "Firefighters are on the scene.");

        let entries = client
            .incident_log_entries("PT4KHLK", &LogEntryListParams::default())
            .await
            .unwrap();
        assert_eq!(entries[0].kind, "trigger_log_entry");
    }
}
