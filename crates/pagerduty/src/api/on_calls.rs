//! Who is on call.

use super::push_time;
use crate::models::OnCall;
use crate::{PagerDutyClient, Result};
use chrono::{DateTime, Utc};
use pagerduty_core::query::QueryParams;
use pagerduty_core::Request;

/// Filters for [`PagerDutyClient::on_calls`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnCallListParams {
    /// Time zone for rendered timestamps.
    pub time_zone: Option<String>,
    /// Related objects to embed (`escalation_policies`, `users`, `schedules`).
    pub include: Vec<String>,
    /// Only these users.
    pub user_ids: Vec<String>,
    /// Only these escalation policies.
    pub escalation_policy_ids: Vec<String>,
    /// Only these schedules.
    pub schedule_ids: Vec<String>,
    /// Start of the window.
    pub since: Option<DateTime<Utc>>,
    /// End of the window.
    pub until: Option<DateTime<Utc>>,
    /// Only the earliest on-call per user, policy and level.
    pub earliest: bool,
}

impl OnCallListParams {
    /// Convert the filters to query parameters. ID lists repeat the bracketed key.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("time_zone", self.time_zone.as_deref());
        params.push_each("include[]", &self.include);
        params.push_each("user_ids[]", &self.user_ids);
        params.push_each("escalation_policy_ids[]", &self.escalation_policy_ids);
        params.push_each("schedule_ids[]", &self.schedule_ids);
        push_time(&mut params, "since", self.since);
        push_time(&mut params, "until", self.until);
        params.push_flag("earliest", self.earliest);
        params
    }
}

impl PagerDutyClient {
    /// List on-call entries.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn on_calls(&self, params: &OnCallListParams) -> Result<Vec<OnCall>> {
        let request = Request::get("/oncalls").query(params.to_query());
        self.connection().request_envelope(request, "oncalls").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{client, single_query};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn on_calls_for_schedules() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oncalls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"oncalls": [
                {
                    "user": {"id": "PT23IWX", "type": "user_reference", "summary": "Tim Wright"},
                    "schedule": {"id": "PI7DH85", "type": "schedule_reference"},
                    "escalation_policy": {"id": "PT20YPA", "type": "escalation_policy_reference"},
                    "escalation_level": 2,
                    "start": "2015-03-06T15:28:51-05:00",
                    "end": "2015-03-07T15:28:51-05:00"
                },
                {
                    "user": {"id": "PXPGF42", "type": "user_reference"},
                    "schedule": null,
                    "escalation_policy": {"id": "PT20YPA", "type": "escalation_policy_reference"},
                    "escalation_level": 1,
                    "start": null,
                    "end": null
                }
            ]})))
            .mount(&server)
            .await;

        let on_calls = client(&server)
            .on_calls(&OnCallListParams {
                schedule_ids: vec!["PI7DH85".into(), "PA1BC23".into()],
                earliest: true,
                ..OnCallListParams::default()
            })
            .await
            .unwrap();

        assert_eq!(on_calls.len(), 2);
        assert_eq!(on_calls[0].escalation_level, 2);
        assert!(on_calls[1].schedule.is_none());
        assert!(on_calls[1].start.is_none());
        assert_eq!(
            single_query(&server).await,
            vec![
                ("schedule_ids[]".to_string(), "PI7DH85".to_string()),
                ("schedule_ids[]".to_string(), "PA1BC23".to_string()),
                ("earliest".to_string(), "true".to_string()),
            ]
        );
    }
}
