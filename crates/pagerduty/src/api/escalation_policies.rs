//! Escalation policies.

use crate::models::{EscalationPolicy, TargetRef};
use crate::{PagerDutyClient, Result};
use pagerduty_core::query::QueryParams;
use pagerduty_core::Request;
use serde::Serialize;

const POLICY_TYPE: &str = "escalation_policy";

/// Filters for [`PagerDutyClient::escalation_policies`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EscalationPolicyListParams {
    /// Name filter.
    pub query: Option<String>,
    /// Policies that target any of these users (`user_ids[]=A,B`).
    pub user_ids: Vec<String>,
    /// Policies belonging to any of these teams (`team_ids[]=A,B`).
    pub team_ids: Vec<String>,
    /// Related objects to embed (`services`, `teams`, `targets`).
    pub include: Vec<String>,
    /// Sort field, e.g. `name:desc`.
    pub sort_by: Option<String>,
}

impl EscalationPolicyListParams {
    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("query", self.query.as_deref());
        params.push_joined("user_ids[]", &self.user_ids);
        params.push_joined("team_ids[]", &self.team_ids);
        params.push_each("include[]", &self.include);
        params.push_opt("sort_by", self.sort_by.as_deref());
        params
    }
}

/// Escalation rule as sent when creating or updating a policy.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EscalationRuleRequest {
    /// Minutes before escalating to the next rule.
    pub escalation_delay_in_minutes: u32,
    /// Users or schedules to notify.
    pub targets: Vec<TargetRef>,
}

impl EscalationRuleRequest {
    /// Create a rule.
    #[must_use]
    pub fn new(escalation_delay_in_minutes: u32, targets: Vec<TargetRef>) -> Self {
        Self {
            escalation_delay_in_minutes,
            targets,
        }
    }
}

/// Optional settings for [`PagerDutyClient::create_escalation_policy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEscalationPolicy {
    /// Description, sent as an empty string when unset.
    pub description: Option<String>,
    /// Number of loops, sent as `0` when unset.
    pub num_loops: Option<u32>,
    /// Whether the policy repeats.
    pub repeat_enabled: bool,
    /// Services to attach.
    pub services: Vec<TargetRef>,
    /// Team IDs to associate.
    pub team_ids: Vec<String>,
    /// Sent as the `From` header; required for account-level tokens.
    pub from_email_address: Option<String>,
}

#[derive(Serialize)]
struct CreatePayload<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
    escalation_rules: &'a [EscalationRuleRequest],
    repeat_enabled: bool,
    services: &'a [TargetRef],
    num_loops: u32,
    teams: Vec<TargetRef>,
    description: &'a str,
}

/// Changes for [`PagerDutyClient::update_escalation_policy`]. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EscalationPolicyUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New loop count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_loops: Option<u32>,
    /// Replacement rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_rules: Option<Vec<EscalationRuleRequest>>,
    /// Replacement services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<TargetRef>>,
    /// Replacement teams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<TargetRef>>,
}

#[derive(Serialize)]
struct UpdatePayload<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    update: &'a EscalationPolicyUpdate,
}

#[derive(Serialize)]
struct PolicyBody<T> {
    escalation_policy: T,
}

impl PagerDutyClient {
    /// List escalation policies.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn escalation_policies(
        &self,
        params: &EscalationPolicyListParams,
    ) -> Result<Vec<EscalationPolicy>> {
        let request = Request::get("/escalation_policies").query(params.to_query());
        self.connection()
            .request_envelope(request, "escalation_policies")
            .await
    }

    /// Fetch an escalation policy.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn escalation_policy(&self, id: &str) -> Result<EscalationPolicy> {
        let request = Request::get(format!("/escalation_policies/{id}"));
        self.connection()
            .request_envelope(request, "escalation_policy")
            .await
    }

    /// Create an escalation policy.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn create_escalation_policy(
        &self,
        name: &str,
        escalation_rules: &[EscalationRuleRequest],
        options: &NewEscalationPolicy,
    ) -> Result<EscalationPolicy> {
        let payload = CreatePayload {
            kind: POLICY_TYPE,
            name,
            escalation_rules,
            repeat_enabled: options.repeat_enabled,
            services: &options.services,
            num_loops: options.num_loops.unwrap_or(0),
            teams: options
                .team_ids
                .iter()
                .map(|id| TargetRef::new(id.as_str(), "team"))
                .collect(),
            description: options.description.as_deref().unwrap_or_default(),
        };

        let mut request = Request::post("/escalation_policies").json(&PolicyBody {
            escalation_policy: payload,
        })?;
        if let Some(from) = &options.from_email_address {
            request = request.header("From", from.as_str());
        }
        self.connection()
            .request_envelope(request, "escalation_policy")
            .await
    }

    /// Update an escalation policy.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn update_escalation_policy(
        &self,
        id: &str,
        update: &EscalationPolicyUpdate,
    ) -> Result<EscalationPolicy> {
        let request = Request::put(format!("/escalation_policies/{id}")).json(&PolicyBody {
            escalation_policy: UpdatePayload {
                kind: POLICY_TYPE,
                update,
            },
        })?;
        self.connection()
            .request_envelope(request, "escalation_policy")
            .await
    }

    /// Delete an escalation policy. `true` on `204`, `false` on `404`.
    ///
    /// # Errors
    ///
    /// Returns every request error except `404`.
    pub async fn delete_escalation_policy(&self, id: &str) -> Result<bool> {
        self.connection()
            .boolean_from_response(Request::delete(format!("/escalation_policies/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{client, single_query};
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn policy_json() -> Value {
        json!({
            "id": "PANZZEQ",
            "type": "escalation_policy",
            "summary": "Engineering Escalation Policy",
            "name": "Engineering Escalation Policy",
            "num_loops": 2,
            "escalation_rules": [{
                "id": "PANZZEQ",
                "escalation_delay_in_minutes": 30,
                "targets": [{"id": "PEYSGVF", "type": "user_reference", "summary": "Earline Greenholt"}]
            }],
            "services": [{"id": "PIJ90N7", "type": "service_reference"}],
            "teams": []
        })
    }

    #[tokio::test]
    async fn list_joins_id_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/escalation_policies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "escalation_policies": [policy_json()]
            })))
            .mount(&server)
            .await;

        let policies = client(&server)
            .escalation_policies(&EscalationPolicyListParams {
                query: Some("Engineering".into()),
                team_ids: vec!["P1HE60B".into(), "P7XILUG".into()],
                include: vec!["services".into(), "teams".into()],
                ..EscalationPolicyListParams::default()
            })
            .await
            .unwrap();

        assert_eq!(policies[0].escalation_rules[0].escalation_delay_in_minutes, 30);
        assert_eq!(
            single_query(&server).await,
            vec![
                ("query".to_string(), "Engineering".to_string()),
                ("team_ids[]".to_string(), "P1HE60B,P7XILUG".to_string()),
                ("include[]".to_string(), "services".to_string()),
                ("include[]".to_string(), "teams".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn list_without_options_sends_no_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/escalation_policies"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"escalation_policies": []})),
            )
            .mount(&server)
            .await;

        let policies = client(&server)
            .escalation_policies(&EscalationPolicyListParams::default())
            .await
            .unwrap();
        assert!(policies.is_empty());

        let received = server.received_requests().await.unwrap();
        assert_eq!(received[0].url.query(), None);
    }

    #[tokio::test]
    async fn create_fills_defaults_and_from_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/escalation_policies"))
            .and(header("From", "ops@example.com"))
            .and(body_json(json!({"escalation_policy": {
                "type": "escalation_policy",
                "name": "Engineering Escalation Policy",
                "escalation_rules": [{
                    "escalation_delay_in_minutes": 30,
                    "targets": [{"id": "PEYSGVF", "type": "user_reference"}]
                }],
                "repeat_enabled": false,
                "services": [],
                "num_loops": 0,
                "teams": [{"id": "PQ9K7I8", "type": "team"}],
                "description": ""
            }})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"escalation_policy": policy_json()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let policy = client(&server)
            .create_escalation_policy(
                "Engineering Escalation Policy",
                &[EscalationRuleRequest::new(30, vec![TargetRef::user("PEYSGVF")])],
                &NewEscalationPolicy {
                    team_ids: vec!["PQ9K7I8".into()],
                    from_email_address: Some("ops@example.com".into()),
                    ..NewEscalationPolicy::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(policy.id, "PANZZEQ");
    }

    #[tokio::test]
    async fn update_always_sends_type() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/escalation_policies/PANZZEQ"))
            .and(body_json(json!({"escalation_policy": {
                "type": "escalation_policy",
                "num_loops": 3
            }})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"escalation_policy": policy_json()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .update_escalation_policy(
                "PANZZEQ",
                &EscalationPolicyUpdate {
                    num_loops: Some(3),
                    ..EscalationPolicyUpdate::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_policy() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/escalation_policies/PANZZEQ"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        assert!(client(&server)
            .delete_escalation_policy("PANZZEQ")
            .await
            .unwrap());
    }
}
