//! Services.

use crate::models::{Service, TargetRef};
use crate::{PagerDutyClient, Result};
use pagerduty_core::query::QueryParams;
use pagerduty_core::Request;
use serde::Serialize;

/// Filters for [`PagerDutyClient::services`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceListParams {
    /// Name filter.
    pub query: Option<String>,
    /// Time zone for rendered timestamps.
    pub time_zone: Option<String>,
    /// Sort field, e.g. `name:asc`.
    pub sort_by: Option<String>,
    /// Teams (`team_ids[]=A,B`).
    pub team_ids: Vec<String>,
    /// Related objects to embed (`escalation_policies`, `teams`, `integrations`).
    pub include: Vec<String>,
}

impl ServiceListParams {
    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("query", self.query.as_deref());
        params.push_opt("time_zone", self.time_zone.as_deref());
        params.push_opt("sort_by", self.sort_by.as_deref());
        params.push_joined("team_ids[]", &self.team_ids);
        params.push_each("include[]", &self.include);
        params
    }
}

/// Service definition for [`PagerDutyClient::create_service`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewService {
    #[serde(rename = "type")]
    kind: &'static str,
    /// Service name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Escalation policy for new incidents.
    pub escalation_policy: TargetRef,
    /// Seconds before incidents auto-resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_resolve_timeout: Option<u64>,
    /// Seconds before acknowledged incidents re-trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgement_timeout: Option<u64>,
    /// Initial state (`active`, `disabled`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `create_incidents` or `create_alerts_and_incidents`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_creation: Option<String>,
}

impl NewService {
    /// Service with a name and escalation policy; everything else uses server defaults.
    #[must_use]
    pub fn new(name: impl Into<String>, escalation_policy_id: impl Into<String>) -> Self {
        Self {
            kind: "service",
            name: name.into(),
            description: None,
            escalation_policy: TargetRef::escalation_policy(escalation_policy_id),
            auto_resolve_timeout: None,
            acknowledgement_timeout: None,
            status: None,
            alert_creation: None,
        }
    }
}

#[derive(Serialize)]
struct ServiceBody<'a> {
    service: &'a NewService,
}

impl PagerDutyClient {
    /// List services.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn services(&self, params: &ServiceListParams) -> Result<Vec<Service>> {
        let request = Request::get("/services").query(params.to_query());
        self.connection().request_envelope(request, "services").await
    }

    /// Fetch a service.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn service(&self, id: &str) -> Result<Service> {
        self.connection()
            .request_envelope(Request::get(format!("/services/{id}")), "service")
            .await
    }

    /// Create a service.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn create_service(&self, service: &NewService) -> Result<Service> {
        let request = Request::post("/services").json(&ServiceBody { service })?;
        self.connection().request_envelope(request, "service").await
    }
}
