//! Maintenance windows.

use crate::models::{MaintenanceWindow, MaintenanceWindowFilter, TargetRef};
use crate::{PagerDutyClient, Result};
use chrono::{DateTime, Utc};
use pagerduty_core::query::QueryParams;
use pagerduty_core::Request;
use serde::Serialize;

/// Filters for [`PagerDutyClient::maintenance_windows`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceWindowListParams {
    /// Description filter.
    pub query: Option<String>,
    /// Teams (`team_ids[]=A,B`).
    pub team_ids: Vec<String>,
    /// Services (`service_ids[]=A,B`).
    pub service_ids: Vec<String>,
    /// Related objects to embed (`teams`, `services`, `users`).
    pub include: Vec<String>,
    /// Time filter.
    pub filter: Option<MaintenanceWindowFilter>,
}

impl MaintenanceWindowListParams {
    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("query", self.query.as_deref());
        params.push_joined("team_ids[]", &self.team_ids);
        params.push_joined("service_ids[]", &self.service_ids);
        params.push_each("include[]", &self.include);
        params.push_opt("filter", self.filter);
        params
    }
}

/// Window definition for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceWindowRequest {
    /// Start of the window.
    pub start_time: DateTime<Utc>,
    /// End of the window.
    pub end_time: DateTime<Utc>,
    /// Description.
    pub description: String,
    /// Services placed in maintenance.
    pub service_ids: Vec<String>,
}

impl MaintenanceWindowRequest {
    /// Window for a single service.
    #[must_use]
    pub fn new(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        description: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            description: description.into(),
            service_ids: vec![service_id.into()],
        }
    }
}

#[derive(Serialize)]
struct WindowPayload<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    start_time: String,
    end_time: String,
    description: &'a str,
    services: Vec<TargetRef>,
}

#[derive(Serialize)]
struct WindowBody<'a> {
    maintenance_window: WindowPayload<'a>,
}

impl<'a> From<&'a MaintenanceWindowRequest> for WindowBody<'a> {
    fn from(request: &'a MaintenanceWindowRequest) -> Self {
        Self {
            maintenance_window: WindowPayload {
                kind: "maintenance_window",
                start_time: super::iso8601(request.start_time),
                end_time: super::iso8601(request.end_time),
                description: &request.description,
                services: request
                    .service_ids
                    .iter()
                    .map(|id| TargetRef::service(id.as_str()))
                    .collect(),
            },
        }
    }
}

impl PagerDutyClient {
    /// List maintenance windows.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn maintenance_windows(
        &self,
        params: &MaintenanceWindowListParams,
    ) -> Result<Vec<MaintenanceWindow>> {
        let request = Request::get("/maintenance_windows").query(params.to_query());
        self.connection()
            .request_envelope(request, "maintenance_windows")
            .await
    }

    /// Fetch a maintenance window, optionally embedding related objects.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn maintenance_window(
        &self,
        id: &str,
        include: &[String],
    ) -> Result<MaintenanceWindow> {
        let mut params = QueryParams::new();
        params.push_each("include[]", include);
        let request = Request::get(format!("/maintenance_windows/{id}")).query(params);
        self.connection()
            .request_envelope(request, "maintenance_window")
            .await
    }

    /// Create a maintenance window on behalf of `from_email`.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn create_maintenance_window(
        &self,
        from_email: &str,
        window: &MaintenanceWindowRequest,
    ) -> Result<MaintenanceWindow> {
        let request = Request::post("/maintenance_windows")
            .header("From", from_email)
            .json(&WindowBody::from(window))?;
        self.connection()
            .request_envelope(request, "maintenance_window")
            .await
    }

    /// Replace a maintenance window's times, description and services.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn update_maintenance_window(
        &self,
        id: &str,
        window: &MaintenanceWindowRequest,
    ) -> Result<MaintenanceWindow> {
        let request = Request::put(format!("/maintenance_windows/{id}"))
            .json(&WindowBody::from(window))?;
        self.connection()
            .request_envelope(request, "maintenance_window")
            .await
    }

    /// Delete or end a maintenance window. `true` on `204`, `false` on `404`.
    ///
    /// # Errors
    ///
    /// Returns every request error except `404`.
    pub async fn delete_maintenance_window(&self, id: &str) -> Result<bool> {
        self.connection()
            .boolean_from_response(Request::delete(format!("/maintenance_windows/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{client, single_query};
    use chrono::TimeZone;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn window_json() -> Value {
        json!({
            "id": "PW98YIO",
            "type": "maintenance_window",
            "summary": "Immanentizing the eschaton",
            "sequence_number": 1,
            "start_time": "2015-11-09T20:00:00-05:00",
            "end_time": "2015-11-09T22:00:00-05:00",
            "description": "Immanentizing the eschaton",
            "services": [{"id": "PIJ90N7", "type": "service_reference"}],
            "teams": []
        })
    }

    fn request() -> MaintenanceWindowRequest {
        MaintenanceWindowRequest::new(
            Utc.with_ymd_and_hms(2015, 11, 10, 1, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2015, 11, 10, 3, 0, 0).unwrap(),
            "Immanentizing the eschaton",
            "PIJ90N7",
        )
    }

    fn expected_body() -> Value {
        json!({"maintenance_window": {
            "type": "maintenance_window",
            "start_time": "2015-11-10T01:00:00Z",
            "end_time": "2015-11-10T03:00:00Z",
            "description": "Immanentizing the eschaton",
            "services": [{"id": "PIJ90N7", "type": "service_reference"}]
        }})
    }

    #[tokio::test]
    async fn list_with_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/maintenance_windows"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"maintenance_windows": [window_json()]})),
            )
            .mount(&server)
            .await;

        let windows = client(&server)
            .maintenance_windows(&MaintenanceWindowListParams {
                service_ids: vec!["PIJ90N7".into(), "PXCT22H".into()],
                filter: Some(MaintenanceWindowFilter::Ongoing),
                ..MaintenanceWindowListParams::default()
            })
            .await
            .unwrap();

        assert_eq!(windows[0].sequence_number, Some(1));
        assert_eq!(
            single_query(&server).await,
            vec![
                ("service_ids[]".to_string(), "PIJ90N7,PXCT22H".to_string()),
                ("filter".to_string(), "ongoing".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn get_with_includes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/maintenance_windows/PW98YIO"))
            .and(query_param("include[]", "teams"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"maintenance_window": window_json()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let window = client(&server)
            .maintenance_window("PW98YIO", &["teams".to_string()])
            .await
            .unwrap();
        assert_eq!(window.services[0].id, "PIJ90N7");
    }

    #[tokio::test]
    async fn create_sends_from_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/maintenance_windows"))
            .and(header("From", "ops@example.com"))
            .and(body_json(expected_body()))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"maintenance_window": window_json()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let window = client(&server)
            .create_maintenance_window("ops@example.com", &request())
            .await
            .unwrap();
        assert_eq!(window.id, "PW98YIO");
    }

    #[tokio::test]
    async fn update_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/maintenance_windows/PW98YIO"))
            .and(body_json(expected_body()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"maintenance_window": window_json()})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/maintenance_windows/PW98YIO"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client(&server);
        client
            .update_maintenance_window("PW98YIO", &request())
            .await
            .unwrap();
        assert!(client.delete_maintenance_window("PW98YIO").await.unwrap());
    }
}
