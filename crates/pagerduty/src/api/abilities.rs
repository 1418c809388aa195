//! Account abilities.

use crate::{PagerDutyClient, Result};
use pagerduty_core::Request;

impl PagerDutyClient {
    /// List the abilities enabled on the account.
    ///
    /// # Errors
    ///
    /// Returns the request error or [`Error::MissingField`](crate::Error::MissingField).
    pub async fn abilities(&self) -> Result<Vec<String>> {
        self.connection()
            .request_envelope(Request::get("/abilities"), "abilities")
            .await
    }

    /// Test whether the account has an ability (`204` yes, `402`/`404` no).
    ///
    /// A `404` is reported as `false`; a missing ability (`402`) is an
    /// [`ErrorKind::AbilityMissing`](crate::ErrorKind::AbilityMissing) error.
    ///
    /// # Errors
    ///
    /// Returns every request error except `404`.
    pub async fn has_ability(&self, ability: &str) -> Result<bool> {
        self.connection()
            .boolean_from_response(Request::get(format!("/abilities/{ability}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::client;
    use crate::ErrorKind;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn abilities_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abilities"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"abilities": ["sso", "teams"]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let abilities = client(&server).abilities().await.unwrap();
        assert_eq!(abilities, vec!["sso", "teams"]);
    }

    #[tokio::test]
    async fn abilities_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abilities"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Authentication required", "code": 2006}
            })))
            .mount(&server)
            .await;

        let err = client(&server).abilities().await.unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Unauthorized));
        let message = err.to_string();
        assert!(message.contains("GET"));
        assert!(message.contains("/abilities"));
    }

    #[tokio::test]
    async fn abilities_missing_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abilities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = client(&server).abilities().await.unwrap_err();
        assert_eq!(err, crate::Error::MissingField("abilities".to_string()));
    }

    #[tokio::test]
    async fn has_ability_by_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abilities/sso"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/abilities/teams"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/abilities/urgencies"))
            .respond_with(ResponseTemplate::new(402).set_body_json(json!({
                "error": {"message": "Account does not have the abilities to perform the action", "code": 2012}
            })))
            .mount(&server)
            .await;

        let client = client(&server);
        assert!(client.has_ability("sso").await.unwrap());
        assert!(!client.has_ability("teams").await.unwrap());
        let err = client.has_ability("urgencies").await.unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::AbilityMissing));
    }
}
