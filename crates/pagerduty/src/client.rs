//! Client façade over the shared connection.

use crate::Result;
use pagerduty_core::config::{Config, ConnectionOptions};
use pagerduty_core::http::HttpConfig;
use pagerduty_core::{Connection, LastResponse};
use serde_json::Value;
use tracing::debug;

/// Builder for [`PagerDutyClient`].
#[derive(Debug, Clone)]
pub struct PagerDutyClientBuilder {
    config: Config,
}

impl PagerDutyClientBuilder {
    /// Start from the environment-derived defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    /// Start from an explicit configuration.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the API token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.with_api_token(token);
        self
    }

    /// Override the API endpoint.
    #[must_use]
    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config = self.config.with_api_endpoint(endpoint);
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    /// Override the media type sent in `Accept`.
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.config = self.config.with_media_type(media_type);
        self
    }

    /// Override the HTTP transport configuration.
    #[must_use]
    pub fn with_http_config(mut self, http: HttpConfig) -> Self {
        self.config = self.config.with_middleware(http);
        self
    }

    /// Add default headers or a proxy.
    #[must_use]
    pub fn with_connection_options(mut self, options: ConnectionOptions) -> Self {
        self.config = self.config.with_connection_options(options);
        self
    }

    /// Build the client. Configuration problems surface on the first request.
    #[must_use]
    pub fn build(self) -> PagerDutyClient {
        PagerDutyClient::new(self.config)
    }
}

impl Default for PagerDutyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Asynchronous PagerDuty client.
///
/// Resource methods live in the [`api`](crate::api) modules, one `impl`
/// block per resource family.
#[derive(Debug)]
pub struct PagerDutyClient {
    connection: Connection,
}

impl PagerDutyClient {
    /// Create a client from an explicit configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            connection: Connection::new(config),
        }
    }

    /// Create a client configured from `PAGERDUTY_API_TOKEN` and `PAGERDUTY_API_ENDPOINT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Config::new())
    }

    /// Create a client with an explicit token and default settings.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(Config::with_token(token))
    }

    /// Start building a client.
    #[must_use]
    pub fn builder() -> PagerDutyClientBuilder {
        PagerDutyClientBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        self.connection.config()
    }

    /// Replace the API token. The next request is sent with the new token.
    pub fn set_api_token(&mut self, token: impl Into<String>) {
        self.connection.set_api_token(token);
        debug!("PagerDuty API token replaced");
    }

    /// Change configuration in place. The transport is rebuilt on next use.
    pub fn configure(&mut self, f: impl FnOnce(&mut Config)) {
        self.connection.configure(f);
        debug!(endpoint = %self.config().api_endpoint, "PagerDuty client reconfigured");
    }

    /// Status and headers of the most recent response.
    #[must_use]
    pub fn last_response(&self) -> Option<LastResponse> {
        self.connection.last_response()
    }

    /// Underlying connection, for endpoints without a typed wrapper.
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Fetch the API root.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn root(&self) -> Result<Value> {
        self.connection.root().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn builder_applies_settings() {
        let client = PagerDutyClient::builder()
            .with_token("abc")
            .with_api_endpoint("http://localhost:1234")
            .with_user_agent("ops-bot")
            .with_media_type("application/json")
            .with_http_config(HttpConfig::new().with_timeout(Duration::from_secs(3)))
            .with_connection_options(ConnectionOptions::default().with_proxy("http://proxy:3128"))
            .build();

        let config = client.config();
        assert!(config.has_token());
        assert_eq!(config.api_endpoint, "http://localhost:1234");
        assert_eq!(config.user_agent, "ops-bot");
        assert_eq!(config.default_media_type, "application/json");
        assert_eq!(config.middleware.timeout, Duration::from_secs(3));
        assert_eq!(
            config.connection_options.proxy.as_deref(),
            Some("http://proxy:3128")
        );
        assert!(client.last_response().is_none());
    }

    #[tokio::test]
    async fn set_api_token_applies_to_next_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("Authorization", "Token token=old"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"v": 1})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("Authorization", "Token token=new"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"v": 2})))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = PagerDutyClient::new(
            Config::default()
                .with_api_endpoint(server.uri())
                .with_api_token("old"),
        );
        assert_eq!(client.root().await.unwrap()["v"], 1);

        client.set_api_token("new");
        assert_eq!(client.root().await.unwrap()["v"], 2);
        assert_eq!(client.last_response().unwrap().status.as_u16(), 200);
    }
}
