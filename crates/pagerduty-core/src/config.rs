//! Configuration structures for PagerDuty clients.
//!
//! A [`Config`] is an explicit value handed to the client constructor. Its
//! defaults come from the environment (`PAGERDUTY_API_TOKEN`,
//! `PAGERDUTY_API_ENDPOINT`) and fixed constants. No validation is performed
//! here; a malformed endpoint is reported when the first request is built.

use crate::http::HttpConfig;
use secrecy::{ExposeSecret, SecretString};

/// Default API endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://api.pagerduty.com";

/// Default media type sent in the `Accept` header
pub const DEFAULT_MEDIA_TYPE: &str = "application/vnd.pagerduty+json;version=2";

/// Default `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!("PagerDuty Rust Client ", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the API token
pub const API_TOKEN_ENV: &str = "PAGERDUTY_API_TOKEN";

/// Environment variable overriding the API endpoint
pub const API_ENDPOINT_ENV: &str = "PAGERDUTY_API_ENDPOINT";

/// Extra settings applied to every connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// Additional default headers sent with every request.
    pub headers: Vec<(String, String)>,

    /// Optional proxy URL for all traffic.
    pub proxy: Option<String>,
}

impl ConnectionOptions {
    /// Add a default header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Route all traffic through a proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

/// Configuration for a PagerDuty client instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// API token used for `Authorization: Token token=...`
    pub api_token: Option<SecretString>,

    /// Base URL of the REST API
    pub api_endpoint: String,

    /// Media type sent in the `Accept` header
    pub default_media_type: String,

    /// `User-Agent` header
    pub user_agent: String,

    /// Transport tuning applied when the HTTP handle is built
    pub middleware: HttpConfig,

    /// Extra headers and proxy settings
    pub connection_options: ConnectionOptions,
}

impl Config {
    /// Create a configuration from the environment and built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration with an explicit token and default everything else.
    #[must_use]
    pub fn with_token(api_token: impl Into<String>) -> Self {
        Self::new().with_api_token(api_token)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_token: lookup(API_TOKEN_ENV).map(SecretString::from),
            api_endpoint: lookup(API_ENDPOINT_ENV)
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            default_media_type: DEFAULT_MEDIA_TYPE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            middleware: HttpConfig::default(),
            connection_options: ConnectionOptions::default(),
        }
    }

    /// Reset every option to its environment-derived or built-in default.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Mutate several options at once.
    ///
    /// ```
    /// use pagerduty_core::config::Config;
    ///
    /// let config = Config::new().configure(|c| {
    ///     c.api_endpoint = "https://api.eu.pagerduty.com".to_string();
    ///     c.user_agent = "ops-bot/1.0".to_string();
    /// });
    /// assert_eq!(config.user_agent, "ops-bot/1.0");
    /// ```
    #[must_use]
    pub fn configure(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }

    /// Set the API token.
    #[must_use]
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        let api_token: String = api_token.into();
        self.api_token = Some(SecretString::from(api_token));
        self
    }

    /// Set the API endpoint.
    #[must_use]
    pub fn with_api_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = api_endpoint.into();
        self
    }

    /// Set the default media type.
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.default_media_type = media_type.into();
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the transport tuning.
    #[must_use]
    pub fn with_middleware(mut self, middleware: HttpConfig) -> Self {
        self.middleware = middleware;
        self
    }

    /// Set extra connection options.
    #[must_use]
    pub fn with_connection_options(mut self, options: ConnectionOptions) -> Self {
        self.connection_options = options;
        self
    }

    /// Whether a token is configured.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.api_token.is_some()
    }

    pub(crate) fn authorization(&self) -> Option<String> {
        self.api_token
            .as_ref()
            .map(|token| format!("Token token={}", token.expose_secret()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
