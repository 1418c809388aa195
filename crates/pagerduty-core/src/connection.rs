//! Request pipeline shared by every resource call.
//!
//! The [`Connection`] owns the configuration and a lazily built
//! [`reqwest::Client`] (the transport handle). The handle carries the
//! authorization, media type and user-agent headers, so any change to the
//! token drops it and the next request builds a fresh one.

use crate::config::Config;
use crate::error::{ApiError, Error, ResponseParts, Result};
use crate::query::QueryParams;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE,
};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use secrecy::SecretString;
use serde_json::Value;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::{debug, info, warn};
use url::Url;

/// A single API request: method, path, query, headers and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
}

impl Request {
    /// Create a request for the given method and path.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `GET` request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST` request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT` request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `PATCH` request.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// `DELETE` request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Merge query parameters into the request.
    #[must_use]
    pub fn query(mut self, params: QueryParams) -> Self {
        self.query.extend(
            params
                .into_pairs()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value)),
        );
        self
    }

    /// Add a single query parameter.
    #[must_use]
    pub fn query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a request header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Override the `Accept` header for this request only.
    #[must_use]
    pub fn accept(self, media_type: impl Into<String>) -> Self {
        self.header(ACCEPT.as_str(), media_type)
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize and attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn json<B>(self, body: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        Ok(self.body(serde_json::to_value(body)?))
    }

    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unescaped request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in insertion order.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Extra headers in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// JSON body, if any.
    #[must_use]
    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Summary of the most recent HTTP response.
#[derive(Debug, Clone)]
pub struct LastResponse {
    /// Request method.
    pub method: Method,
    /// Final request URL.
    pub url: String,
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
}

/// Connection to the PagerDuty REST API.
#[derive(Debug)]
pub struct Connection {
    config: Config,
    agent: OnceLock<Client>,
    last_response: Mutex<Option<LastResponse>>,
}

impl Connection {
    /// Create a connection. The transport handle is built on first use.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            agent: OnceLock::new(),
            last_response: Mutex::new(None),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the API token and drop the cached transport handle.
    pub fn set_api_token(&mut self, api_token: impl Into<String>) {
        let api_token: String = api_token.into();
        self.configure(|config| config.api_token = Some(SecretString::from(api_token)));
    }

    /// Remove the API token and drop the cached transport handle.
    pub fn clear_api_token(&mut self) {
        self.configure(|config| config.api_token = None);
    }

    /// Mutate the configuration; the transport handle is rebuilt on next use.
    pub fn configure(&mut self, f: impl FnOnce(&mut Config)) {
        f(&mut self.config);
        self.reset_agent();
    }

    /// True once a transport handle has been built and not since invalidated.
    #[must_use]
    pub fn has_agent(&self) -> bool {
        self.agent.get().is_some()
    }

    fn reset_agent(&mut self) {
        self.agent = OnceLock::new();
    }

    fn agent(&self) -> Result<&Client> {
        if let Some(agent) = self.agent.get() {
            return Ok(agent);
        }
        let agent = build_agent(&self.config)?;
        Ok(self.agent.get_or_init(|| agent))
    }

    /// Response for the last HTTP request, successful or not.
    #[must_use]
    pub fn last_response(&self) -> Option<LastResponse> {
        self.last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, response: LastResponse) {
        *self
            .last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(response);
    }

    /// Resolve a request path against the configured endpoint.
    ///
    /// Each `/`-separated segment is percent-encoded and appended to the
    /// endpoint's own path. Only the leading `/` is stripped; an empty, `.`
    /// or `..` segment is rejected rather than collapsed into another path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] when the endpoint is not a valid base
    /// URL or the path contains an empty or dot segment.
    pub fn build_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let segments = path_segments(path)?;
        let endpoint = &self.config.api_endpoint;
        let mut url = Url::parse(endpoint).map_err(|err| {
            Error::InvalidEndpoint(format!("Invalid PagerDuty endpoint `{endpoint}`: {err}"))
        })?;

        url.path_segments_mut()
            .map_err(|()| {
                Error::InvalidEndpoint(format!(
                    "PagerDuty endpoint `{endpoint}` cannot be used as a base URL"
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Issue a request and return the decoded body.
    ///
    /// An empty body decodes to [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for 4xx/5xx responses, or a transport/parse error.
    pub async fn request(&self, request: Request) -> Result<Value> {
        let path = request.path.clone();
        let (_, text) = self.execute(request).await?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|err| {
            Error::ParseError(format!(
                "Failed to parse PagerDuty response for `{path}`: {err}"
            ))
        })
    }

    /// Issue a request and deserialize the named key of the response envelope.
    ///
    /// # Errors
    ///
    /// Returns the request error, [`Error::MissingField`] when the key is
    /// absent, or [`Error::ParseError`] when it does not match `T`.
    pub async fn request_envelope<T>(&self, request: Request, key: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let data = self.request(request).await?;
        unwrap_envelope(data, key)
    }

    /// Issue a request and report whether it answered `204 No Content`.
    ///
    /// Only the status is inspected; the body is ignored. A 404 is reported
    /// as `false` rather than an error.
    ///
    /// # Errors
    ///
    /// Propagates every error other than a 404.
    pub async fn boolean_from_response(&self, request: Request) -> Result<bool> {
        match self.execute(request).await {
            Ok((status, _)) => Ok(status == StatusCode::NO_CONTENT),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Fetch the root resource for the API.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn root(&self) -> Result<Value> {
        self.request(Request::get("/")).await
    }

    /// Send the request and classify the status. Returns the raw body text.
    async fn execute(&self, request: Request) -> Result<(StatusCode, String)> {
        let logging = self.config.middleware.enable_logging;
        let agent = self.agent()?;
        let url = self.build_url(&request.path, &request.query)?;

        if logging {
            info!(method = %request.method, path = %request.path, query = ?request.query, "PagerDuty request");
        }

        let mut builder = agent.request(request.method.clone(), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let final_url = response.url().to_string();
        let text = response.text().await?;

        self.record(LastResponse {
            method: request.method.clone(),
            url: final_url.clone(),
            status,
            headers: headers.clone(),
        });

        let parts = ResponseParts {
            method: request.method.as_str(),
            url: &final_url,
            status: status.as_u16(),
            content_type: headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            body: &text,
        };
        if let Some(err) = ApiError::from_response(&parts) {
            if logging {
                warn!(status = status.as_u16(), kind = %err.kind(), path = %request.path, "PagerDuty request failed");
            }
            return Err(err.into());
        }

        if logging {
            debug!(status = status.as_u16(), path = %request.path, "PagerDuty response");
        }

        Ok((status, text))
    }
}

fn path_segments(path: &str) -> Result<Vec<&str>> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split('/')
        .map(|segment| match segment {
            "" | "." | ".." => Err(Error::InvalidEndpoint(format!(
                "Request path `{path}` contains an empty or dot segment"
            ))),
            segment => Ok(segment),
        })
        .collect()
}

/// Take the named key out of a response envelope and deserialize it.
///
/// # Errors
///
/// Returns [`Error::MissingField`] when the key is absent or `null`, and
/// [`Error::ParseError`] when the value does not match `T`.
pub fn unwrap_envelope<T>(mut data: Value, key: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = data
        .get_mut(key)
        .map(Value::take)
        .filter(|value| !value.is_null())
        .ok_or_else(|| Error::MissingField(key.to_string()))?;

    serde_json::from_value(value)
        .map_err(|err| Error::ParseError(format!("Failed to parse `{key}`: {err}")))
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|err| Error::ConfigError(format!("Invalid header value: {err}")))
}

fn build_agent(config: &Config) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, header_value(&config.default_media_type)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(authorization) = config.authorization() {
        let mut value = header_value(&authorization)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    for (name, value) in &config.connection_options.headers {
        let header = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| Error::ConfigError(format!("Invalid header name `{name}`: {err}")))?;
        headers.insert(header, header_value(value)?);
    }

    let http = &config.middleware;
    let mut builder = ClientBuilder::new()
        .default_headers(headers)
        .user_agent(config.user_agent.as_str())
        .timeout(http.timeout)
        .connect_timeout(http.connect_timeout)
        .pool_idle_timeout(http.pool_idle_timeout)
        .pool_max_idle_per_host(http.pool_max_idle_per_host);

    if !http.enable_compression {
        builder = builder.no_gzip();
    }

    if let Some(proxy_url) = &config.connection_options.proxy {
        let proxy = reqwest::Proxy::all(proxy_url.as_str())
            .map_err(|err| Error::ConfigError(format!("Invalid proxy `{proxy_url}`: {err}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|err| Error::ConfigError(format!("Failed to build PagerDuty HTTP client: {err}")))
}
