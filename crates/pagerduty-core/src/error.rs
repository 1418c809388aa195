//! Error types for PagerDuty operations.
//!
//! This module provides the error hierarchy returned by every client call,
//! including the HTTP status code classification and the diagnostic message
//! assembled from PagerDuty's error bodies.

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Query parameters whose values are never echoed back in error messages.
const REDACTED_PARAMS: [&str; 2] = ["client_secret", "access_token"];

/// Main error type for PagerDuty operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API answered with a 4xx or 5xx status
    #[error("{0}")]
    Api(Box<ApiError>),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Could not connect to the API endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Response body could not be decoded
    #[error("Failed to parse PagerDuty response: {0}")]
    ParseError(String),

    /// Successful response whose envelope lacks the expected key
    #[error("Response envelope is missing `{0}`")]
    MissingField(String),

    /// Endpoint URL or request path could not be turned into a URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration could not be applied to the transport
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Specialized result type for PagerDuty operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of an error response by HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 402: the account lacks an ability required by the request.
    AbilityMissing,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 406
    NotAcceptable,
    /// 409
    Conflict,
    /// 415
    UnsupportedMediaType,
    /// 422, and also 429 (see [`ErrorKind::from_status`])
    UnprocessableEntity,
    /// Any other status in the 400-499 range
    ClientError,
    /// 500
    InternalServerError,
    /// 501
    NotImplemented,
    /// 502
    BadGateway,
    /// 503
    ServiceUnavailable,
    /// Any other status in the 500-599 range
    ServerError,
}

impl ErrorKind {
    /// Classify an HTTP status code.
    ///
    /// Returns `None` for statuses below 400 and above 599. Status 429 is
    /// classified as [`ErrorKind::UnprocessableEntity`], matching the
    /// long-standing behaviour of PagerDuty client libraries.
    #[must_use]
    pub const fn from_status(status: u16) -> Option<Self> {
        let kind = match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            402 => Self::AbilityMissing,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            406 => Self::NotAcceptable,
            409 => Self::Conflict,
            415 => Self::UnsupportedMediaType,
            422 | 429 => Self::UnprocessableEntity,
            400..=499 => Self::ClientError,
            500 => Self::InternalServerError,
            501 => Self::NotImplemented,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            500..=599 => Self::ServerError,
            _ => return None,
        };
        Some(kind)
    }

    /// True for kinds caused by the caller (4xx).
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        !self.is_server_error()
    }

    /// True for kinds caused by the service (5xx).
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        matches!(
            self,
            Self::InternalServerError
                | Self::NotImplemented
                | Self::BadGateway
                | Self::ServiceUnavailable
                | Self::ServerError
        )
    }

    /// Stable machine-readable code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::AbilityMissing => "ABILITY_MISSING",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::NotAcceptable => "NOT_ACCEPTABLE",
            Self::Conflict => "CONFLICT",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            Self::ClientError => "CLIENT_ERROR",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::BadGateway => "BAD_GATEWAY",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::ServerError => "SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The pieces of an HTTP response needed to classify it.
#[derive(Debug, Clone, Copy)]
pub struct ResponseParts<'a> {
    /// Request method (any case).
    pub method: &'a str,
    /// Full request URL including query string.
    pub url: &'a str,
    /// Response status code.
    pub status: u16,
    /// Value of the `Content-Type` response header, if any.
    pub content_type: Option<&'a str>,
    /// Raw response body.
    pub body: &'a str,
}

/// An error response returned by the PagerDuty API.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    status: u16,
    method: String,
    url: String,
    message: String,
    documentation_url: Option<String>,
    validation_errors: Vec<Map<String, Value>>,
}

impl ApiError {
    /// Build an error from a response, or `None` when the status is not an error.
    #[must_use]
    pub fn from_response(parts: &ResponseParts<'_>) -> Option<Self> {
        let kind = ErrorKind::from_status(parts.status)?;
        let body = ErrorBody::decode(parts.content_type, parts.body);
        let method = parts.method.to_uppercase();
        let url = redact_url(parts.url);
        let documentation_url = body.documentation_url();

        let mut message = format!("{method} {url}: {} - ", parts.status);
        if let Some(text) = body.message() {
            message.push_str(&text);
        }
        if let Some(error) = body.error() {
            message.push_str("Error: ");
            message.push_str(&error);
        }
        if let Some(summary) = body.summary() {
            message.push_str(&summary);
        }
        if let Some(doc) = &documentation_url {
            message.push_str(" // See: ");
            message.push_str(doc);
        }

        Some(Self {
            kind,
            status: parts.status,
            method,
            url,
            message,
            documentation_url,
            validation_errors: body.validation_errors(),
        })
    }

    /// Status classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Upper-cased request method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request URL with sensitive query values redacted.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Full diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Documentation link supplied by the API, if any.
    #[must_use]
    pub fn documentation_url(&self) -> Option<&str> {
        self.documentation_url.as_deref()
    }

    /// Structured validation errors from the body's `errors` list.
    #[must_use]
    pub fn validation_errors(&self) -> &[Map<String, Value>] {
        &self.validation_errors
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(Box::new(err))
    }
}

enum ErrorBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ErrorBody {
    fn decode(content_type: Option<&str>, body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::Empty;
        }
        if content_type.is_some_and(|ct| ct.contains("json")) {
            if let Ok(value) = serde_json::from_str(body) {
                return Self::Json(value);
            }
        }
        Self::Text(body.to_string())
    }

    fn object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Json(Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    fn message(&self) -> Option<String> {
        match self {
            Self::Json(Value::Object(map)) => map.get("message").map(render_value),
            Self::Json(Value::String(text)) => Some(text.clone()),
            Self::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    fn error(&self) -> Option<String> {
        match self.object()?.get("error")? {
            Value::Null => None,
            Value::Object(error) => {
                let mut text = error.get("message").map(render_value).unwrap_or_default();
                if let Some(code) = error.get("code") {
                    text.push_str(&format!(" (code {})", render_value(code)));
                }
                Some(text)
            }
            other => Some(render_value(other)),
        }
    }

    fn summary(&self) -> Option<String> {
        let map = self.object()?;
        let mut lines = Vec::new();

        if let Some(Value::Array(errors)) = map.get("errors") {
            for entry in errors {
                match entry {
                    Value::Object(fields) => lines.extend(
                        fields
                            .iter()
                            .map(|(key, value)| format!("  {key}: {}", render_value(value))),
                    ),
                    other => lines.push(format!("  {}", render_value(other))),
                }
            }
        }
        // PagerDuty v2 nests human-readable validation messages under `error.errors`.
        if let Some(Value::Array(errors)) = map.get("error").and_then(|e| e.get("errors")) {
            lines.extend(errors.iter().map(|e| format!("  {}", render_value(e))));
        }

        if lines.is_empty() {
            None
        } else {
            Some(format!("\nError summary:\n{}", lines.join("\n")))
        }
    }

    fn documentation_url(&self) -> Option<String> {
        self.object()?
            .get("documentation_url")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn validation_errors(&self) -> Vec<Map<String, Value>> {
        match self.object().and_then(|map| map.get("errors")) {
            Some(Value::Array(errors)) => errors
                .iter()
                .filter_map(|e| e.as_object().cloned())
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Replace the values of sensitive query parameters with `(redacted)`.
#[must_use]
pub fn redact_url(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if REDACTED_PARAMS.contains(&key) => format!("{key}=(redacted)"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{base}?{query}")
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Api(err) => err.kind().code(),
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ConnectionFailed(_) => "CONNECTION_FAILED",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// Status classification when the error came from an API response.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.as_api().map(ApiError::kind)
    }

    /// HTTP status when the error came from an API response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.as_api().map(ApiError::status)
    }

    /// Borrow the API error details, if any.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// True when the API answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else if err.is_builder() {
            Self::ConfigError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
