//! Shared PagerDuty object shapes.
//!
//! Most API objects embed references to other objects (`{"id", "type",
//! "summary", "self", "html_url"}`). [`Reference`] models those, and
//! [`TargetRef`] is the minimal `{id, type}` pair accepted in request bodies.

use serde::{Deserialize, Serialize};

/// Reference to another PagerDuty object as returned in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Reference {
    /// Object ID.
    pub id: String,
    /// Object type, such as `user_reference`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Short human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// API URL of the object.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Web UI URL of the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// Minimal `{id, type}` reference sent in request bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetRef {
    /// Object ID.
    pub id: String,
    /// Object type.
    #[serde(rename = "type")]
    pub kind: String,
}

impl TargetRef {
    /// Create a reference with an explicit type.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }

    /// `user_reference`
    #[must_use]
    pub fn user(id: impl Into<String>) -> Self {
        Self::new(id, "user_reference")
    }

    /// `schedule_reference`
    #[must_use]
    pub fn schedule(id: impl Into<String>) -> Self {
        Self::new(id, "schedule_reference")
    }

    /// `service_reference`
    #[must_use]
    pub fn service(id: impl Into<String>) -> Self {
        Self::new(id, "service_reference")
    }

    /// `team_reference`
    #[must_use]
    pub fn team(id: impl Into<String>) -> Self {
        Self::new(id, "team_reference")
    }

    /// `escalation_policy_reference`
    #[must_use]
    pub fn escalation_policy(id: impl Into<String>) -> Self {
        Self::new(id, "escalation_policy_reference")
    }
}
