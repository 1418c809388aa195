//! Incident, alert and note models.

use super::{Reference, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Incident status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    /// Triggered and not yet acknowledged.
    Triggered,
    /// Acknowledged by a responder.
    Acknowledged,
    /// Resolved.
    Resolved,
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Triggered => "triggered",
            Self::Acknowledged => "acknowledged",
            Self::Resolved => "resolved",
        })
    }
}

/// Incident urgency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// High urgency.
    High,
    /// Low urgency.
    Low,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Low => "low",
        })
    }
}

/// Alert status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Still open.
    Triggered,
    /// Resolved.
    Resolved,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Triggered => "triggered",
            Self::Resolved => "resolved",
        })
    }
}

/// An incident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    /// Incident ID.
    pub id: String,
    /// Object type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Account-wide incident number.
    pub incident_number: u64,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Current status.
    pub status: IncidentStatus,
    /// Urgency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    /// De-duplication key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_key: Option<String>,
    /// Service the incident belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Reference>,
    /// Current assignments.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// Acknowledgements.
    #[serde(default)]
    pub acknowledgements: Vec<Acknowledgement>,
    /// Last status change time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status_change_at: Option<Timestamp>,
    /// Who or what last changed the status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status_change_by: Option<Reference>,
    /// First trigger log entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_trigger_log_entry: Option<Reference>,
    /// Escalation policy in effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy: Option<Reference>,
    /// Teams involved.
    #[serde(default)]
    pub teams: Vec<Reference>,
    /// Priority, when priorities are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Reference>,
    /// API URL.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Web UI URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// Assignment of an incident to a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    /// When the assignment was made.
    pub at: Timestamp,
    /// Assigned user.
    pub assignee: Reference,
}

/// Acknowledgement of an incident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Acknowledgement {
    /// When the acknowledgement happened.
    pub at: Timestamp,
    /// Acknowledging user or integration.
    pub acknowledger: Reference,
}

/// An alert grouped under an incident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// Alert ID.
    pub id: String,
    /// Object type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Status.
    pub status: AlertStatus,
    /// De-duplication key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_key: Option<String>,
    /// Originating service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Reference>,
    /// Parent incident.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident: Option<Reference>,
    /// Whether the alert is suppressed.
    #[serde(default)]
    pub suppressed: bool,
    /// Severity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// Raw alert body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// API URL.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Web UI URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// A note left on an incident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncidentNote {
    /// Note ID.
    pub id: String,
    /// Author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Reference>,
    /// Note text.
    pub content: String,
    /// Creation time.
    pub created_at: Timestamp,
}
