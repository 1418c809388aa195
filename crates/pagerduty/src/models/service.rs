//! Service model.

use super::{Reference, Timestamp};
use serde::{Deserialize, Serialize};

/// A service: something that raises incidents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    /// Service ID.
    pub id: String,
    /// Object type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Seconds before an incident auto-resolves, `None` to disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_resolve_timeout: Option<u64>,
    /// Seconds before an acknowledged incident re-triggers, `None` to disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgement_timeout: Option<u64>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Current state (`active`, `warning`, `critical`, `maintenance`, `disabled`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Time of the most recent incident.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_incident_timestamp: Option<Timestamp>,
    /// Escalation policy used for new incidents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_policy: Option<Reference>,
    /// Owning teams.
    #[serde(default)]
    pub teams: Vec<Reference>,
    /// Integrations attached to the service.
    #[serde(default)]
    pub integrations: Vec<Reference>,
    /// `create_incidents` or `create_alerts_and_incidents`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_creation: Option<String>,
    /// API URL.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Web UI URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}
