//! Escalation policy models.

use super::Reference;
use serde::{Deserialize, Serialize};

/// An escalation policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EscalationPolicy {
    /// Policy ID.
    pub id: String,
    /// Object type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Policy name.
    #[serde(default)]
    pub name: String,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of times the policy repeats after the last rule.
    #[serde(default)]
    pub num_loops: u32,
    /// When on-call handoff notifications are sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_call_handoff_notifications: Option<String>,
    /// Ordered escalation rules.
    #[serde(default)]
    pub escalation_rules: Vec<EscalationRule>,
    /// Services using this policy.
    #[serde(default)]
    pub services: Vec<Reference>,
    /// Teams associated with this policy.
    #[serde(default)]
    pub teams: Vec<Reference>,
    /// API URL.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Web UI URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// One step of an escalation policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EscalationRule {
    /// Rule ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Minutes before escalating to the next rule.
    pub escalation_delay_in_minutes: u32,
    /// Users and schedules notified by this rule.
    #[serde(default)]
    pub targets: Vec<Reference>,
}
