//! Log entry model.

use super::{Reference, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record of something that happened to an incident.
///
/// The `type` distinguishes the event (`trigger_log_entry`,
/// `acknowledge_log_entry`, `notify_log_entry`, ...). Event-specific fields
/// such as `channel` and `contexts` are left as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Log entry ID.
    pub id: String,
    /// Log entry type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// When the event happened.
    pub created_at: Timestamp,
    /// Who or what caused the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Reference>,
    /// Channel through which the event arrived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Value>,
    /// Incident the entry belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident: Option<Reference>,
    /// Service of that incident.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Reference>,
    /// Teams involved.
    #[serde(default)]
    pub teams: Vec<Reference>,
    /// Additional links and images.
    #[serde(default)]
    pub contexts: Vec<Value>,
    /// Notified user for `notify_log_entry` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Reference>,
    /// API URL.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Web UI URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}
