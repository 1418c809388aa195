//! Maintenance window model.

use super::{Reference, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which maintenance windows to list, relative to now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceWindowFilter {
    /// Already ended.
    Past,
    /// Not yet started.
    Future,
    /// In progress.
    Ongoing,
    /// In progress or not yet started.
    Open,
    /// Every window.
    All,
}

impl fmt::Display for MaintenanceWindowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Past => "past",
            Self::Future => "future",
            Self::Ongoing => "ongoing",
            Self::Open => "open",
            Self::All => "all",
        })
    }
}

/// A period during which services raise no incidents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceWindow {
    /// Window ID.
    pub id: String,
    /// Object type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Account-wide sequence number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u64>,
    /// Start of the window.
    pub start_time: Timestamp,
    /// End of the window.
    pub end_time: Timestamp,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User who created the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Reference>,
    /// Affected services.
    #[serde(default)]
    pub services: Vec<Reference>,
    /// Teams the window belongs to.
    #[serde(default)]
    pub teams: Vec<Reference>,
    /// API URL.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Web UI URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}
