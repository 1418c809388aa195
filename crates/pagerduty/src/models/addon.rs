//! Add-on models.

use super::Reference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of add-on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AddonType {
    /// Embedded as a full page reachable from the navigation menu.
    FullPageAddon,
    /// Embedded on the incident details page.
    IncidentShowAddon,
}

impl AddonType {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullPageAddon => "full_page_addon",
            Self::IncidentShowAddon => "incident_show_addon",
        }
    }
}

impl fmt::Display for AddonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An add-on: an HTTPS page embedded in the PagerDuty UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Addon {
    /// Add-on ID.
    pub id: String,
    /// Add-on type.
    #[serde(rename = "type")]
    pub kind: AddonType,
    /// Display name.
    pub name: String,
    /// HTTPS URL loaded in the iframe.
    pub src: String,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// API URL.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Web UI URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Services the add-on is attached to (incident show add-ons only).
    #[serde(default)]
    pub services: Vec<Reference>,
}
