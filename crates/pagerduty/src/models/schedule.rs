//! Schedule models.

use super::{Reference, Timestamp};
use serde::{Deserialize, Serialize};

/// An on-call schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    /// Schedule ID.
    pub id: String,
    /// Object type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Schedule name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// IANA time zone of the schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Escalation policies that use this schedule.
    #[serde(default)]
    pub escalation_policies: Vec<Reference>,
    /// Users on this schedule.
    #[serde(default)]
    pub users: Vec<Reference>,
    /// Teams the schedule belongs to.
    #[serde(default)]
    pub teams: Vec<Reference>,
    /// Layers, from lowest to highest priority.
    #[serde(default)]
    pub schedule_layers: Vec<ScheduleLayer>,
    /// Rendered result of every layer and override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_schedule: Option<SubSchedule>,
    /// Rendered overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides_subschedule: Option<SubSchedule>,
    /// API URL.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Web UI URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// One rotation layer of a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleLayer {
    /// Layer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Layer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the layer takes effect.
    pub start: Timestamp,
    /// When the layer stops, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Timestamp>,
    /// Effective start of the rotation.
    pub rotation_virtual_start: Timestamp,
    /// Length of each turn in seconds.
    pub rotation_turn_length_seconds: u64,
    /// Users in rotation order.
    #[serde(default)]
    pub users: Vec<ScheduleLayerUser>,
    /// Restrictions on when the layer is active.
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
    /// Rendered entries for the requested window.
    #[serde(default)]
    pub rendered_schedule_entries: Vec<RenderedScheduleEntry>,
    /// Percentage of the window covered by this layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_coverage_percentage: Option<f64>,
}

/// User wrapper inside a schedule layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleLayerUser {
    /// The user.
    pub user: Reference,
}

/// Time restriction for a schedule layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restriction {
    /// `daily_restriction` or `weekly_restriction`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Start time in `HH:MM:SS`.
    pub start_time_of_day: String,
    /// Duration in seconds.
    pub duration_seconds: u64,
    /// ISO day of week (1 is Monday) for weekly restrictions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_day_of_week: Option<u8>,
}

/// A rendered view of a schedule or its overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubSchedule {
    /// `Final Schedule` or `Overrides`.
    pub name: String,
    /// Rendered entries.
    #[serde(default)]
    pub rendered_schedule_entries: Vec<RenderedScheduleEntry>,
    /// Coverage percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_coverage_percentage: Option<f64>,
}

/// A single on-call span in a rendered schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedScheduleEntry {
    /// Start of the span.
    pub start: Timestamp,
    /// End of the span.
    pub end: Timestamp,
    /// User on call.
    pub user: Reference,
}

/// An override replacing the on-call user for a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleOverride {
    /// Override ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Start of the override.
    pub start: Timestamp,
    /// End of the override.
    pub end: Timestamp,
    /// User on call during the override.
    pub user: Reference,
}
