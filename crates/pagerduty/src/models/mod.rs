//! Response and request types for each PagerDuty resource family.

pub mod addon;
pub mod escalation_policy;
pub mod incident;
pub mod log_entry;
pub mod maintenance_window;
pub mod notification;
pub mod on_call;
pub mod schedule;
pub mod service;
pub mod user;
pub mod vendor;

pub use addon::{Addon, AddonType};
pub use escalation_policy::{EscalationPolicy, EscalationRule};
pub use incident::{Acknowledgement, Alert, AlertStatus, Assignment, Incident, IncidentNote, IncidentStatus, Urgency};
pub use log_entry::LogEntry;
pub use maintenance_window::{MaintenanceWindow, MaintenanceWindowFilter};
pub use notification::{Notification, NotificationType};
pub use on_call::OnCall;
pub use schedule::{
    RenderedScheduleEntry, Restriction, Schedule, ScheduleLayer, ScheduleLayerUser,
    ScheduleOverride, SubSchedule,
};
pub use service::Service;
pub use user::User;
pub use vendor::Vendor;

pub use pagerduty_core::types::{Reference, TargetRef};

/// Timestamp as rendered by the API (offset depends on the `time_zone` parameter).
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
