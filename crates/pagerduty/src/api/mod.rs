//! Resource methods for [`PagerDutyClient`](crate::PagerDutyClient).
//!
//! Each submodule adds an `impl PagerDutyClient` block for one resource
//! family together with the option structs its methods accept. All option
//! structs implement `Default`; an all-default value sends no query string.

pub mod abilities;
pub mod addons;
pub mod escalation_policies;
pub mod incidents;
pub mod log_entries;
pub mod maintenance_windows;
pub mod notifications;
pub mod on_calls;
pub mod schedules;
pub mod services;
pub mod vendors;

pub use addons::{AddonListParams, AddonUpdate, NewAddon};
pub use escalation_policies::{
    EscalationPolicyListParams, EscalationPolicyUpdate, EscalationRuleRequest,
    NewEscalationPolicy,
};
pub use incidents::{IncidentAlertParams, IncidentListParams};
pub use log_entries::{LogEntryListParams, LogEntryParams};
pub use maintenance_windows::{MaintenanceWindowListParams, MaintenanceWindowRequest};
pub use notifications::NotificationListParams;
pub use on_calls::OnCallListParams;
pub use schedules::{NewOverride, OverrideListParams, ScheduleListParams, ScheduleParams};
pub use services::{NewService, ServiceListParams};

use chrono::{DateTime, SecondsFormat, Utc};
use pagerduty_core::query::QueryParams;

/// A `since`/`until` window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    /// Start of the window.
    pub since: Option<DateTime<Utc>>,
    /// End of the window.
    pub until: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Window between two instants.
    #[must_use]
    pub const fn between(since: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self {
            since: Some(since),
            until: Some(until),
        }
    }

    pub(crate) fn push_to(&self, params: &mut QueryParams) {
        push_time(params, "since", self.since);
        push_time(params, "until", self.until);
    }
}

/// Render a timestamp as ISO-8601 UTC, e.g. `2017-05-28T23:48:27Z`.
pub(crate) fn iso8601(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn push_time(params: &mut QueryParams, key: &'static str, time: Option<DateTime<Utc>>) {
    params.push_opt_with(key, time, iso8601);
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso8601_uses_zulu_seconds() {
        let time = Utc.with_ymd_and_hms(2017, 5, 28, 23, 48, 27).unwrap();
        assert_eq!(iso8601(time), "2017-05-28T23:48:27Z");
    }

    #[test]
    fn time_window_pushes_present_bounds() {
        let mut params = QueryParams::new();
        TimeWindow {
            since: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            until: None,
        }
        .push_to(&mut params);
        assert_eq!(
            params.into_pairs(),
            vec![("since", "2024-01-01T00:00:00Z".to_string())]
        );
    }
}
