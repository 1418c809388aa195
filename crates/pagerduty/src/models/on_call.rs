//! On-call entry model.

use super::{Reference, Timestamp};
use serde::{Deserialize, Serialize};

/// A user on call for an escalation policy level.
///
/// `start` and `end` are absent for permanent coverage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnCall {
    /// User on call.
    pub user: Reference,
    /// Schedule providing the coverage, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Reference>,
    /// Escalation policy.
    pub escalation_policy: Reference,
    /// Escalation level, starting at 1.
    pub escalation_level: u32,
    /// Start of the on-call period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Timestamp>,
    /// End of the on-call period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Timestamp>,
}
