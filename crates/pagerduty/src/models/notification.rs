//! Notification model.

use super::{Reference, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// Text message.
    SmsNotification,
    /// Email.
    EmailNotification,
    /// Phone call.
    PhoneNotification,
    /// Mobile push.
    PushNotification,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SmsNotification => "sms_notification",
            Self::EmailNotification => "email_notification",
            Self::PhoneNotification => "phone_notification",
            Self::PushNotification => "push_notification",
        })
    }
}

/// A notification sent to a user about an incident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Notification ID.
    pub id: String,
    /// Channel.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// When the notification was sent.
    pub started_at: Timestamp,
    /// Address the notification was sent to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Notified user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Reference>,
}
