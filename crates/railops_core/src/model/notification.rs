//! Per-user notification records.
//!
//! # Responsibility
//! - Define the user-scoped notification record and its creation draft.
//!
//! # Invariants
//! - `read` is monotonic: it only moves from `false` to `true`.
//! - Every read or mutation is scoped to the owning `user_id`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a notification record.
pub type NotificationId = Uuid;

/// Presentation category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Returns the snake_case wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One notification delivered to a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Store-assigned stable id.
    pub id: NotificationId,
    /// Short summary line.
    pub title: String,
    /// Full notification body.
    pub message: String,
    /// Serialized as `type` to match the external schema naming.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Read flag; initialized `false`, only ever flipped to `true`.
    pub read: bool,
    /// Creation time in epoch milliseconds, store-assigned.
    pub created_at: i64,
    /// Owning user identity; scopes every read and mutation.
    pub user_id: String,
    /// Optional deep link into the dashboard.
    pub action_url: Option<String>,
}

/// Draft for delivering a notification; the store assigns id, `created_at`,
/// and initializes `read = false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub user_id: String,
    pub action_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Notification, NotificationKind};
    use uuid::Uuid;

    #[test]
    fn kind_serializes_under_type_key() {
        let notification = Notification {
            id: Uuid::nil(),
            title: "Shift handover".to_string(),
            message: "Night shift notes available".to_string(),
            kind: NotificationKind::Info,
            read: false,
            created_at: 0,
            user_id: "controller-york".to_string(),
            action_url: None,
        };

        let json = serde_json::to_value(&notification).expect("notification serializes");
        assert_eq!(json["type"], "info");
        assert!(json.get("kind").is_none());
    }
}
