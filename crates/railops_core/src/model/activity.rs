//! Operational activity log records.
//!
//! # Responsibility
//! - Define the append-only audit trail entry for dashboard actions.
//!
//! # Invariants
//! - Activities are never updated or deleted once recorded.
//! - `timestamp` is assigned by the store at insertion time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an activity log entry.
pub type ActivityId = Uuid;

/// Outcome classification for a logged action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Success,
    Info,
    Warning,
    Error,
}

impl ActivityStatus {
    /// Returns the snake_case wire name for logs and UI badges.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One entry in the append-only operations activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Store-assigned stable id.
    pub id: ActivityId,
    /// Human-readable description of what happened.
    pub action: String,
    /// Originating subsystem, e.g. `signalling` or `traction-power`.
    pub system: String,
    /// Outcome classification.
    pub status: ActivityStatus,
    /// Insertion time in epoch milliseconds, store-assigned.
    pub timestamp: i64,
}

/// Draft for recording a new activity; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub action: String,
    pub system: String,
    pub status: ActivityStatus,
}

impl NewActivity {
    /// Convenience constructor for the common call shape.
    pub fn new(
        action: impl Into<String>,
        system: impl Into<String>,
        status: ActivityStatus,
    ) -> Self {
        Self {
            action: action.into(),
            system: system.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ActivityStatus;

    #[test]
    fn status_wire_names_are_snake_case() {
        assert_eq!(ActivityStatus::Success.as_str(), "success");
        assert_eq!(ActivityStatus::Warning.as_str(), "warning");
    }
}
