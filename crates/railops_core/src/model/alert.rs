//! Operational alert records and their write models.
//!
//! # Responsibility
//! - Define the alert record raised against a subsystem.
//! - Provide the creation draft and the partial-merge patch model.
//!
//! # Invariants
//! - `resolved_at` is stamped exactly once, on the first transition to
//!   `Resolved`, and never overwritten afterwards.
//! - Alerts are never deleted; visibility is controlled by status filters.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an alert record.
pub type AlertId = Uuid;

/// Impact classification of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    /// Returns the snake_case wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Triage state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Open,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    /// Returns the snake_case wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Acknowledged => "acknowledged",
            Self::Resolved => "resolved",
        }
    }
}

/// One alert raised against a monitored subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Store-assigned stable id.
    pub id: AlertId,
    /// Short summary line.
    pub title: String,
    /// Full operator-facing message.
    pub message: String,
    /// Impact classification.
    pub severity: AlertSeverity,
    /// Triage state.
    pub status: AlertStatus,
    /// Affected subsystem, e.g. `axle-counters`.
    pub system: String,
    /// Creation time in epoch milliseconds, store-assigned.
    pub created_at: i64,
    /// First-resolution time; set once, never overwritten.
    pub resolved_at: Option<i64>,
}

/// Draft for raising an alert; the store assigns id and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlert {
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub system: String,
}

/// Partial update for an alert; only fields present in the patch are merged.
///
/// Resolution stamping is a store responsibility: merging a `Resolved` status
/// here does not touch `resolved_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<AlertSeverity>,
    pub status: Option<AlertStatus>,
    pub system: Option<String>,
}

impl AlertPatch {
    /// Shorthand for the common status-transition patch.
    #[must_use]
    pub fn status(status: AlertStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Merges patch fields onto `alert`, leaving absent fields untouched.
    pub fn apply_to(&self, alert: &mut Alert) {
        if let Some(title) = &self.title {
            alert.title = title.clone();
        }
        if let Some(message) = &self.message {
            alert.message = message.clone();
        }
        if let Some(severity) = self.severity {
            alert.severity = severity;
        }
        if let Some(status) = self.status {
            alert.status = status;
        }
        if let Some(system) = &self.system {
            alert.system = system.clone();
        }
    }
}
