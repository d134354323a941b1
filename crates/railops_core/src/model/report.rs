//! Generated report records.
//!
//! Reports are append-only: once recorded they are never updated or deleted,
//! so no patch model exists for them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a report record.
pub type ReportId = Uuid;

/// Content category of a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Telemetry,
    Performance,
    Alerts,
    Custom,
}

impl ReportKind {
    /// Returns the snake_case wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Telemetry => "telemetry",
            Self::Performance => "performance",
            Self::Alerts => "alerts",
            Self::Custom => "custom",
        }
    }
}

/// Generation state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Generating,
    Completed,
    Failed,
}

/// One generated (or in-flight) report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Store-assigned stable id.
    pub id: ReportId,
    /// Display name.
    pub name: String,
    /// Serialized as `type` to match the external schema naming.
    #[serde(rename = "type")]
    pub kind: ReportKind,
    /// Generation time in epoch milliseconds, store-assigned.
    pub generated_at: i64,
    /// Download location once generation completed.
    pub file_url: Option<String>,
    /// Generation state.
    pub status: ReportStatus,
}

/// Draft for recording a report; the store assigns id and `generated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub name: String,
    pub kind: ReportKind,
    pub file_url: Option<String>,
    pub status: ReportStatus,
}
