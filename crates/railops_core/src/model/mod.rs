//! Domain model for the rail-operations dashboard.
//!
//! # Responsibility
//! - Define the canonical records kept by the repository store.
//! - Provide creation drafts and patch models for store write paths.
//!
//! # Invariants
//! - Every record is identified by a store-assigned, never-reused id.
//! - All timestamps are Unix epoch milliseconds assigned by the store.
//!
//! # See also
//! - docs/architecture/data-model.md

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod activity;
pub mod alert;
pub mod metrics;
pub mod notification;
pub mod project;
pub mod report;

/// Validation failure raised by store write paths before any mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Project name is empty or whitespace-only.
    EmptyProjectName,
    /// Project progress outside the [0, 100] range.
    ProgressOutOfRange(u8),
    /// Metric utilization figure outside the [0.0, 100.0] range.
    MetricOutOfRange {
        /// Which metric field was rejected.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProjectName => write!(f, "project name cannot be empty"),
            Self::ProgressOutOfRange(value) => {
                write!(f, "project progress {value} outside 0..=100")
            }
            Self::MetricOutOfRange { field, value } => {
                write!(f, "metric `{field}` value {value} outside 0.0..=100.0")
            }
        }
    }
}

impl Error for ValidationError {}
