//! System utilization snapshots.
//!
//! # Responsibility
//! - Define one point-in-time utilization snapshot and its ingest sample.
//!
//! # Invariants
//! - All four figures are percentages in [0.0, 100.0]; ingest validates.
//! - Snapshots live in a bounded FIFO series owned by the store.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// One point-in-time utilization snapshot in the bounded series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    /// CPU utilization percentage.
    pub cpu: f64,
    /// Memory utilization percentage.
    pub memory: f64,
    /// Network utilization percentage.
    pub network: f64,
    /// Storage utilization percentage.
    pub storage: f64,
    /// Capture time in epoch milliseconds, store-assigned.
    pub timestamp: i64,
}

/// Ingest sample for a new snapshot; the store assigns the timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSample {
    pub cpu: f64,
    pub memory: f64,
    pub network: f64,
    pub storage: f64,
}

impl MetricsSample {
    /// Checks that every figure is a percentage before the store appends it.
    ///
    /// # Errors
    /// - `MetricOutOfRange` naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("cpu", self.cpu),
            ("memory", self.memory),
            ("network", self.network),
            ("storage", self.storage),
        ] {
            if !(0.0..=100.0).contains(&value) || value.is_nan() {
                return Err(ValidationError::MetricOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
