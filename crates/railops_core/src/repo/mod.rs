//! Repository layer: store contract and the in-memory implementation.
//!
//! # Responsibility
//! - Define the dashboard data-access contract and its error surface.
//! - Keep collection ownership and timestamp bookkeeping inside the store.
//!
//! # Invariants
//! - Write paths validate before any mutation.
//! - Updates on missing ids return semantic `NotFound` errors; point lookups
//!   and scoped deletes keep their soft `Option`/`bool` shapes.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod dashboard_repo;
mod fixtures;

pub use fixtures::DEMO_USER;

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error for validated or id-targeted write operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoError {
    /// Write rejected before mutation.
    Validation(ValidationError),
    /// Target record does not exist in the named collection.
    NotFound {
        /// Collection name, e.g. `project` or `alert`.
        entity: &'static str,
        /// Id that failed to resolve.
        id: Uuid,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
