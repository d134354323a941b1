//! Engineering project records and their write models.
//!
//! # Responsibility
//! - Define the project record tracked per owning controller.
//! - Provide the creation draft and the partial-merge patch model.
//!
//! # Invariants
//! - `progress` stays within [0, 100]; write paths validate before merging.
//! - `updated_at` is refreshed by the store on every mutation.
//! - `owner_id` is fixed at creation; patches cannot move ownership.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project record.
pub type ProjectId = Uuid;

const PROGRESS_MAX: u8 = 100;

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
    Pending,
}

impl ProjectStatus {
    /// Returns the snake_case wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
            Self::Pending => "pending",
        }
    }
}

/// One tracked engineering project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned stable id.
    pub id: ProjectId,
    /// Display name, non-empty.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Completion percentage in [0, 100].
    pub progress: u8,
    /// Lifecycle state.
    pub status: ProjectStatus,
    /// Creation time in epoch milliseconds, store-assigned.
    pub created_at: i64,
    /// Last mutation time in epoch milliseconds, store-refreshed.
    pub updated_at: i64,
    /// Owning controller identity; fixed for the record lifetime.
    pub owner_id: String,
}

/// Draft for creating a project; the store assigns id and both timestamps.
///
/// `progress` is caller-supplied with no store-side default, so the created
/// record holds exactly the submitted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub progress: u8,
    pub status: ProjectStatus,
    pub owner_id: String,
}

impl NewProject {
    /// Checks draft invariants before the store constructs the record.
    ///
    /// # Errors
    /// - `EmptyProjectName` when `name` trims to nothing.
    /// - `ProgressOutOfRange` when `progress` exceeds 100.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyProjectName);
        }
        if self.progress > PROGRESS_MAX {
            return Err(ValidationError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }
}

/// Partial update for a project; only fields present in the patch are merged.
///
/// Optional record fields are set-only here: a patch can replace
/// `description` but cannot clear it back to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub progress: Option<u8>,
    pub status: Option<ProjectStatus>,
}

impl ProjectPatch {
    /// Checks patch invariants before the store merges it.
    ///
    /// # Errors
    /// - `EmptyProjectName` when a supplied `name` trims to nothing.
    /// - `ProgressOutOfRange` when a supplied `progress` exceeds 100.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyProjectName);
            }
        }
        if let Some(progress) = self.progress {
            if progress > PROGRESS_MAX {
                return Err(ValidationError::ProgressOutOfRange(progress));
            }
        }
        Ok(())
    }

    /// Merges patch fields onto `project`, leaving absent fields untouched.
    ///
    /// Timestamp bookkeeping stays with the store; this merge never touches
    /// `updated_at`.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(description) = &self.description {
            project.description = Some(description.clone());
        }
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
    }
}
