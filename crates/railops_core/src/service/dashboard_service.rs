//! Dashboard use-case service.
//!
//! # Responsibility
//! - Wrap the repository contract for page/view callers.
//! - Pair alert transitions with an activity-log entry.
//!
//! # Invariants
//! - Alert transitions follow open -> acknowledged -> resolved, with the
//!   direct open -> resolved shortcut allowed.
//! - The service stays storage-agnostic: it only sees the trait.

use crate::model::activity::{Activity, ActivityStatus, NewActivity};
use crate::model::alert::{Alert, AlertId, AlertPatch, AlertStatus, NewAlert};
use crate::model::metrics::{MetricsSample, SystemMetrics};
use crate::model::notification::{NewNotification, Notification, NotificationId};
use crate::model::project::{NewProject, Project, ProjectId, ProjectPatch};
use crate::model::report::{NewReport, Report};
use crate::repo::dashboard_repo::{DashboardRepository, DashboardStats};
use crate::repo::RepoResult;

/// Use-case facade over any [`DashboardRepository`] implementation.
pub struct DashboardService<R: DashboardRepository> {
    repo: R,
}

impl<R: DashboardRepository> DashboardService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Consumes the service, returning the wrapped repository.
    pub fn into_inner(self) -> R {
        self.repo
    }

    /// Lists recent activities, truncated to `limit` when given.
    pub fn recent_activities(&self, limit: Option<usize>) -> Vec<Activity> {
        self.repo.activities(limit)
    }

    /// Records a free-form activity entry.
    pub fn record_activity(&mut self, draft: NewActivity) -> Activity {
        self.repo.add_activity(draft)
    }

    /// Lists projects, optionally filtered to one owner.
    pub fn projects(&self, owner_id: Option<&str>) -> Vec<Project> {
        self.repo.projects(owner_id)
    }

    /// Point project lookup.
    pub fn project(&self, id: ProjectId) -> Option<Project> {
        self.repo.project(id)
    }

    /// Creates a project after draft validation.
    pub fn create_project(&mut self, draft: NewProject) -> RepoResult<Project> {
        self.repo.create_project(draft)
    }

    /// Applies a partial project update.
    pub fn update_project(&mut self, id: ProjectId, patch: ProjectPatch) -> RepoResult<Project> {
        self.repo.update_project(id, patch)
    }

    /// Sets only the progress figure of a project.
    pub fn set_project_progress(&mut self, id: ProjectId, progress: u8) -> RepoResult<Project> {
        self.repo.update_project(
            id,
            ProjectPatch {
                progress: Some(progress),
                ..ProjectPatch::default()
            },
        )
    }

    /// Deletes a project; returns whether a removal occurred.
    pub fn delete_project(&mut self, id: ProjectId) -> bool {
        self.repo.delete_project(id)
    }

    /// Lists alerts, optionally filtered to one triage state.
    pub fn alerts(&self, status: Option<AlertStatus>) -> Vec<Alert> {
        self.repo.alerts(status)
    }

    /// Raises a new alert.
    pub fn raise_alert(&mut self, draft: NewAlert) -> Alert {
        self.repo.create_alert(draft)
    }

    /// Moves an alert to `Acknowledged` and logs the action.
    pub fn acknowledge_alert(&mut self, id: AlertId) -> RepoResult<Alert> {
        let alert = self
            .repo
            .update_alert(id, AlertPatch::status(AlertStatus::Acknowledged))?;
        self.repo.add_activity(NewActivity::new(
            format!("Alert acknowledged: {}", alert.title),
            alert.system.clone(),
            ActivityStatus::Info,
        ));
        Ok(alert)
    }

    /// Moves an alert to `Resolved` (stamping `resolved_at` on the first
    /// transition) and logs the action.
    pub fn resolve_alert(&mut self, id: AlertId) -> RepoResult<Alert> {
        let alert = self
            .repo
            .update_alert(id, AlertPatch::status(AlertStatus::Resolved))?;
        self.repo.add_activity(NewActivity::new(
            format!("Alert resolved: {}", alert.title),
            alert.system.clone(),
            ActivityStatus::Success,
        ));
        Ok(alert)
    }

    /// Lists one user's notifications; the polling collaborator calls this
    /// shape on its refresh interval.
    pub fn notifications(&self, user_id: &str, unread_only: bool) -> Vec<Notification> {
        self.repo.notifications(user_id, unread_only)
    }

    /// Cheap unread badge count for the polling collaborator.
    pub fn unread_count(&self, user_id: &str) -> usize {
        self.repo.notifications(user_id, true).len()
    }

    /// Delivers a notification to one user.
    pub fn notify(&mut self, draft: NewNotification) -> Notification {
        self.repo.create_notification(draft)
    }

    /// Marks one notification read, scoped to the owning user.
    pub fn mark_notification_read(&mut self, id: NotificationId, user_id: &str) -> bool {
        self.repo.mark_notification_read(id, user_id)
    }

    /// Marks all of one user's notifications read; returns how many changed.
    pub fn mark_all_notifications_read(&mut self, user_id: &str) -> usize {
        self.repo.mark_all_notifications_read(user_id)
    }

    /// Deletes one notification, scoped to the owning user.
    pub fn delete_notification(&mut self, id: NotificationId, user_id: &str) -> bool {
        self.repo.delete_notification(id, user_id)
    }

    /// Returns the most recent utilization snapshot, if any.
    pub fn latest_metrics(&self) -> Option<SystemMetrics> {
        self.repo.latest_metrics()
    }

    /// Ingests one utilization sample.
    pub fn record_metrics(&mut self, sample: MetricsSample) -> RepoResult<SystemMetrics> {
        self.repo.record_metrics(sample)
    }

    /// Lists generated reports.
    pub fn reports(&self) -> Vec<Report> {
        self.repo.reports()
    }

    /// Records a new report.
    pub fn create_report(&mut self, draft: NewReport) -> Report {
        self.repo.create_report(draft)
    }

    /// Derives the aggregate landing-view figures for one user.
    pub fn dashboard_stats(&self, user_id: &str) -> DashboardStats {
        self.repo.dashboard_stats(user_id)
    }
}
