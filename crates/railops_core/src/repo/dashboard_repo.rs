//! Dashboard store contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the full data-access contract consumed by views and services.
//! - Own every collection: callers receive clones, never live references.
//!
//! # Invariants
//! - Ids are store-assigned v4 UUIDs, unique within their collection.
//! - Store-assigned timestamps strictly increase within one store instance.
//! - The metrics series never holds more than `METRICS_CAPACITY` snapshots.
//! - `resolved_at` is stamped once on the first transition to `Resolved`.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::activity::{Activity, ActivityId, NewActivity};
use crate::model::alert::{Alert, AlertId, AlertPatch, AlertSeverity, AlertStatus, NewAlert};
use crate::model::metrics::{MetricsSample, SystemMetrics};
use crate::model::notification::{NewNotification, Notification, NotificationId};
use crate::model::project::{NewProject, Project, ProjectId, ProjectPatch, ProjectStatus};
use crate::model::report::{NewReport, Report};
use crate::repo::{fixtures, RepoError, RepoResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Maximum retained utilization snapshots; the oldest is evicted past this.
pub const METRICS_CAPACITY: usize = 100;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Utilization above this figure counts a snapshot as overloaded for the
/// derived uptime percentage.
const OVERLOAD_THRESHOLD: f64 = 95.0;

/// Overall health classification derived from unresolved alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemHealth {
    Operational,
    Degraded,
    Critical,
}

impl SystemHealth {
    /// Returns the snake_case wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Degraded => "degraded",
            Self::Critical => "critical",
        }
    }
}

/// Aggregate read model for the dashboard landing view.
///
/// Every figure is derived from live collections at call time; nothing here
/// is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// The requesting user's projects with status `Active`.
    pub active_projects: usize,
    /// Alerts created in the current UTC day that are not yet resolved.
    pub alerts_today: usize,
    /// Health classification derived from unresolved alert severities.
    pub system_health: SystemHealth,
    /// Share of retained snapshots with every figure below the overload
    /// threshold; 100.0 when the series is empty.
    pub uptime_percent: f64,
    /// Distinct subsystem names observed across alerts and activities.
    pub monitored_systems: usize,
}

/// Data-access contract for all dashboard entity families.
///
/// Reads are infallible and return owned copies sorted newest-first on the
/// entity's timestamp (id ascending on ties). Mutations take `&mut self`,
/// making the single-writer assumption explicit; a multi-threaded embedder
/// wraps the store in its own lock.
pub trait DashboardRepository {
    /// Lists activities newest-first, truncated to `limit` when given.
    fn activities(&self, limit: Option<usize>) -> Vec<Activity>;
    /// Appends one activity; the store assigns id and timestamp.
    fn add_activity(&mut self, draft: NewActivity) -> Activity;

    /// Lists projects, optionally owner-filtered, newest `updated_at` first.
    fn projects(&self, owner_id: Option<&str>) -> Vec<Project>;
    /// Point lookup; `None` when the id is absent.
    fn project(&self, id: ProjectId) -> Option<Project>;
    /// Creates a project with `created_at == updated_at`.
    fn create_project(&mut self, draft: NewProject) -> RepoResult<Project>;
    /// Merges a patch onto an existing project and refreshes `updated_at`.
    fn update_project(&mut self, id: ProjectId, patch: ProjectPatch) -> RepoResult<Project>;
    /// Removes a project; returns whether a removal occurred.
    fn delete_project(&mut self, id: ProjectId) -> bool;

    /// Lists alerts, optionally status-filtered, newest `created_at` first.
    fn alerts(&self, status: Option<AlertStatus>) -> Vec<Alert>;
    /// Point lookup; `None` when the id is absent.
    fn alert(&self, id: AlertId) -> Option<Alert>;
    /// Raises an alert; the store assigns id and `created_at`.
    fn create_alert(&mut self, draft: NewAlert) -> Alert;
    /// Merges a patch onto an existing alert, stamping `resolved_at` on the
    /// first transition to `Resolved`.
    fn update_alert(&mut self, id: AlertId, patch: AlertPatch) -> RepoResult<Alert>;

    /// Lists one user's notifications, newest first, optionally unread-only.
    fn notifications(&self, user_id: &str, unread_only: bool) -> Vec<Notification>;
    /// Delivers a notification with `read` initialized to `false`.
    fn create_notification(&mut self, draft: NewNotification) -> Notification;
    /// Marks one notification read, scoped by id and owning user; returns
    /// whether a record changed.
    fn mark_notification_read(&mut self, id: NotificationId, user_id: &str) -> bool;
    /// Marks all of one user's notifications read; returns how many changed.
    fn mark_all_notifications_read(&mut self, user_id: &str) -> usize;
    /// Deletes one notification, scoped by id and owning user.
    fn delete_notification(&mut self, id: NotificationId, user_id: &str) -> bool;

    /// Returns the most recently appended snapshot, if any.
    fn latest_metrics(&self) -> Option<SystemMetrics>;
    /// Appends a snapshot, evicting the oldest past `METRICS_CAPACITY`.
    fn record_metrics(&mut self, sample: MetricsSample) -> RepoResult<SystemMetrics>;
    /// Returns the retained snapshot series, oldest first.
    fn metrics_series(&self) -> Vec<SystemMetrics>;

    /// Lists reports newest `generated_at` first.
    fn reports(&self) -> Vec<Report>;
    /// Records a report; the store assigns id and `generated_at`.
    fn create_report(&mut self, draft: NewReport) -> Report;

    /// Derives the aggregate landing-view figures for one user.
    fn dashboard_stats(&self, user_id: &str) -> DashboardStats;
}

/// Integer share as a percentage; `total` must be non-zero.
#[allow(clippy::cast_precision_loss)]
fn share_percent(part: usize, total: usize) -> f64 {
    part as f64 * 100.0 / total as f64
}

/// Epoch milliseconds from the system clock; saturates instead of panicking.
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}

/// Clock handing out strictly increasing timestamps within one store.
///
/// Two mutations landing in the same millisecond still get distinct,
/// correctly ordered timestamps, which keeps every sort-on-read
/// deterministic and `updated_at` strictly increasing across updates.
#[derive(Debug, Default)]
struct MonotonicClock {
    last_ms: i64,
}

impl MonotonicClock {
    fn next(&mut self) -> i64 {
        let now = now_ms().max(self.last_ms + 1);
        self.last_ms = now;
        now
    }
}

/// In-memory store: one collection per entity family, no persistence.
///
/// All state is volatile; a process restart starts from an empty or freshly
/// seeded store. Construct with [`MemoryDashboardRepository::new`] for tests
/// and [`MemoryDashboardRepository::seeded`] at application start, then pass
/// the instance to consumers by injection.
#[derive(Debug, Default)]
pub struct MemoryDashboardRepository {
    activities: Vec<Activity>,
    projects: Vec<Project>,
    alerts: Vec<Alert>,
    notifications: Vec<Notification>,
    metrics: VecDeque<SystemMetrics>,
    reports: Vec<Report>,
    clock: MonotonicClock,
}

impl MemoryDashboardRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with representative rail-operations data.
    ///
    /// # Errors
    /// Only if the fixture set and the store's validation rules drift apart;
    /// with the shipped data this always succeeds.
    pub fn seeded() -> RepoResult<Self> {
        let mut repo = Self::new();
        fixtures::seed(&mut repo)?;
        info!(
            "event=store_seed module=repo status=ok projects={} alerts={} activities={} notifications={} reports={} metrics={}",
            repo.projects.len(),
            repo.alerts.len(),
            repo.activities.len(),
            repo.notifications.len(),
            repo.reports.len(),
            repo.metrics.len()
        );
        Ok(repo)
    }

    fn project_mut(&mut self, id: ProjectId) -> RepoResult<&mut Project> {
        self.projects
            .iter_mut()
            .find(|project| project.id == id)
            .ok_or(RepoError::NotFound {
                entity: "project",
                id,
            })
    }

    fn alert_mut(&mut self, id: AlertId) -> RepoResult<&mut Alert> {
        self.alerts
            .iter_mut()
            .find(|alert| alert.id == id)
            .ok_or(RepoError::NotFound { entity: "alert", id })
    }
}

impl DashboardRepository for MemoryDashboardRepository {
    fn activities(&self, limit: Option<usize>) -> Vec<Activity> {
        let mut rows = self.activities.clone();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(a.id.cmp(&b.id)));
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
        rows
    }

    fn add_activity(&mut self, draft: NewActivity) -> Activity {
        let activity = Activity {
            id: ActivityId::new_v4(),
            action: draft.action,
            system: draft.system,
            status: draft.status,
            timestamp: self.clock.next(),
        };
        // Prepend so the raw collection reads newest-first even before the
        // sort-on-read pass.
        self.activities.insert(0, activity.clone());
        debug!(
            "event=activity_add module=repo status=ok id={} system={} outcome={}",
            activity.id,
            activity.system,
            activity.status.as_str()
        );
        activity
    }

    fn projects(&self, owner_id: Option<&str>) -> Vec<Project> {
        let mut rows: Vec<Project> = self
            .projects
            .iter()
            .filter(|project| owner_id.map_or(true, |owner| project.owner_id == owner))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        rows
    }

    fn project(&self, id: ProjectId) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    fn create_project(&mut self, draft: NewProject) -> RepoResult<Project> {
        draft.validate()?;
        let now = self.clock.next();
        let project = Project {
            id: ProjectId::new_v4(),
            name: draft.name,
            description: draft.description,
            progress: draft.progress,
            status: draft.status,
            created_at: now,
            updated_at: now,
            owner_id: draft.owner_id,
        };
        self.projects.push(project.clone());
        debug!(
            "event=project_create module=repo status=ok id={} owner={}",
            project.id, project.owner_id
        );
        Ok(project)
    }

    fn update_project(&mut self, id: ProjectId, patch: ProjectPatch) -> RepoResult<Project> {
        patch.validate()?;
        let now = self.clock.next();
        let project = self.project_mut(id)?;
        patch.apply_to(project);
        project.updated_at = now;
        let updated = project.clone();
        debug!("event=project_update module=repo status=ok id={id}");
        Ok(updated)
    }

    fn delete_project(&mut self, id: ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|project| project.id != id);
        let removed = self.projects.len() < before;
        if removed {
            debug!("event=project_delete module=repo status=ok id={id}");
        }
        removed
    }

    fn alerts(&self, status: Option<AlertStatus>) -> Vec<Alert> {
        let mut rows: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|alert| status.map_or(true, |wanted| alert.status == wanted))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        rows
    }

    fn alert(&self, id: AlertId) -> Option<Alert> {
        self.alerts.iter().find(|a| a.id == id).cloned()
    }

    fn create_alert(&mut self, draft: NewAlert) -> Alert {
        let alert = Alert {
            id: AlertId::new_v4(),
            title: draft.title,
            message: draft.message,
            severity: draft.severity,
            status: draft.status,
            system: draft.system,
            created_at: self.clock.next(),
            resolved_at: None,
        };
        self.alerts.push(alert.clone());
        debug!(
            "event=alert_create module=repo status=ok id={} severity={} system={}",
            alert.id,
            alert.severity.as_str(),
            alert.system
        );
        alert
    }

    fn update_alert(&mut self, id: AlertId, patch: AlertPatch) -> RepoResult<Alert> {
        let now = self.clock.next();
        let alert = self.alert_mut(id)?;
        patch.apply_to(alert);
        // Stamp first resolution only; later resolved-state updates must not
        // move the original resolution time.
        if alert.status == AlertStatus::Resolved && alert.resolved_at.is_none() {
            alert.resolved_at = Some(now);
        }
        let updated = alert.clone();
        debug!(
            "event=alert_update module=repo status=ok id={id} state={}",
            updated.status.as_str()
        );
        Ok(updated)
    }

    fn notifications(&self, user_id: &str, unread_only: bool) -> Vec<Notification> {
        let mut rows: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && (!unread_only || !n.read))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        rows
    }

    fn create_notification(&mut self, draft: NewNotification) -> Notification {
        let notification = Notification {
            id: NotificationId::new_v4(),
            title: draft.title,
            message: draft.message,
            kind: draft.kind,
            read: false,
            created_at: self.clock.next(),
            user_id: draft.user_id,
            action_url: draft.action_url,
        };
        self.notifications.push(notification.clone());
        debug!(
            "event=notification_create module=repo status=ok id={} user={}",
            notification.id, notification.user_id
        );
        notification
    }

    fn mark_notification_read(&mut self, id: NotificationId, user_id: &str) -> bool {
        match self
            .notifications
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
        {
            Some(notification) => {
                let changed = !notification.read;
                notification.read = true;
                changed
            }
            None => false,
        }
    }

    fn mark_all_notifications_read(&mut self, user_id: &str) -> usize {
        let mut changed = 0;
        for notification in self
            .notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.read)
        {
            notification.read = true;
            changed += 1;
        }
        changed
    }

    fn delete_notification(&mut self, id: NotificationId, user_id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications
            .retain(|n| !(n.id == id && n.user_id == user_id));
        self.notifications.len() < before
    }

    fn latest_metrics(&self) -> Option<SystemMetrics> {
        self.metrics.back().cloned()
    }

    fn record_metrics(&mut self, sample: MetricsSample) -> RepoResult<SystemMetrics> {
        sample.validate()?;
        let snapshot = SystemMetrics {
            cpu: sample.cpu,
            memory: sample.memory,
            network: sample.network,
            storage: sample.storage,
            timestamp: self.clock.next(),
        };
        self.metrics.push_back(snapshot.clone());
        while self.metrics.len() > METRICS_CAPACITY {
            self.metrics.pop_front();
        }
        Ok(snapshot)
    }

    fn metrics_series(&self) -> Vec<SystemMetrics> {
        self.metrics.iter().cloned().collect()
    }

    fn reports(&self) -> Vec<Report> {
        let mut rows = self.reports.clone();
        rows.sort_by(|a, b| b.generated_at.cmp(&a.generated_at).then(a.id.cmp(&b.id)));
        rows
    }

    fn create_report(&mut self, draft: NewReport) -> Report {
        let report = Report {
            id: Uuid::new_v4(),
            name: draft.name,
            kind: draft.kind,
            generated_at: self.clock.next(),
            file_url: draft.file_url,
            status: draft.status,
        };
        self.reports.push(report.clone());
        debug!(
            "event=report_create module=repo status=ok id={} kind={}",
            report.id,
            report.kind.as_str()
        );
        report
    }

    fn dashboard_stats(&self, user_id: &str) -> DashboardStats {
        let active_projects = self
            .projects
            .iter()
            .filter(|p| p.owner_id == user_id && p.status == ProjectStatus::Active)
            .count();

        let today = now_ms() / MS_PER_DAY;
        let alerts_today = self
            .alerts
            .iter()
            .filter(|a| a.status != AlertStatus::Resolved && a.created_at / MS_PER_DAY == today)
            .count();

        let unresolved = self
            .alerts
            .iter()
            .filter(|a| a.status != AlertStatus::Resolved);
        let worst_unresolved = unresolved.map(|a| a.severity).max();
        let system_health = match worst_unresolved {
            Some(AlertSeverity::Critical) => SystemHealth::Critical,
            Some(AlertSeverity::High) => SystemHealth::Degraded,
            _ => SystemHealth::Operational,
        };

        let uptime_percent = if self.metrics.is_empty() {
            100.0
        } else {
            let healthy = self
                .metrics
                .iter()
                .filter(|m| {
                    [m.cpu, m.memory, m.network, m.storage]
                        .iter()
                        .all(|value| *value < OVERLOAD_THRESHOLD)
                })
                .count();
            share_percent(healthy, self.metrics.len())
        };

        let monitored_systems = self
            .alerts
            .iter()
            .map(|a| a.system.as_str())
            .chain(self.activities.iter().map(|a| a.system.as_str()))
            .collect::<BTreeSet<_>>()
            .len();

        DashboardStats {
            active_projects,
            alerts_today,
            system_health,
            uptime_percent,
            monitored_systems,
        }
    }
}
