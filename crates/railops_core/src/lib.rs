//! Core domain logic for the rail-operations dashboard.
//! This crate is the single in-process source of truth for dashboard state.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{Activity, ActivityId, ActivityStatus, NewActivity};
pub use model::alert::{Alert, AlertId, AlertPatch, AlertSeverity, AlertStatus, NewAlert};
pub use model::metrics::{MetricsSample, SystemMetrics};
pub use model::notification::{NewNotification, Notification, NotificationId, NotificationKind};
pub use model::project::{NewProject, Project, ProjectId, ProjectPatch, ProjectStatus};
pub use model::report::{NewReport, Report, ReportId, ReportKind, ReportStatus};
pub use model::ValidationError;
pub use repo::dashboard_repo::{
    DashboardRepository, DashboardStats, MemoryDashboardRepository, SystemHealth,
    METRICS_CAPACITY,
};
pub use repo::{RepoError, RepoResult, DEMO_USER};
pub use service::dashboard_service::DashboardService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
