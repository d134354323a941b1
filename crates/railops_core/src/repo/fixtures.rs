//! Representative rail-operations seed data.
//!
//! # Responsibility
//! - Populate a fresh store with plausible demo records at startup.
//!
//! # Invariants
//! - Seeding goes through the public mutation API only, so every seeded
//!   record satisfies the same invariants as caller-created ones.

use crate::model::activity::{ActivityStatus, NewActivity};
use crate::model::alert::{AlertPatch, AlertSeverity, AlertStatus, NewAlert};
use crate::model::metrics::MetricsSample;
use crate::model::notification::{NewNotification, NotificationKind};
use crate::model::project::{NewProject, ProjectStatus};
use crate::model::report::{NewReport, ReportKind, ReportStatus};
use crate::repo::dashboard_repo::{DashboardRepository, MemoryDashboardRepository};
use crate::repo::RepoResult;

pub const DEMO_USER: &str = "controller-york";
const SECOND_USER: &str = "controller-leeds";

/// Seeds `repo` with the demo dataset.
///
/// # Errors
/// Only if the fixture set and the store's validation rules drift apart;
/// with the shipped data this always succeeds.
pub(crate) fn seed(repo: &mut MemoryDashboardRepository) -> RepoResult<()> {
    seed_projects(repo)?;
    seed_alerts(repo)?;
    seed_activities(repo);
    seed_notifications(repo);
    seed_metrics(repo)?;
    seed_reports(repo);
    Ok(())
}

fn seed_projects(repo: &mut MemoryDashboardRepository) -> RepoResult<()> {
    repo.create_project(NewProject {
        name: "Platform 4 resignalling".to_string(),
        description: Some("Replace mechanical interlocking with ETCS-ready signals".to_string()),
        progress: 62,
        status: ProjectStatus::Active,
        owner_id: DEMO_USER.to_string(),
    })?;
    repo.create_project(NewProject {
        name: "Overhead line renewal, section K".to_string(),
        description: Some("25kV catenary renewal between junctions K1 and K4".to_string()),
        progress: 18,
        status: ProjectStatus::Active,
        owner_id: DEMO_USER.to_string(),
    })?;
    repo.create_project(NewProject {
        name: "Depot wash plant refurbishment".to_string(),
        description: None,
        progress: 100,
        status: ProjectStatus::Completed,
        owner_id: SECOND_USER.to_string(),
    })?;
    repo.create_project(NewProject {
        name: "Level crossing obstacle detection".to_string(),
        description: Some("LIDAR trial at three rural crossings".to_string()),
        progress: 0,
        status: ProjectStatus::Pending,
        owner_id: SECOND_USER.to_string(),
    })?;
    Ok(())
}

fn seed_alerts(repo: &mut MemoryDashboardRepository) -> RepoResult<()> {
    repo.create_alert(NewAlert {
        title: "Axle counter failure at Junction 12".to_string(),
        message: "Section J12 reporting occupied with no train present".to_string(),
        severity: AlertSeverity::High,
        status: AlertStatus::Open,
        system: "axle-counters".to_string(),
    });
    repo.create_alert(NewAlert {
        title: "Traction power dip, feeder F3".to_string(),
        message: "Voltage sag below 22.5kV for 40s on feeder F3".to_string(),
        severity: AlertSeverity::Medium,
        status: AlertStatus::Acknowledged,
        system: "traction-power".to_string(),
    });
    repo.create_alert(NewAlert {
        title: "Hot axle box detector offline".to_string(),
        message: "HABD site 7 not reporting since 04:12".to_string(),
        severity: AlertSeverity::Low,
        status: AlertStatus::Open,
        system: "wayside-detectors".to_string(),
    });

    // One alert arrives already worked to resolution so the demo data shows
    // a stamped resolved_at.
    let resolved = repo.create_alert(NewAlert {
        title: "Points heater fault, 214B".to_string(),
        message: "Heater circuit open at points 214B".to_string(),
        severity: AlertSeverity::Medium,
        status: AlertStatus::Open,
        system: "points".to_string(),
    });
    repo.update_alert(resolved.id, AlertPatch::status(AlertStatus::Resolved))?;
    Ok(())
}

fn seed_activities(repo: &mut MemoryDashboardRepository) {
    for (action, system, status) in [
        (
            "Route set for 1A07 through Junction 12",
            "signalling",
            ActivityStatus::Success,
        ),
        (
            "Possession granted on section K",
            "track-access",
            ActivityStatus::Info,
        ),
        (
            "Feeder F3 switched to reserve supply",
            "traction-power",
            ActivityStatus::Warning,
        ),
        (
            "HABD site 7 heartbeat missed",
            "wayside-detectors",
            ActivityStatus::Error,
        ),
        (
            "Workshop road 2 released to traffic",
            "depot",
            ActivityStatus::Success,
        ),
    ] {
        repo.add_activity(NewActivity::new(action, system, status));
    }
}

fn seed_notifications(repo: &mut MemoryDashboardRepository) {
    repo.create_notification(NewNotification {
        title: "Shift handover notes ready".to_string(),
        message: "Night shift notes for the York panel are available".to_string(),
        kind: NotificationKind::Info,
        user_id: DEMO_USER.to_string(),
        action_url: Some("/handover/latest".to_string()),
    });
    repo.create_notification(NewNotification {
        title: "Alert acknowledged".to_string(),
        message: "Traction power dip on feeder F3 acknowledged by Leeds panel".to_string(),
        kind: NotificationKind::Success,
        user_id: DEMO_USER.to_string(),
        action_url: None,
    });
    let read = repo.create_notification(NewNotification {
        title: "Report completed".to_string(),
        message: "Weekly telemetry report finished generating".to_string(),
        kind: NotificationKind::Success,
        user_id: SECOND_USER.to_string(),
        action_url: Some("/reports".to_string()),
    });
    repo.mark_notification_read(read.id, SECOND_USER);
}

fn seed_metrics(repo: &mut MemoryDashboardRepository) -> RepoResult<()> {
    for sample in [
        MetricsSample {
            cpu: 34.0,
            memory: 58.5,
            network: 21.0,
            storage: 47.0,
        },
        MetricsSample {
            cpu: 41.5,
            memory: 59.0,
            network: 25.5,
            storage: 47.0,
        },
        MetricsSample {
            cpu: 38.0,
            memory: 61.0,
            network: 19.0,
            storage: 47.5,
        },
    ] {
        repo.record_metrics(sample)?;
    }
    Ok(())
}

fn seed_reports(repo: &mut MemoryDashboardRepository) {
    repo.create_report(NewReport {
        name: "Weekly telemetry summary".to_string(),
        kind: ReportKind::Telemetry,
        file_url: Some("/files/reports/telemetry-w34.pdf".to_string()),
        status: ReportStatus::Completed,
    });
    repo.create_report(NewReport {
        name: "Alert response times, August".to_string(),
        kind: ReportKind::Alerts,
        file_url: None,
        status: ReportStatus::Generating,
    });
}
