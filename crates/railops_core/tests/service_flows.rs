use railops_core::{
    AlertSeverity, AlertStatus, DashboardRepository, DashboardService, MemoryDashboardRepository,
    NewAlert, NewNotification, NotificationKind, DEMO_USER,
};

#[test]
fn acknowledge_and_resolve_log_matching_activities() {
    let mut service = DashboardService::new(MemoryDashboardRepository::new());
    let alert = service.raise_alert(NewAlert {
        title: "Axle counter failure".to_string(),
        message: "Section J12 occupied with no train".to_string(),
        severity: AlertSeverity::High,
        status: AlertStatus::Open,
        system: "axle-counters".to_string(),
    });

    let acknowledged = service.acknowledge_alert(alert.id).unwrap();
    assert_eq!(acknowledged.status, AlertStatus::Acknowledged);

    let resolved = service.resolve_alert(alert.id).unwrap();
    assert_eq!(resolved.status, AlertStatus::Resolved);
    assert!(resolved.resolved_at.is_some());

    let activities = service.recent_activities(None);
    assert_eq!(activities.len(), 2);
    assert!(activities[0].action.contains("resolved"));
    assert!(activities[1].action.contains("acknowledged"));
    assert!(activities.iter().all(|a| a.system == "axle-counters"));
}

#[test]
fn set_project_progress_only_touches_progress() {
    let mut service = DashboardService::new(MemoryDashboardRepository::new());
    let project = service
        .create_project(railops_core::NewProject {
            name: "Platform 4 resignalling".to_string(),
            description: Some("ETCS-ready".to_string()),
            progress: 10,
            status: railops_core::ProjectStatus::Active,
            owner_id: DEMO_USER.to_string(),
        })
        .unwrap();

    let updated = service.set_project_progress(project.id, 75).unwrap();
    assert_eq!(updated.progress, 75);
    assert_eq!(updated.name, project.name);
    assert_eq!(updated.description, project.description);
}

#[test]
fn unread_count_tracks_the_polling_shape() {
    let mut service = DashboardService::new(MemoryDashboardRepository::new());
    for i in 0..3 {
        service.notify(NewNotification {
            title: format!("note {i}"),
            message: "body".to_string(),
            kind: NotificationKind::Info,
            user_id: DEMO_USER.to_string(),
            action_url: None,
        });
    }

    assert_eq!(service.unread_count(DEMO_USER), 3);
    assert_eq!(service.mark_all_notifications_read(DEMO_USER), 3);
    assert_eq!(service.unread_count(DEMO_USER), 0);
}

#[test]
fn seeded_store_exposes_a_coherent_dashboard() {
    let repo = MemoryDashboardRepository::seeded().unwrap();

    assert!(!repo.projects(None).is_empty());
    assert!(!repo.alerts(None).is_empty());
    assert!(!repo.activities(None).is_empty());
    assert!(repo.latest_metrics().is_some());
    assert!(!repo.reports().is_empty());

    // The demo user owns active projects and has unread notifications.
    let stats = repo.dashboard_stats(DEMO_USER);
    assert!(stats.active_projects >= 1);
    assert!(stats.monitored_systems >= 3);
    assert!(!repo.notifications(DEMO_USER, true).is_empty());

    // Exactly one seeded alert arrives resolved, with its stamp set.
    let resolved = repo.alerts(Some(AlertStatus::Resolved));
    assert_eq!(resolved.len(), 1);
    assert!(resolved[0].resolved_at.is_some());
}

#[test]
fn into_inner_returns_the_wrapped_store() {
    let mut service = DashboardService::new(MemoryDashboardRepository::new());
    service.record_activity(railops_core::NewActivity::new(
        "smoke",
        "test",
        railops_core::ActivityStatus::Info,
    ));

    let repo = service.into_inner();
    assert_eq!(repo.activities(None).len(), 1);
}
