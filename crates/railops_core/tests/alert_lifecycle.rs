use railops_core::{
    AlertPatch, AlertSeverity, AlertStatus, DashboardRepository, MemoryDashboardRepository,
    NewAlert, RepoError,
};
use uuid::Uuid;

#[test]
fn status_filter_tracks_transitions() {
    let mut repo = MemoryDashboardRepository::new();
    let alert = repo.create_alert(open_alert("Axle counter failure"));

    let open = repo.alerts(Some(AlertStatus::Open));
    assert!(open.iter().any(|a| a.id == alert.id));

    repo.update_alert(alert.id, AlertPatch::status(AlertStatus::Acknowledged))
        .unwrap();

    assert!(!repo
        .alerts(Some(AlertStatus::Open))
        .iter()
        .any(|a| a.id == alert.id));
    assert!(repo
        .alerts(Some(AlertStatus::Acknowledged))
        .iter()
        .any(|a| a.id == alert.id));
}

#[test]
fn resolved_at_is_stamped_once_and_never_moved() {
    let mut repo = MemoryDashboardRepository::new();
    let alert = repo.create_alert(open_alert("Points heater fault"));

    let resolved = repo
        .update_alert(alert.id, AlertPatch::status(AlertStatus::Resolved))
        .unwrap();
    let first_stamp = resolved.resolved_at.unwrap();
    assert!(first_stamp > alert.created_at);

    // A second resolve-shaped update must not move the stamp.
    let again = repo
        .update_alert(alert.id, AlertPatch::status(AlertStatus::Resolved))
        .unwrap();
    assert_eq!(again.resolved_at, Some(first_stamp));

    // Nor must any later unrelated update.
    let retitled = repo
        .update_alert(
            alert.id,
            AlertPatch {
                title: Some("Points heater fault (closed)".to_string()),
                ..AlertPatch::default()
            },
        )
        .unwrap();
    assert_eq!(retitled.resolved_at, Some(first_stamp));
}

#[test]
fn direct_open_to_resolved_shortcut_is_allowed() {
    let mut repo = MemoryDashboardRepository::new();
    let alert = repo.create_alert(open_alert("Feeder trip"));

    let resolved = repo
        .update_alert(alert.id, AlertPatch::status(AlertStatus::Resolved))
        .unwrap();

    assert_eq!(resolved.status, AlertStatus::Resolved);
    assert!(resolved.resolved_at.is_some());
}

#[test]
fn listing_sorts_by_created_at_desc() {
    let mut repo = MemoryDashboardRepository::new();
    for i in 0..5 {
        repo.create_alert(open_alert(&format!("Alert {i}")));
    }

    let alerts = repo.alerts(None);
    assert_eq!(alerts.len(), 5);
    assert!(alerts.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert_eq!(alerts[0].title, "Alert 4");
}

#[test]
fn update_missing_alert_returns_not_found() {
    let mut repo = MemoryDashboardRepository::new();
    let missing = Uuid::new_v4();

    let err = repo
        .update_alert(missing, AlertPatch::status(AlertStatus::Resolved))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { entity: "alert", id } if id == missing
    ));
}

#[test]
fn create_leaves_resolved_at_unset() {
    let mut repo = MemoryDashboardRepository::new();
    let alert = repo.create_alert(open_alert("New fault"));
    assert_eq!(alert.resolved_at, None);
    assert_eq!(repo.alert(alert.id).unwrap().resolved_at, None);
}

fn open_alert(title: &str) -> NewAlert {
    NewAlert {
        title: title.to_string(),
        message: "details".to_string(),
        severity: AlertSeverity::High,
        status: AlertStatus::Open,
        system: "signalling".to_string(),
    }
}
