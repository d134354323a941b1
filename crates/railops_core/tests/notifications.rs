use railops_core::{
    DashboardRepository, MemoryDashboardRepository, NewNotification, NotificationKind,
};
use uuid::Uuid;

const YORK: &str = "controller-york";
const LEEDS: &str = "controller-leeds";

#[test]
fn new_notifications_start_unread_and_list_newest_first() {
    let mut repo = MemoryDashboardRepository::new();
    repo.create_notification(for_user(YORK, "first"));
    repo.create_notification(for_user(YORK, "second"));

    let all = repo.notifications(YORK, false);
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|n| !n.read));
    assert_eq!(all[0].title, "second");
    assert!(all[0].created_at > all[1].created_at);
}

#[test]
fn listing_is_scoped_to_the_requested_user() {
    let mut repo = MemoryDashboardRepository::new();
    repo.create_notification(for_user(YORK, "york only"));
    repo.create_notification(for_user(LEEDS, "leeds only"));

    let york = repo.notifications(YORK, false);
    assert_eq!(york.len(), 1);
    assert_eq!(york[0].user_id, YORK);
}

#[test]
fn mark_read_is_owner_scoped() {
    let mut repo = MemoryDashboardRepository::new();
    let notification = repo.create_notification(for_user(YORK, "scoped"));

    // Another user cannot mark it, and the record must stay untouched.
    assert!(!repo.mark_notification_read(notification.id, LEEDS));
    assert!(!repo.notifications(YORK, false)[0].read);

    assert!(repo.mark_notification_read(notification.id, YORK));
    assert!(repo.notifications(YORK, false)[0].read);
}

#[test]
fn mark_read_on_missing_id_returns_false() {
    let mut repo = MemoryDashboardRepository::new();
    assert!(!repo.mark_notification_read(Uuid::new_v4(), YORK));
}

#[test]
fn unread_filter_and_mark_all_count() {
    let mut repo = MemoryDashboardRepository::new();
    let first = repo.create_notification(for_user(YORK, "a"));
    repo.create_notification(for_user(YORK, "b"));
    repo.create_notification(for_user(YORK, "c"));
    repo.create_notification(for_user(LEEDS, "other"));

    repo.mark_notification_read(first.id, YORK);
    assert_eq!(repo.notifications(YORK, true).len(), 2);

    // Only the two still-unread York records count as changed.
    assert_eq!(repo.mark_all_notifications_read(YORK), 2);
    assert!(repo.notifications(YORK, true).is_empty());

    // Leeds was never touched.
    assert_eq!(repo.notifications(LEEDS, true).len(), 1);

    // A second sweep changes nothing.
    assert_eq!(repo.mark_all_notifications_read(YORK), 0);
}

#[test]
fn read_state_never_reverts() {
    let mut repo = MemoryDashboardRepository::new();
    let notification = repo.create_notification(for_user(YORK, "sticky"));

    assert!(repo.mark_notification_read(notification.id, YORK));
    // Re-marking reports no change and leaves the flag set.
    assert!(!repo.mark_notification_read(notification.id, YORK));
    assert!(repo.notifications(YORK, false)[0].read);
}

#[test]
fn delete_is_owner_scoped() {
    let mut repo = MemoryDashboardRepository::new();
    let notification = repo.create_notification(for_user(YORK, "deletable"));

    assert!(!repo.delete_notification(notification.id, LEEDS));
    assert_eq!(repo.notifications(YORK, false).len(), 1);

    assert!(repo.delete_notification(notification.id, YORK));
    assert!(repo.notifications(YORK, false).is_empty());
    assert!(!repo.delete_notification(notification.id, YORK));
}

fn for_user(user_id: &str, title: &str) -> NewNotification {
    NewNotification {
        title: title.to_string(),
        message: "body".to_string(),
        kind: NotificationKind::Info,
        user_id: user_id.to_string(),
        action_url: None,
    }
}
