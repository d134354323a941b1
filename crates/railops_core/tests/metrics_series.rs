use railops_core::{
    DashboardRepository, MemoryDashboardRepository, MetricsSample, RepoError, ValidationError,
    METRICS_CAPACITY,
};

#[test]
fn empty_store_has_no_latest_snapshot() {
    let repo = MemoryDashboardRepository::new();
    assert!(repo.latest_metrics().is_none());
}

#[test]
fn latest_returns_the_most_recent_snapshot() {
    let mut repo = MemoryDashboardRepository::new();
    repo.record_metrics(sample(10.0)).unwrap();
    let last = repo.record_metrics(sample(20.0)).unwrap();

    let latest = repo.latest_metrics().unwrap();
    assert_eq!(latest, last);
    assert!((latest.cpu - 20.0).abs() < f64::EPSILON);
}

#[test]
fn series_is_capped_at_one_hundred_keeping_the_newest() {
    let mut repo = MemoryDashboardRepository::new();
    for i in 0..150 {
        repo.record_metrics(sample(f64::from(i) / 2.0)).unwrap();
    }

    let series = repo.metrics_series();
    assert_eq!(series.len(), METRICS_CAPACITY);

    // Oldest 50 evicted: the retained window starts at insert #50.
    assert!((series[0].cpu - 25.0).abs() < f64::EPSILON);
    assert!((series[99].cpu - 74.5).abs() < f64::EPSILON);

    // Retained in insertion order.
    assert!(series.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[test]
fn out_of_range_sample_is_rejected_without_mutation() {
    let mut repo = MemoryDashboardRepository::new();
    repo.record_metrics(sample(50.0)).unwrap();

    let err = repo
        .record_metrics(MetricsSample {
            cpu: 50.0,
            memory: 50.0,
            network: -1.0,
            storage: 50.0,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MetricOutOfRange { field: "network", .. })
    ));

    assert_eq!(repo.metrics_series().len(), 1);
}

fn sample(cpu: f64) -> MetricsSample {
    MetricsSample {
        cpu,
        memory: 60.0,
        network: 30.0,
        storage: 45.0,
    }
}
