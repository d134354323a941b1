//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `railops_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use railops_core::{DashboardRepository, MemoryDashboardRepository, DEMO_USER};

fn main() {
    println!("railops_core version={}", railops_core::core_version());

    let repo = match MemoryDashboardRepository::seeded() {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("seed failed: {err}");
            std::process::exit(1);
        }
    };

    let stats = repo.dashboard_stats(DEMO_USER);
    println!(
        "seeded store: projects={} alerts={} health={} uptime={:.1}%",
        repo.projects(None).len(),
        repo.alerts(None).len(),
        stats.system_health.as_str(),
        stats.uptime_percent
    );
}
