// src/main.rs
use std::sync::Arc;

use chrono::Utc;
use tokio::signal::ctrl_c;

use control_tower::adapter::DashboardCoordinator;
use control_tower::application::dto::ApplicationError;
use control_tower::application::usecase::chart_usecase;
use control_tower::config::Config;
use control_tower::domain::model::FetchState;
use control_tower::infrastructure::analysis;
use control_tower::infrastructure::api::HttpOrderRepository;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting control_tower v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Orders API at {}", config.api.base_url);

    // Reference chart panels, serialized once for the charting surface
    let trend = chart_usecase::weekly_output_trend()?;
    let radar = chart_usecase::site_health_radar()?;
    log::debug!("weekly output panel: {}", serde_json::to_string(&trend)?);
    log::debug!("site health panel: {}", serde_json::to_string(&radar)?);

    // Wire the repository into the coordinator and start fetching
    let repository = Arc::new(HttpOrderRepository::new(&config.api.base_url));
    let mut coordinator = DashboardCoordinator::new(
        repository,
        config.poll.request_timeout(),
        config.poll.interval(),
    );

    let mut snapshots = coordinator.subscribe();
    coordinator.start().await;

    // Report each published snapshot
    tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow().clone();
            match &snapshot.state {
                FetchState::Loading => {
                    log::debug!("fetch in flight (generation {})", snapshot.generation);
                }
                FetchState::Ready(orders) => {
                    let stats = &snapshot.stats;
                    log::info!(
                        "{} orders: {} ongoing, {} completed, {} cancelled, load {}%",
                        stats.total,
                        stats.ongoing,
                        stats.completed,
                        stats.cancelled,
                        analysis::load_percent(stats)
                    );
                    match chart_usecase::status_trend(orders, 7, Utc::now().date_naive()) {
                        Ok(trend) => match serde_json::to_string(&trend) {
                            Ok(json) => log::debug!("status trend panel: {}", json),
                            Err(e) => log::warn!("could not serialize status trend: {}", e),
                        },
                        Err(e) => log::warn!("could not build status trend: {}", e),
                    }
                }
                FetchState::Failed(message) => {
                    log::warn!("{}", message);
                }
            }
        }
    });

    log::info!("Dashboard core is running. Press Ctrl+C to stop.");
    ctrl_c().await.expect("Failed to listen for control-c event");

    log::info!("Shutting down...");
    coordinator.stop();

    log::info!("Shutdown complete. Goodbye!");
    Ok(())
}
