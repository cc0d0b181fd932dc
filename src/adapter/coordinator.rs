// src/adapter/coordinator.rs
// Dashboard coordinator

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::application::usecase::FetchLifecycle;
use crate::domain::model::DashboardSnapshot;
use crate::domain::repository::OrderRepository;

/// Wires the order repository and the fetch lifecycle together and drives
/// them: one automatic fetch on start, an optional periodic refresh loop,
/// and on-demand refreshes for consumers.
pub struct DashboardCoordinator {
    lifecycle: Arc<FetchLifecycle>,
    poll_interval: Duration,
    shutdown_tx: watch::Sender<bool>,
    running: bool,
}

impl DashboardCoordinator {
    pub fn new(
        repository: Arc<dyn OrderRepository + Send + Sync>,
        request_timeout: Duration,
        poll_interval: Duration,
    ) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            lifecycle: Arc::new(FetchLifecycle::new(repository, request_timeout)),
            poll_interval,
            shutdown_tx,
            running: false,
        }
    }

    /// Observe dashboard snapshots as they are published.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.lifecycle.subscribe()
    }

    /// On-demand reload, e.g. behind a manual refresh action.
    pub async fn trigger_refresh(&self) {
        self.lifecycle.refresh().await;
    }

    /// Run the automatic initial fetch and, when a poll interval is
    /// configured, the periodic refresh loop. A zero interval keeps the
    /// one-shot behavior.
    pub async fn start(&mut self) {
        if self.running {
            return;
        }

        let lifecycle = self.lifecycle.clone();
        let poll_interval = self.poll_interval;
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            lifecycle.refresh().await;

            if poll_interval.is_zero() {
                return;
            }

            let mut ticker = tokio::time::interval(poll_interval);
            // The first tick fires immediately; the initial fetch covers it.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => lifecycle.refresh().await,
                    _ = shutdown_rx.changed() => break,
                }
            }
            log::info!("dashboard refresh loop stopped");
        });

        self.running = true;
        log::info!("dashboard coordinator started");
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        let _ = self.shutdown_tx.send(true);
        self.running = false;
        log::info!("dashboard coordinator stopped");
    }
}
