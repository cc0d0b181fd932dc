// src/application/usecase/fetch_orders_usecase.rs
// Fetch lifecycle controller for the order collection

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::time::timeout;

use crate::domain::model::{
    AggregateStats, DashboardSnapshot, FetchState, NetworkError, Order,
};
use crate::domain::repository::OrderRepository;
use crate::infrastructure::analysis;

/// Fixed user-facing message for any fetch failure; the underlying cause
/// is logged, never shown.
pub const FETCH_UNAVAILABLE_MSG: &str =
    "cannot reach the server, verify the backend service is running";

struct LifecycleState {
    generation: u64,
    state: FetchState,
    stats: AggregateStats,
}

/// Owns the loading / ready / failed state machine for order retrieval.
///
/// Every `start` opens a new generation; a resolution is applied only while
/// its generation is still current, so a superseded request can never
/// overwrite a newer one. Observers receive an immutable snapshot through a
/// watch channel on every transition.
pub struct FetchLifecycle {
    repository: Arc<dyn OrderRepository + Send + Sync>,
    request_timeout: Duration,
    inner: Mutex<LifecycleState>,
    snapshot_tx: watch::Sender<DashboardSnapshot>,
}

impl FetchLifecycle {
    pub fn new(
        repository: Arc<dyn OrderRepository + Send + Sync>,
        request_timeout: Duration,
    ) -> Self {
        let (snapshot_tx, _) = watch::channel(DashboardSnapshot::initial());
        Self {
            repository,
            request_timeout,
            inner: Mutex::new(LifecycleState {
                generation: 0,
                state: FetchState::Loading,
                stats: AggregateStats::default(),
            }),
            snapshot_tx,
        }
    }

    /// Observe state transitions as immutable snapshots.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let inner = self.inner.lock().await;
        Self::to_snapshot(&inner)
    }

    /// Open a new fetch generation and publish Loading. Prior data and any
    /// prior error are discarded; an older in-flight request is superseded.
    pub async fn start(&self) -> u64 {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.state = FetchState::Loading;
        inner.stats = AggregateStats::default();
        self.publish(&inner);
        inner.generation
    }

    /// Resolve the fetch opened under `token`. A resolution whose token no
    /// longer matches the current generation is stale and is discarded.
    pub async fn complete(&self, token: u64, outcome: Result<Vec<Order>, NetworkError>) {
        let mut inner = self.inner.lock().await;
        if token != inner.generation {
            log::debug!(
                "discarding stale fetch resolution (generation {}, current {})",
                token,
                inner.generation
            );
            return;
        }

        match outcome {
            Ok(orders) => {
                inner.stats = analysis::aggregate(&orders);
                inner.state = FetchState::Ready(orders);
                log::info!(
                    "order fetch succeeded: {} orders (generation {})",
                    inner.stats.total,
                    token
                );
            }
            Err(err) => {
                log::error!("order fetch failed: {}", err);
                inner.stats = AggregateStats::default();
                inner.state = FetchState::Failed(FETCH_UNAVAILABLE_MSG.to_string());
            }
        }
        self.publish(&inner);
    }

    /// One full fetch cycle against the repository, bounded by the
    /// configured request timeout.
    pub async fn refresh(&self) {
        let token = self.start().await;

        let outcome = match timeout(self.request_timeout, self.repository.fetch_orders()).await {
            Ok(result) => result,
            Err(_) => Err(NetworkError::Timeout(self.request_timeout.as_secs())),
        };

        self.complete(token, outcome).await;
    }

    fn publish(&self, inner: &LifecycleState) {
        self.snapshot_tx.send_replace(Self::to_snapshot(inner));
    }

    fn to_snapshot(inner: &LifecycleState) -> DashboardSnapshot {
        DashboardSnapshot {
            generation: inner.generation,
            state: inner.state.clone(),
            stats: inner.stats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use async_trait::async_trait;

    use crate::domain::model::{Order, OrderId, OrderStatus};

    /// Replays queued responses, then keeps answering with an empty list.
    struct ScriptedRepository {
        responses: Mutex<VecDeque<Result<Vec<Order>, NetworkError>>>,
    }

    impl ScriptedRepository {
        fn new(responses: Vec<Result<Vec<Order>, NetworkError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait]
    impl OrderRepository for ScriptedRepository {
        async fn fetch_orders(&self) -> Result<Vec<Order>, NetworkError> {
            self.responses
                .lock()
                .await
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    /// Never resolves; exercises the timeout bound.
    struct HungRepository;

    #[async_trait]
    impl OrderRepository for HungRepository {
        async fn fetch_orders(&self) -> Result<Vec<Order>, NetworkError> {
            std::future::pending().await
        }
    }

    fn order(id: i64, status: OrderStatus) -> Order {
        Order::new(OrderId::Number(id), status)
    }

    fn lifecycle_with(
        responses: Vec<Result<Vec<Order>, NetworkError>>,
    ) -> FetchLifecycle {
        FetchLifecycle::new(
            Arc::new(ScriptedRepository::new(responses)),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn success_with_empty_payload_is_ready_without_error() {
        let lifecycle = lifecycle_with(vec![Ok(Vec::new())]);
        lifecycle.refresh().await;

        let snapshot = lifecycle.snapshot().await;
        assert_eq!(snapshot.state, FetchState::Ready(Vec::new()));
        assert_eq!(snapshot.state.error(), None);
        assert_eq!(snapshot.stats, AggregateStats::default());
    }

    #[tokio::test]
    async fn failure_reports_the_fixed_message_and_zero_stats() {
        let lifecycle = lifecycle_with(vec![Err(NetworkError::Connection(
            "connection refused".to_string(),
        ))]);
        lifecycle.refresh().await;

        let snapshot = lifecycle.snapshot().await;
        assert_eq!(
            snapshot.state,
            FetchState::Failed(FETCH_UNAVAILABLE_MSG.to_string())
        );
        assert_eq!(snapshot.stats, AggregateStats::default());
        assert!(snapshot.state.orders().is_empty());
    }

    #[tokio::test]
    async fn success_after_failure_clears_the_error() {
        let lifecycle = lifecycle_with(vec![
            Err(NetworkError::Status(502)),
            Ok(vec![order(1, OrderStatus::Ongoing)]),
        ]);

        lifecycle.refresh().await;
        assert!(lifecycle.snapshot().await.state.error().is_some());

        lifecycle.refresh().await;
        let snapshot = lifecycle.snapshot().await;
        assert_eq!(snapshot.state.error(), None);
        assert_eq!(snapshot.stats.ongoing, 1);
        assert_eq!(snapshot.stats.total, 1);
    }

    #[tokio::test]
    async fn stats_are_recomputed_on_every_ready_transition() {
        let lifecycle = lifecycle_with(vec![Ok(vec![
            order(1, OrderStatus::Ongoing),
            order(2, OrderStatus::Completed),
            order(3, OrderStatus::Completed),
            order(4, OrderStatus::Cancelled),
        ])]);
        lifecycle.refresh().await;

        let stats = lifecycle.snapshot().await.stats;
        assert_eq!(stats.total, 4);
        assert_eq!(stats.ongoing, 1);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.cancelled, 1);
    }

    #[tokio::test]
    async fn a_stale_resolution_never_overwrites_the_current_generation() {
        let lifecycle = lifecycle_with(vec![]);

        let stale = lifecycle.start().await;
        let current = lifecycle.start().await;
        assert!(current > stale);

        lifecycle
            .complete(stale, Ok(vec![order(1, OrderStatus::Ongoing)]))
            .await;
        let snapshot = lifecycle.snapshot().await;
        assert!(snapshot.state.is_loading());
        assert_eq!(snapshot.generation, current);

        lifecycle
            .complete(current, Ok(vec![order(2, OrderStatus::Completed)]))
            .await;
        let snapshot = lifecycle.snapshot().await;
        assert_eq!(snapshot.stats.completed, 1);
        assert_eq!(snapshot.generation, current);
    }

    #[tokio::test]
    async fn a_hung_request_resolves_to_failed_within_the_bound() {
        let lifecycle =
            FetchLifecycle::new(Arc::new(HungRepository), Duration::from_millis(20));
        lifecycle.refresh().await;

        let snapshot = lifecycle.snapshot().await;
        assert_eq!(
            snapshot.state,
            FetchState::Failed(FETCH_UNAVAILABLE_MSG.to_string())
        );
    }

    #[tokio::test]
    async fn observers_see_loading_then_the_terminal_state() {
        let lifecycle = lifecycle_with(vec![Ok(vec![order(1, OrderStatus::Ongoing)])]);
        let mut rx = lifecycle.subscribe();

        let token = lifecycle.start().await;
        rx.changed().await.unwrap();
        assert!(rx.borrow().state.is_loading());

        lifecycle
            .complete(token, Ok(vec![order(1, OrderStatus::Ongoing)]))
            .await;
        rx.changed().await.unwrap();
        let snapshot = rx.borrow().clone();
        assert_eq!(snapshot.stats.ongoing, 1);
        assert!(!snapshot.state.is_loading());
    }
}
