// ============================================================================
// POS Core - Poller
// File: crates/pos-core/src/services/poller.rs
// Description: Interval tasks feeding PosEvents to the terminal
// ============================================================================

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::events::PosEvent;
use crate::repositories::{CatalogRepository, OrderRepository};
use crate::services::{CatalogService, OrderService};

/// Running poll task. Dropping the handle stops the task.
#[derive(Debug)]
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns interval tasks that push events into one channel
#[derive(Clone)]
pub struct Poller {
    event_tx: mpsc::Sender<PosEvent>,
}

impl Poller {
    pub fn new(event_tx: mpsc::Sender<PosEvent>) -> Self {
        Self { event_tx }
    }

    pub fn poll_catalog<R>(&self, service: Arc<CatalogService<R>>, every: Duration) -> PollHandle
    where
        R: CatalogRepository + 'static,
    {
        self.spawn("catalog", every, move || {
            let service = service.clone();
            async move {
                match service.fetch_snapshot().await {
                    Ok(snapshot) => PosEvent::CatalogRefreshed(snapshot),
                    Err(e) => PosEvent::RefreshFailed(e.to_string()),
                }
            }
        })
    }

    pub fn poll_orders<R>(&self, service: Arc<OrderService<R>>, every: Duration) -> PollHandle
    where
        R: OrderRepository + 'static,
    {
        self.spawn("orders", every, move || {
            let service = service.clone();
            async move {
                match service.list_orders().await {
                    Ok(orders) => PosEvent::OrdersRefreshed(orders),
                    Err(e) => {
                        warn!("Order refresh failed: {}", e);
                        PosEvent::RefreshFailed(e.to_string())
                    }
                }
            }
        })
    }

    /// Clock for elapsed-time displays.
    pub fn tick(&self, every: Duration) -> PollHandle {
        self.spawn("clock", every, || async { PosEvent::Tick(Utc::now()) })
    }

    fn spawn<F, Fut>(&self, name: &'static str, every: Duration, mut poll: F) -> PollHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = PosEvent> + Send + 'static,
    {
        let event_tx = self.event_tx.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let event = poll().await;
                if event_tx.send(event).await.is_err() {
                    debug!("{} poll stopped: receiver closed", name);
                    break;
                }
            }
        });

        PollHandle { task }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::repositories::{MockCatalogRepository, MockOrderRepository};
    use crate::services::fixtures::{at, order};
    use crate::domain::OrderStatus;

    #[tokio::test(start_paused = true)]
    async fn test_tick_repeats_until_dropped() {
        let (tx, mut rx) = mpsc::channel(8);
        let poller = Poller::new(tx);
        let handle = poller.tick(Duration::from_secs(1));
        drop(poller);

        for _ in 0..3 {
            assert!(matches!(rx.recv().await, Some(PosEvent::Tick(_))));
        }

        drop(handle);
        while let Some(event) = rx.recv().await {
            assert!(matches!(event, PosEvent::Tick(_)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_orders_poll_reports_failures() {
        let mut repo = MockOrderRepository::new();
        let mut calls = 0;
        repo.expect_list_orders().returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![order("1", OrderStatus::Pending, at("2026-03-01T10:00:00Z"))])
            } else {
                Err(DomainError::Transport("timeout".into()))
            }
        });

        let (tx, mut rx) = mpsc::channel(8);
        let _handle = Poller::new(tx).poll_orders(Arc::new(OrderService::new(Arc::new(repo))), Duration::from_secs(10));

        match rx.recv().await {
            Some(PosEvent::OrdersRefreshed(orders)) => assert_eq!(orders.len(), 1),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(matches!(rx.recv().await, Some(PosEvent::RefreshFailed(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_catalog_poll_emits_snapshot() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_fetch_products().returning(|| Ok(vec![]));
        repo.expect_fetch_combos().returning(|| Ok(vec![]));
        repo.expect_fetch_categories().returning(|| Ok(vec![]));
        repo.expect_fetch_spaces().returning(|| Ok(vec![]));
        repo.expect_fetch_payment_methods().returning(|| Ok(vec![]));

        let (tx, mut rx) = mpsc::channel(8);
        let handle = Poller::new(tx).poll_catalog(Arc::new(CatalogService::new(Arc::new(repo))), Duration::from_secs(30));

        assert!(matches!(rx.recv().await, Some(PosEvent::CatalogRefreshed(_))));
        assert!(!handle.is_finished());
        handle.cancel();
    }
}
