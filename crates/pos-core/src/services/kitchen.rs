// ============================================================================
// POS Core - Kitchen Board
// File: crates/pos-core/src/services/kitchen.rs
// Description: Active order queue with elapsed times and status advance
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::domain::{Order, OrderStatus};
use crate::error::DomainError;
use crate::events::PosEvent;
use crate::repositories::OrderRepository;
use crate::services::OrderService;

pub struct KitchenBoard {
    orders: Vec<Order>,
    overdue_after: Duration,
    now: DateTime<Utc>,
}

impl KitchenBoard {
    pub fn new(overdue_minutes: i64) -> Self {
        Self {
            orders: Vec::new(),
            overdue_after: Duration::minutes(overdue_minutes),
            now: Utc::now(),
        }
    }

    /// Last writer wins: a poll result replaces the whole list.
    pub fn replace(&mut self, orders: Vec<Order>) {
        debug!("Kitchen board refreshed with {} orders", orders.len());
        self.orders = orders;
    }

    /// Swap in a single order returned by a status update.
    pub fn apply(&mut self, order: Order) {
        match self.orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order,
            None => self.orders.push(order),
        }
    }

    pub fn set_now(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Feed a poller event. Returns true when the board changed.
    pub fn handle(&mut self, event: PosEvent) -> bool {
        match event {
            PosEvent::OrdersRefreshed(orders) => {
                self.replace(orders);
                true
            }
            PosEvent::Tick(now) => {
                self.set_now(now);
                true
            }
            PosEvent::CatalogRefreshed(_) | PosEvent::RefreshFailed(_) => false,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn find(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// PENDING / IN_PREP / READY orders, oldest first.
    pub fn active_queue(&self) -> Vec<&Order> {
        let mut queue: Vec<&Order> = self.orders.iter().filter(|o| o.status.is_in_kitchen()).collect();
        queue.sort_by_key(|o| o.created_at);
        queue
    }

    pub fn elapsed(&self, order: &Order) -> Duration {
        order.elapsed(self.now)
    }

    pub fn is_overdue(&self, order: &Order) -> bool {
        order.status.is_in_kitchen() && self.elapsed(order) >= self.overdue_after
    }

    /// Next kitchen status for an order still in the kitchen.
    pub fn next_status(&self, order_id: &str) -> Result<OrderStatus, DomainError> {
        let order = self
            .find(order_id)
            .ok_or_else(|| DomainError::OrderNotFound(order_id.to_string()))?;

        if !order.status.is_in_kitchen() {
            return Err(DomainError::OrderClosed(order.order_number.clone()));
        }
        order
            .status
            .next()
            .ok_or_else(|| DomainError::OrderClosed(order.order_number.clone()))
    }

    /// Push an order one step along the kitchen flow and record the result.
    pub async fn advance<R: OrderRepository>(
        &mut self,
        service: &OrderService<R>,
        order_id: &str,
    ) -> Result<Order, DomainError> {
        let next = self.next_status(order_id)?;
        let current = self
            .find(order_id)
            .cloned()
            .ok_or_else(|| DomainError::OrderNotFound(order_id.to_string()))?;

        let updated = service.transition(&current, next).await?;
        self.apply(updated.clone());
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockOrderRepository;
    use crate::services::fixtures::{at, order};
    use std::sync::Arc;

    fn board() -> KitchenBoard {
        let mut board = KitchenBoard::new(20);
        board.replace(vec![
            order("3", OrderStatus::Ready, at("2026-03-01T10:10:00Z")),
            order("1", OrderStatus::Pending, at("2026-03-01T10:05:00Z")),
            order("2", OrderStatus::Paid, at("2026-03-01T09:00:00Z")),
            order("4", OrderStatus::InPrep, at("2026-03-01T09:30:00Z")),
        ]);
        board.set_now(at("2026-03-01T10:20:00Z"));
        board
    }

    #[test]
    fn test_active_queue_is_oldest_first() {
        let board = board();
        let ids: Vec<&str> = board.active_queue().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "1", "3"]);
    }

    #[test]
    fn test_elapsed_and_overdue() {
        let board = board();
        let slow = board.find("4").unwrap();
        let fresh = board.find("3").unwrap();
        let paid = board.find("2").unwrap();

        assert_eq!(board.elapsed(slow), Duration::minutes(50));
        assert!(board.is_overdue(slow));
        assert!(!board.is_overdue(fresh));
        assert!(!board.is_overdue(paid));
    }

    #[test]
    fn test_handle_replaces_list() {
        let mut board = board();
        assert!(board.handle(PosEvent::OrdersRefreshed(vec![])));
        assert!(board.active_queue().is_empty());
        assert!(!board.handle(PosEvent::RefreshFailed("timeout".into())));
    }

    #[test]
    fn test_next_status() {
        let board = board();
        assert_eq!(board.next_status("1").unwrap(), OrderStatus::InPrep);
        assert_eq!(board.next_status("3").unwrap(), OrderStatus::Delivered);
        assert!(matches!(board.next_status("2"), Err(DomainError::OrderClosed(_))));
        assert!(matches!(board.next_status("x"), Err(DomainError::OrderNotFound(_))));
    }

    #[tokio::test]
    async fn test_advance_updates_board() {
        let mut repo = MockOrderRepository::new();
        repo.expect_update_status()
            .withf(|id, status| id == "1" && *status == OrderStatus::InPrep)
            .times(1)
            .returning(|id, status| Ok(order(id, status, at("2026-03-01T10:05:00Z"))));
        let service = OrderService::new(Arc::new(repo));

        let mut board = board();
        let updated = board.advance(&service, "1").await.unwrap();

        assert_eq!(updated.status, OrderStatus::InPrep);
        assert_eq!(board.find("1").unwrap().status, OrderStatus::InPrep);
    }
}
