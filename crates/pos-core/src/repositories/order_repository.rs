//! Order repository trait (port)

use async_trait::async_trait;

use crate::domain::{NewOrder, Order, OrderStatus};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// `idempotency_key` lets the backend collapse replays of the same
    /// submission.
    async fn create_order(&self, order: &NewOrder, idempotency_key: &str) -> Result<Order, DomainError>;
    async fn list_orders(&self) -> Result<Vec<Order>, DomainError>;
    async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order, DomainError>;
}
