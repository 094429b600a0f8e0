// ============================================================================
// POS Infrastructure - HTTP Order Repository
// File: crates/pos-infrastructure/src/http/order_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::info;

use pos_core::domain::{NewOrder, Order, OrderStatus, StatusUpdate};
use pos_core::error::DomainError;
use pos_core::repositories::OrderRepository;

use super::HttpClient;

pub struct HttpOrderRepository {
    client: HttpClient,
}

impl HttpOrderRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn create_order(&self, order: &NewOrder, idempotency_key: &str) -> Result<Order, DomainError> {
        let created: Order = self.client.post("orders", order, Some(idempotency_key)).await?;
        info!("Backend accepted order {} ({})", created.order_number, created.id);
        Ok(created)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.client.get("orders").await
    }

    async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order, DomainError> {
        self.client
            .put(&format!("orders/{}/status", order_id), &StatusUpdate { status })
            .await
    }
}
