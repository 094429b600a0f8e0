// ============================================================================
// POS Core - Order Service
// File: crates/pos-core/src/services/order_service.rs
// ============================================================================
//! Order submission and status transitions

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{Order, OrderStatus};
use crate::error::DomainError;
use crate::repositories::OrderRepository;
use crate::wizard::{OrderWizard, Submission};

pub struct OrderService<R: OrderRepository> {
    order_repo: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(order_repo: Arc<R>) -> Self {
        Self { order_repo }
    }

    /// Submit the wizard's order. Exactly one create call per submission;
    /// the wizard is reset on success and left on the products step on
    /// failure. A resend after failure carries the same idempotency key.
    pub async fn submit(&self, wizard: &mut OrderWizard) -> Result<Order, DomainError> {
        let Submission { order: payload, idempotency_key } = wizard.begin_submit()?;

        info!(
            space_id = %payload.space_id,
            items = payload.items.len(),
            total = %payload.total_amount,
            "Submitting order"
        );

        match self.order_repo.create_order(&payload, &idempotency_key).await {
            Ok(order) => {
                wizard.on_submit_success(&order);
                Ok(order)
            }
            Err(e) => {
                wizard.on_submit_failed(&e);
                Err(e)
            }
        }
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.order_repo.list_orders().await
    }

    /// Move an order to `to`. Disallowed transitions fail locally.
    pub async fn transition(&self, order: &Order, to: OrderStatus) -> Result<Order, DomainError> {
        if !order.status.can_transition_to(to) {
            warn!("Rejected transition {} -> {} for order {}", order.status, to, order.id);
            return Err(DomainError::InvalidStatusTransition { from: order.status, to });
        }

        let updated = self.order_repo.update_status(&order.id, to).await?;
        info!("Order {} moved to {}", updated.order_number, updated.status);
        Ok(updated)
    }
}
