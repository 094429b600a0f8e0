// ============================================================================
// POS Core - Payment Service
// File: crates/pos-core/src/services/payment_service.rs
// ============================================================================
//! Payment registration against a delivered or open order

use std::sync::Arc;
use tracing::{info, warn};

use pos_shared::utils::normalize_optional;
use pos_shared::Money;

use crate::domain::{NewPayment, Order, OrderStatus, Payment, PaymentMethod};
use crate::error::DomainError;
use crate::repositories::{OrderRepository, PaymentRepository};

/// Result of a registered payment
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub payment: Payment,
    /// Set when the payment settled the order and it was closed as PAID
    pub closed_order: Option<Order>,
    /// The payment is recorded but closing the order failed; retry the
    /// status change, not the payment.
    pub close_error: Option<String>,
}

pub struct PaymentService<P: PaymentRepository, O: OrderRepository> {
    payment_repo: Arc<P>,
    order_repo: Arc<O>,
}

impl<P: PaymentRepository, O: OrderRepository> PaymentService<P, O> {
    pub fn new(payment_repo: Arc<P>, order_repo: Arc<O>) -> Self {
        Self { payment_repo, order_repo }
    }

    pub async fn register(
        &self,
        order: &Order,
        method: &PaymentMethod,
        amount: Money,
        notes: Option<String>,
    ) -> Result<PaymentReceipt, DomainError> {
        if amount <= Money::ZERO {
            return Err(DomainError::InvalidPaymentAmount(amount.to_string()));
        }
        if order.is_closed() {
            return Err(DomainError::OrderClosed(order.order_number.clone()));
        }
        if !method.is_active {
            return Err(DomainError::PaymentMethodUnavailable(method.name.clone()));
        }

        let request = NewPayment {
            order_id: order.id.clone(),
            payment_method_id: method.id.clone(),
            amount,
            notes: normalize_optional(notes),
        };
        let payment = self.payment_repo.register_payment(&request).await?;
        info!("Payment {} of {} registered for order {}", payment.id, amount, order.order_number);

        let mut receipt = PaymentReceipt { payment, closed_order: None, close_error: None };

        // Settlement closes the order from any open status.
        if amount >= order.total_amount {
            match self.order_repo.update_status(&order.id, OrderStatus::Paid).await {
                Ok(updated) => receipt.closed_order = Some(updated),
                Err(e) => {
                    warn!("Payment recorded but closing order {} failed: {}", order.order_number, e);
                    receipt.close_error = Some(e.to_string());
                }
            }
        }

        Ok(receipt)
    }
}
