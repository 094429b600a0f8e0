// ============================================================================
// POS Infrastructure - HTTP Payment Repository
// File: crates/pos-infrastructure/src/http/payment_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use uuid::Uuid;

use pos_core::domain::{NewPayment, Payment};
use pos_core::error::DomainError;
use pos_core::repositories::PaymentRepository;

use super::HttpClient;

pub struct HttpPaymentRepository {
    client: HttpClient,
}

impl HttpPaymentRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentRepository for HttpPaymentRepository {
    async fn register_payment(&self, payment: &NewPayment) -> Result<Payment, DomainError> {
        // Retries of one registration must not charge twice.
        let key = Uuid::new_v4().to_string();
        self.client.post("payments", payment, Some(&key)).await
    }
}
