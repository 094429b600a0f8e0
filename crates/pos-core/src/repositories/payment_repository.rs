//! Payment repository trait (port)

use async_trait::async_trait;

use crate::domain::{NewPayment, Payment};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn register_payment(&self, payment: &NewPayment) -> Result<Payment, DomainError>;
}
