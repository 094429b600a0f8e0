//! Catalog repository trait (port)

use async_trait::async_trait;

use crate::domain::{Category, Combo, PaymentMethod, Product, Space};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, DomainError>;
    async fn fetch_combos(&self) -> Result<Vec<Combo>, DomainError>;
    async fn fetch_categories(&self) -> Result<Vec<Category>, DomainError>;
    async fn fetch_spaces(&self) -> Result<Vec<Space>, DomainError>;
    async fn fetch_payment_methods(&self) -> Result<Vec<PaymentMethod>, DomainError>;
}
