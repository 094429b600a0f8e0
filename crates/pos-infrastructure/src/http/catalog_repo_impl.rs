// ============================================================================
// POS Infrastructure - HTTP Catalog Repository
// File: crates/pos-infrastructure/src/http/catalog_repo_impl.rs
// ============================================================================

use async_trait::async_trait;

use pos_core::domain::{Category, Combo, PaymentMethod, Product, Space};
use pos_core::error::DomainError;
use pos_core::repositories::CatalogRepository;

use super::HttpClient;

pub struct HttpCatalogRepository {
    client: HttpClient,
}

impl HttpCatalogRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogRepository for HttpCatalogRepository {
    async fn fetch_products(&self) -> Result<Vec<Product>, DomainError> {
        self.client.get("products").await
    }

    async fn fetch_combos(&self) -> Result<Vec<Combo>, DomainError> {
        self.client.get("combos").await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.client.get("categories").await
    }

    async fn fetch_spaces(&self) -> Result<Vec<Space>, DomainError> {
        self.client.get("spaces").await
    }

    async fn fetch_payment_methods(&self) -> Result<Vec<PaymentMethod>, DomainError> {
        self.client.get("payment-methods").await
    }
}
