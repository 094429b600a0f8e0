// ============================================================================
// POS Core - Catalog Service
// File: crates/pos-core/src/services/catalog_service.rs
// ============================================================================
//! Loads the menu, spaces and payment methods into one snapshot

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::CatalogSnapshot;
use crate::error::DomainError;
use crate::repositories::CatalogRepository;

pub struct CatalogService<R: CatalogRepository> {
    catalog_repo: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(catalog_repo: Arc<R>) -> Self {
        Self { catalog_repo }
    }

    /// Fetch every list concurrently. One failure fails the whole snapshot
    /// so callers never mix data from two refreshes.
    pub async fn fetch_snapshot(&self) -> Result<CatalogSnapshot, DomainError> {
        let repo = &self.catalog_repo;
        let (products, combos, categories, spaces, payment_methods) = futures::try_join!(
            repo.fetch_products(),
            repo.fetch_combos(),
            repo.fetch_categories(),
            repo.fetch_spaces(),
            repo.fetch_payment_methods(),
        )
        .inspect_err(|e| warn!("Catalog refresh failed: {}", e))?;

        info!(
            products = products.len(),
            combos = combos.len(),
            spaces = spaces.len(),
            "Catalog refreshed"
        );

        Ok(CatalogSnapshot::new(products, combos, categories, spaces, payment_methods))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Combo, ComboComponent, Space, SpaceStatus};
    use crate::repositories::MockCatalogRepository;
    use rust_decimal::Decimal;

    fn combo(id: &str, components: Vec<ComboComponent>) -> Combo {
        Combo {
            id: id.into(),
            name: format!("Combo {id}"),
            base_price: Decimal::new(5990, 2),
            category_id: None,
            max_selections: 1,
            components,
            is_available: true,
        }
    }

    fn component() -> ComboComponent {
        ComboComponent {
            id: "c-1".into(),
            name: "Acevichado".into(),
            component_type: "Maki".into(),
            price: Decimal::ZERO,
            is_required: false,
            max_selections: 1,
            ord: 0,
        }
    }

    fn mock_repo() -> MockCatalogRepository {
        let mut repo = MockCatalogRepository::new();
        repo.expect_fetch_products().returning(|| Ok(vec![]));
        repo.expect_fetch_combos()
            .returning(|| Ok(vec![combo("1", vec![component()]), combo("2", vec![])]));
        repo.expect_fetch_categories().returning(|| {
            Ok(vec![
                Category { id: "b".into(), name: "Bebidas".into(), ord: 2 },
                Category { id: "a".into(), name: "Entradas".into(), ord: 1 },
            ])
        });
        repo.expect_fetch_payment_methods().returning(|| Ok(vec![]));
        repo
    }

    #[tokio::test]
    async fn test_snapshot_combines_lists() {
        let mut repo = mock_repo();
        repo.expect_fetch_spaces().returning(|| {
            Ok(vec![Space {
                id: "s-1".into(),
                name: "Barra".into(),
                status: SpaceStatus::Available,
                capacity: None,
            }])
        });

        let service = CatalogService::new(Arc::new(repo));
        let snapshot = service.fetch_snapshot().await.unwrap();

        assert_eq!(snapshot.categories[0].name, "Entradas");
        assert_eq!(snapshot.purchasable_combos(None).len(), 1);
        assert_eq!(snapshot.free_spaces().len(), 1);
    }

    #[tokio::test]
    async fn test_one_failure_fails_snapshot() {
        let mut repo = mock_repo();
        repo.expect_fetch_spaces()
            .returning(|| Err(DomainError::Transport("connection refused".into())));

        let service = CatalogService::new(Arc::new(repo));
        let err = service.fetch_snapshot().await.unwrap_err();
        assert!(err.is_retryable());
    }
}
