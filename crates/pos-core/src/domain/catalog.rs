//! Catalog snapshot
//!
//! Immutable view of the menu as of one fetch. A refresh replaces the
//! whole snapshot; nothing mutates it in place.

use chrono::{DateTime, Utc};

use super::{Category, Combo, PaymentMethod, Product, Space, SpaceStatus};

#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub combos: Vec<Combo>,
    pub categories: Vec<Category>,
    pub spaces: Vec<Space>,
    pub payment_methods: Vec<PaymentMethod>,
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(
        products: Vec<Product>,
        combos: Vec<Combo>,
        mut categories: Vec<Category>,
        spaces: Vec<Space>,
        payment_methods: Vec<PaymentMethod>,
    ) -> Self {
        categories.sort_by(|a, b| a.ord.cmp(&b.ord).then_with(|| a.name.cmp(&b.name)));
        Self {
            products,
            combos,
            categories,
            spaces,
            payment_methods,
            fetched_at: Utc::now(),
        }
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_combo(&self, id: &str) -> Option<&Combo> {
        self.combos.iter().find(|c| c.id == id)
    }

    pub fn find_space(&self, id: &str) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id == id)
    }

    pub fn find_payment_method(&self, id: &str) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|m| m.id == id)
    }

    /// Available products, optionally restricted to one category.
    pub fn available_products(&self, category_id: Option<&str>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_available)
            .filter(|p| category_id.map_or(true, |c| p.in_category(c)))
            .collect()
    }

    /// Combos that may be offered for purchase. A combo without components
    /// is a configuration error and never shows up here.
    pub fn purchasable_combos(&self, category_id: Option<&str>) -> Vec<&Combo> {
        self.combos
            .iter()
            .filter(|c| c.is_purchasable())
            .filter(|c| category_id.map_or(true, |id| c.category_id.as_deref() == Some(id)))
            .collect()
    }

    pub fn free_spaces(&self) -> Vec<&Space> {
        self.spaces
            .iter()
            .filter(|s| s.status == SpaceStatus::Available)
            .collect()
    }

    pub fn active_payment_methods(&self) -> Vec<&PaymentMethod> {
        self.payment_methods.iter().filter(|m| m.is_active).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, category: &str, available: bool) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {}", id),
            price: Decimal::new(1000, 2),
            category_id: Some(category.into()),
            is_available: available,
        }
    }

    fn combo(id: &str, with_components: bool) -> Combo {
        let json = if with_components {
            format!(
                r#"{{"id": "{}", "name": "C", "basePrice": 20, "components": [{{"id": 1, "name": "California", "type": "flavor"}}]}}"#,
                id
            )
        } else {
            format!(r#"{{"id": "{}", "name": "C", "basePrice": 20}}"#, id)
        };
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_filters() {
        let snapshot = CatalogSnapshot::new(
            vec![product("1", "a", true), product("2", "b", true), product("3", "a", false)],
            vec![combo("c1", true), combo("c2", false)],
            vec![],
            vec![
                serde_json::from_str(r#"{"id": 1, "name": "Mesa 1", "status": "occupied"}"#).unwrap(),
                serde_json::from_str(r#"{"id": 2, "name": "Mesa 2"}"#).unwrap(),
            ],
            vec![],
        );

        assert_eq!(snapshot.available_products(Some("a")).len(), 1);
        assert_eq!(snapshot.available_products(None).len(), 2);
        let combos = snapshot.purchasable_combos(None);
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].id, "c1");
        assert_eq!(snapshot.free_spaces().len(), 1);
        assert!(snapshot.find_combo("c2").is_some());
    }
}
