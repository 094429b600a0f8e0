//! Product catalog entity

use pos_shared::{deserialize_id, deserialize_opt_id, EntityId, Money};
use serde::{Deserialize, Serialize};

use super::default_true;

/// A plain menu item sold at a fixed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
    pub price: Money,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub category_id: Option<EntityId>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl Product {
    pub fn in_category(&self, category_id: &str) -> bool {
        self.category_id.as_deref() == Some(category_id)
    }
}
