// ============================================================================
// POS Core - Combo Entity
// File: crates/pos-core/src/domain/combo.rs
// Description: Configurable bundled meal and its selectable components
// ============================================================================

use pos_shared::{deserialize_id, deserialize_opt_id, EntityId, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{default_max_selections, default_true};

/// Component group tag ("flavor", "side", ...). The set is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentType(String);

impl ComponentType {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentType {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable option within a combo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboComponent {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Surcharge. Only applied under the `base_plus_surcharges` pricing policy.
    #[serde(default)]
    pub price: Money,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default = "default_max_selections")]
    pub max_selections: u32,
    #[serde(default)]
    pub ord: i32,
}

/// Bundled meal sold at `base_price`, configured through its components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
    pub base_price: Money,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub category_id: Option<EntityId>,
    /// Cap on the summed quantity of picks within each component type.
    #[serde(default = "default_max_selections")]
    pub max_selections: u32,
    #[serde(default)]
    pub components: Vec<ComboComponent>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl Combo {
    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }

    /// Available and configured with at least one component.
    pub fn is_purchasable(&self) -> bool {
        self.is_available && self.has_components()
    }

    pub fn find_component(&self, component_type: &ComponentType, name: &str) -> Option<&ComboComponent> {
        self.components
            .iter()
            .find(|c| &c.component_type == component_type && c.name == name)
    }

    /// Component types in presentation order (lowest `ord` first).
    pub fn component_types(&self) -> Vec<ComponentType> {
        let mut types: Vec<(i32, &ComponentType)> = Vec::new();
        for component in &self.components {
            match types.iter_mut().find(|(_, t)| *t == &component.component_type) {
                Some(entry) => entry.0 = entry.0.min(component.ord),
                None => types.push((component.ord, &component.component_type)),
            }
        }
        types.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        types.into_iter().map(|(_, t)| t.clone()).collect()
    }

    pub fn components_of(&self, component_type: &ComponentType) -> Vec<&ComboComponent> {
        let mut group: Vec<&ComboComponent> = self
            .components
            .iter()
            .filter(|c| &c.component_type == component_type)
            .collect();
        group.sort_by(|a, b| a.ord.cmp(&b.ord).then_with(|| a.name.cmp(&b.name)));
        group
    }

    pub fn required_components(&self) -> impl Iterator<Item = &ComboComponent> {
        self.components.iter().filter(|c| c.is_required)
    }
}
