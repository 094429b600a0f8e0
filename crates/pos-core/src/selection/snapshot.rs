//! Frozen selection snapshot
//!
//! The snapshot travels to the backend as the JSON `notes` of a combo order
//! line, so its serialized shape is part of the wire contract:
//!
//! ```json
//! {"components":{"flavor":[{"name":"California","quantity":1}]},
//!  "sauces":[{"name":"Acevichada","quantity":1}],
//!  "utensils":{"normal":1,"assisted":0}}
//! ```

use pos_shared::constants::MIN_SAUCES_PER_COMBO;
use pos_shared::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Combo, ComponentType, Sauce};
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPick {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaucePick {
    #[serde(rename = "name")]
    pub sauce: Sauce,
    pub quantity: u32,
}

/// Chopstick counts: regular and training ("assisted") pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utensils {
    pub normal: u32,
    pub assisted: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenSelection {
    pub components: BTreeMap<ComponentType, Vec<ComponentPick>>,
    pub sauces: Vec<SaucePick>,
    #[serde(default)]
    pub utensils: Utensils,
}

impl FrozenSelection {
    pub fn to_notes(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_notes(notes: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(notes)?)
    }

    pub fn quantity_for(&self, component_type: &ComponentType) -> u32 {
        self.components
            .get(component_type)
            .map(|picks| picks.iter().map(|p| p.quantity).fold(0, u32::saturating_add))
            .unwrap_or(0)
    }

    pub fn sauce_total(&self) -> u32 {
        self.sauces.iter().map(|s| s.quantity).fold(0, u32::saturating_add)
    }

    /// Sum of component surcharges for the picked quantities.
    pub fn surcharge(&self, combo: &Combo) -> Money {
        self.components
            .iter()
            .flat_map(|(ty, picks)| picks.iter().map(move |p| (ty, p)))
            .filter_map(|(ty, pick)| {
                combo
                    .find_component(ty, &pick.name)
                    .map(|c| c.price * Decimal::from(pick.quantity))
            })
            .sum()
    }

    /// Re-checks every selection rule against `combo`. Guards snapshots that
    /// were not produced by [`super::ComboSelection::freeze`].
    pub fn check_against(&self, combo: &Combo) -> Result<(), DomainError> {
        if !combo.has_components() {
            return Err(DomainError::InvalidSelection(format!(
                "combo '{}' has no components configured",
                combo.name
            )));
        }
        for (ty, picks) in &self.components {
            for pick in picks {
                if combo.find_component(ty, &pick.name).is_none() {
                    return Err(DomainError::UnknownComponent {
                        component_type: ty.to_string(),
                        name: pick.name.clone(),
                    });
                }
            }
            if self.quantity_for(ty) > combo.max_selections {
                return Err(DomainError::InvalidSelection(format!(
                    "more than {} picks for '{}'",
                    combo.max_selections, ty
                )));
            }
        }
        if let Some(missing) = combo
            .required_components()
            .find(|c| self.quantity_for(&c.component_type) == 0)
        {
            return Err(DomainError::InvalidSelection(format!(
                "'{}' requires a pick",
                missing.component_type
            )));
        }
        if self.sauce_total() < MIN_SAUCES_PER_COMBO {
            return Err(DomainError::InvalidSelection("at least one sauce is required".into()));
        }
        Ok(())
    }
}
