//! Common types

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned identifier. Opaque to the client.
pub type EntityId = String;

/// Exact monetary amount.
pub type Money = Decimal;

/// How a customized combo is priced when it enters the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboPricing {
    /// Flat base price regardless of the chosen components.
    FlatBase,
    /// Base price plus every selected component's surcharge times its quantity.
    BasePlusSurcharges,
}

impl ComboPricing {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComboPricing::FlatBase => "flat_base",
            ComboPricing::BasePlusSurcharges => "base_plus_surcharges",
        }
    }
}

impl Default for ComboPricing {
    fn default() -> Self {
        ComboPricing::FlatBase
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for EntityId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Accepts an identifier sent either as a JSON string or a JSON number.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<EntityId, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(EntityId::from)
}

/// Optional counterpart of [`deserialize_id`]; pair with `#[serde(default)]`.
pub fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(EntityId::from))
}
