//! Payment entities

use chrono::{DateTime, Utc};
use pos_shared::{deserialize_id, EntityId, Money};
use serde::{Deserialize, Serialize};

use super::default_true;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Payment registration request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub order_id: EntityId,
    pub payment_method_id: EntityId,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    #[serde(deserialize_with = "deserialize_id")]
    pub order_id: EntityId,
    #[serde(deserialize_with = "deserialize_id")]
    pub payment_method_id: EntityId,
    pub amount: Money,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
