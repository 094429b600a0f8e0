// ============================================================================
// POS Core - Order Entities
// File: crates/pos-core/src/domain/order.rs
// Description: Backend-owned orders and the order-create wire payload
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use pos_shared::{deserialize_id, deserialize_opt_id, EntityId, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Space;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    InPrep,
    Ready,
    Delivered,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::InPrep => "IN_PREP",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Paid => "PAID",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(OrderStatus::Pending),
            "IN_PREP" => Some(OrderStatus::InPrep),
            "READY" => Some(OrderStatus::Ready),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "PAID" => Some(OrderStatus::Paid),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Cancelled)
    }

    /// Statuses the kitchen board still shows.
    pub fn is_in_kitchen(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::InPrep | OrderStatus::Ready)
    }

    /// Forward step along PENDING → IN_PREP → READY → DELIVERED → PAID.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InPrep),
            OrderStatus::InPrep => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => Some(OrderStatus::Paid),
            OrderStatus::Paid | OrderStatus::Cancelled => None,
        }
    }

    pub fn can_transition_to(&self, to: OrderStatus) -> bool {
        if to == OrderStatus::Cancelled {
            return self.is_in_kitchen();
        }
        self.next() == Some(to)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line of a submitted order as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub product_id: Option<EntityId>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub combo_id: Option<EntityId>,
    pub name: String,
    pub unit_price: Money,
    pub total_price: Money,
    pub quantity: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl OrderItem {
    pub fn is_combo(&self) -> bool {
        self.combo_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    #[serde(deserialize_with = "deserialize_id")]
    pub order_number: EntityId,
    pub status: OrderStatus,
    pub total_amount: Money,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub space: Option<Space>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        (now - self.created_at).max(Duration::zero())
    }

    pub fn is_closed(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).fold(0, u32::saturating_add)
    }
}

/// Order line in the order-create payload.
///
/// Exactly one of `product_id` / `combo_id` is set. Both are always
/// serialized, the unused one as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub product_id: Option<EntityId>,
    pub combo_id: Option<EntityId>,
    pub name: String,
    pub unit_price: Money,
    pub total_price: Money,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewOrderItem {
    pub fn for_product(
        product_id: EntityId,
        name: String,
        unit_price: Money,
        quantity: u32,
        notes: Option<String>,
    ) -> Self {
        Self {
            product_id: Some(product_id),
            combo_id: None,
            name,
            unit_price,
            total_price: unit_price * Decimal::from(quantity),
            quantity,
            notes,
        }
    }

    pub fn for_combo(
        combo_id: EntityId,
        name: String,
        unit_price: Money,
        quantity: u32,
        notes: String,
    ) -> Self {
        Self {
            product_id: None,
            combo_id: Some(combo_id),
            name,
            unit_price,
            total_price: unit_price * Decimal::from(quantity),
            quantity,
            notes: Some(notes),
        }
    }

    pub fn is_well_tagged(&self) -> bool {
        self.product_id.is_some() != self.combo_id.is_some()
    }
}

/// Order-create request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub space_id: EntityId,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub total_amount: Money,
    pub items: Vec<NewOrderItem>,
}

/// Status transition request body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let status: OrderStatus = serde_json::from_str("\"IN_PREP\"").unwrap();
        assert_eq!(status, OrderStatus::InPrep);
        assert_eq!(
            serde_json::to_string(&StatusUpdate { status: OrderStatus::Cancelled }).unwrap(),
            r#"{"status":"CANCELLED"}"#
        );
        assert_eq!(OrderStatus::from_str("ready"), Some(OrderStatus::Ready));
    }

    #[test]
    fn test_status_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::InPrep));
        assert!(OrderStatus::Ready.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Ready));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::Cancelled));
        assert_eq!(OrderStatus::Cancelled.next(), None);
    }

    #[test]
    fn test_new_order_item_tagging_on_the_wire() {
        let item = NewOrderItem::for_product(
            "p1".into(),
            "Maki".into(),
            Decimal::new(2590, 2),
            2,
            None,
        );
        assert!(item.is_well_tagged());
        assert_eq!(item.total_price, Decimal::new(5180, 2));

        let json: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(json["productId"], "p1");
        assert!(json["comboId"].is_null());
        assert!(json.get("notes").is_none());
        assert_eq!(json["unitPrice"].as_f64(), Some(25.9));
    }

    #[test]
    fn test_order_elapsed_never_negative() {
        let json = r#"{
            "id": 1, "orderNumber": 1001, "status": "PENDING", "totalAmount": 30,
            "customerName": "Ana", "createdAt": "2026-01-01T12:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        let later = order.created_at + Duration::minutes(3);
        assert_eq!(order.elapsed(later), Duration::minutes(3));
        assert_eq!(order.elapsed(order.created_at - Duration::minutes(1)), Duration::zero());
        assert_eq!(order.order_number, "1001");
    }
}
