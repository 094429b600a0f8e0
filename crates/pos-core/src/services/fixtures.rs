//! Shared builders for service tests

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{Order, OrderStatus, PaymentMethod};

pub fn order(id: &str, status: OrderStatus, created_at: DateTime<Utc>) -> Order {
    Order {
        id: id.into(),
        order_number: format!("A-{id}"),
        status,
        total_amount: Decimal::new(8580, 2),
        items: vec![],
        space: None,
        customer_name: "Lucia".into(),
        customer_phone: None,
        notes: None,
        created_at,
        updated_at: None,
    }
}

pub fn method(id: &str, is_active: bool) -> PaymentMethod {
    PaymentMethod {
        id: id.into(),
        name: format!("Method {id}"),
        is_active,
    }
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap()
}
