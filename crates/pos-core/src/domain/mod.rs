//! # POS Core - Domain Module
//!
//! Catalog and order entities as exchanged with the backend.

pub mod product;
pub mod combo;
pub mod sauce;
pub mod category;
pub mod space;
pub mod order;
pub mod payment;
pub mod catalog;

pub use product::Product;
pub use combo::{Combo, ComboComponent, ComponentType};
pub use sauce::Sauce;
pub use category::Category;
pub use space::{Space, SpaceStatus};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus, StatusUpdate};
pub use payment::{NewPayment, Payment, PaymentMethod};
pub use catalog::CatalogSnapshot;

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_max_selections() -> u32 {
    pos_shared::constants::DEFAULT_MAX_SELECTIONS
}
