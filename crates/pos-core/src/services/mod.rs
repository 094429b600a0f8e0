//! Domain services (business logic)

pub mod catalog_service;
pub mod order_service;
pub mod kitchen;
pub mod payment_service;
pub mod poller;

pub use catalog_service::CatalogService;
pub use order_service::OrderService;
pub use kitchen::KitchenBoard;
pub use payment_service::{PaymentReceipt, PaymentService};
pub use poller::{PollHandle, Poller};

#[cfg(test)]
pub(crate) mod fixtures;
