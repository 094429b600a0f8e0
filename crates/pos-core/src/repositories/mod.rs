//! Repository traits (ports)
//!
//! The backend is the source of truth. Implementations live in
//! pos-infrastructure.

pub mod catalog_repository;
pub mod order_repository;
pub mod payment_repository;

pub use catalog_repository::CatalogRepository;
pub use order_repository::OrderRepository;
pub use payment_repository::PaymentRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
