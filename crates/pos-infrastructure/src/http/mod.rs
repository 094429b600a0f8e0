//! REST backend adapters

pub mod client;
mod dto;
pub mod catalog_repo_impl;
pub mod order_repo_impl;
pub mod payment_repo_impl;

pub use client::HttpClient;
pub use catalog_repo_impl::HttpCatalogRepository;
pub use order_repo_impl::HttpOrderRepository;
pub use payment_repo_impl::HttpPaymentRepository;
