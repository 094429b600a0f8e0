//! # POS Infrastructure
//!
//! HTTP implementations (adapters) of the pos-core repository traits.

pub mod http;

pub use http::{HttpCatalogRepository, HttpClient, HttpOrderRepository, HttpPaymentRepository};
