//! Terminal Events
//!
//! Events sent from background polling tasks to whoever renders state.

use chrono::{DateTime, Utc};

use crate::domain::{CatalogSnapshot, Order};

/// Events pushed by the poller
#[derive(Debug, Clone)]
pub enum PosEvent {
    /// Fresh catalog; replaces the previous snapshot wholesale
    CatalogRefreshed(CatalogSnapshot),
    /// Current order list from the backend
    OrdersRefreshed(Vec<Order>),
    /// Local clock tick for elapsed-time displays
    Tick(DateTime<Utc>),
    /// A refresh failed; previous data stays in place
    RefreshFailed(String),
}
