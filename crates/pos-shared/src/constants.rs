//! Application-wide constants

/// Combos default to a single pick per component type.
pub const DEFAULT_MAX_SELECTIONS: u32 = 1;
/// Every combo instance must carry at least this many sauce units.
pub const MIN_SAUCES_PER_COMBO: u32 = 1;

pub const MAX_CUSTOMER_NAME_LENGTH: u64 = 100;
pub const MAX_CUSTOMER_PHONE_LENGTH: u64 = 20;
pub const MAX_NOTES_LENGTH: u64 = 500;

pub const DEFAULT_CATALOG_POLL_SECS: u64 = 30;
pub const DEFAULT_ORDERS_POLL_SECS: u64 = 10;
pub const DEFAULT_CLOCK_TICK_MS: u64 = 1000;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_RETRY_MAX_TIMES: usize = 3;
pub const DEFAULT_RETRY_MIN_DELAY_MS: u64 = 200;
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 5000;

pub const DEFAULT_KITCHEN_OVERDUE_MINUTES: i64 = 20;

pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";
