//! # POS Shared
//!
//! Shared configuration, telemetry, types and constants for the POS workspace.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
