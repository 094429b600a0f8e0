//! # POS Core
//!
//! Domain entities, the combo selection engine, the cart, the order wizard,
//! repository traits and services for the POS client.

pub mod domain;
pub mod selection;
pub mod cart;
pub mod wizard;
pub mod events;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use selection::{ComboSelection, FrozenSelection, PickOutcome, SelectionIssue};
pub use cart::{Cart, CartLine, LineId, LineItem};
pub use wizard::{CustomerInfo, OrderWizard, Step, Submission};
pub use error::{DomainError, ErrorKind};
pub use events::PosEvent;
