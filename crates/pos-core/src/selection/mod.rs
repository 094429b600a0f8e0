//! Combo selection engine
//!
//! One engine serves both first-time customization and later modification of
//! a combo already in the cart (see [`ComboSelection::from_frozen`]).

mod engine;
mod snapshot;

pub use engine::{ComboSelection, PickOutcome, SelectionIssue};
pub use snapshot::{ComponentPick, FrozenSelection, SaucePick, Utensils};
