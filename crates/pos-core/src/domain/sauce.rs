//! Sauce extras
//!
//! Sauces live outside any combo definition and are not counted against
//! component slots.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sauce {
    Acevichada,
    Anguila,
    #[serde(rename = "Maracuyá", alias = "Maracuya")]
    Maracuya,
    Olivo,
    #[serde(rename = "Spicy Mayo")]
    SpicyMayo,
    Teriyaki,
    Tare,
}

impl Sauce {
    pub const ALL: [Sauce; 7] = [
        Sauce::Acevichada,
        Sauce::Anguila,
        Sauce::Maracuya,
        Sauce::Olivo,
        Sauce::SpicyMayo,
        Sauce::Teriyaki,
        Sauce::Tare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sauce::Acevichada => "Acevichada",
            Sauce::Anguila => "Anguila",
            Sauce::Maracuya => "Maracuyá",
            Sauce::Olivo => "Olivo",
            Sauce::SpicyMayo => "Spicy Mayo",
            Sauce::Teriyaki => "Teriyaki",
            Sauce::Tare => "Tare",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        if wanted == "maracuya" {
            return Some(Sauce::Maracuya);
        }
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().to_lowercase() == wanted)
    }
}

impl fmt::Display for Sauce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
