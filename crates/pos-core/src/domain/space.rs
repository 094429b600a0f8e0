//! Dining space (table, bar seat, delivery counter)

use pos_shared::{deserialize_id, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceStatus {
    #[serde(alias = "AVAILABLE", alias = "free")]
    Available,
    #[serde(alias = "OCCUPIED")]
    Occupied,
    #[serde(alias = "RESERVED")]
    Reserved,
}

impl SpaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceStatus::Available => "available",
            SpaceStatus::Occupied => "occupied",
            SpaceStatus::Reserved => "reserved",
        }
    }
}

impl Default for SpaceStatus {
    fn default() -> Self {
        SpaceStatus::Available
    }
}

impl fmt::Display for SpaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub status: SpaceStatus,
    #[serde(default)]
    pub capacity: Option<u32>,
}

impl Space {
    pub fn is_occupied(&self) -> bool {
        self.status == SpaceStatus::Occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_status_aliases() {
        let space: Space =
            serde_json::from_str(r#"{"id": 4, "name": "Mesa 4", "status": "OCCUPIED"}"#).unwrap();
        assert!(space.is_occupied());

        let space: Space = serde_json::from_str(r#"{"id": "5", "name": "Barra"}"#).unwrap();
        assert_eq!(space.status, SpaceStatus::Available);
    }
}
