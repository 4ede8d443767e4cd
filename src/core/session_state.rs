//! Read-only snapshot of the game session, delivered by the session
//! service.
//!
//! The service owns every collection here and performs all mutation
//! (inventory changes, reward recording) on its side; the client core
//! only reads the snapshot it was handed. Key names follow the service's
//! camelCase JSON so snapshots decode as-is.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::farm::types::{Chicken, CropPlot, FruitPatch};
use crate::items::types::ItemName;
use crate::treasure::types::{RewardRecord, TreasureIsland};

/// Snapshot of the session's resource mappings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "sessionId", default)]
    pub session_id: String,
    /// Field plots keyed by plot id.
    #[serde(default)]
    pub crops: HashMap<String, CropPlot>,
    #[serde(rename = "fruitPatches", default)]
    pub fruit_patches: HashMap<String, FruitPatch>,
    #[serde(default)]
    pub chickens: HashMap<String, Chicken>,
    /// Item quantities held by the player.
    #[serde(default)]
    pub inventory: HashMap<ItemName, u32>,
    #[serde(rename = "treasureIsland", default)]
    pub treasure_island: Option<TreasureIsland>,
}

impl SessionState {
    /// Creates an empty snapshot with a fresh session id.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            ..Self::default()
        }
    }

    /// Decodes a snapshot from the service's JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decodes a snapshot, falling back to an empty one if the payload is
    /// missing fields or malformed.
    pub fn from_json_or_default(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// The recorded reward for a treasure hole, if it was ever dug.
    pub fn hole_reward(&self, hole_id: u32) -> Option<&RewardRecord> {
        self.treasure_island.as_ref()?.holes.get(&hole_id)
    }

    /// Whether this hole hides the island's rare treasure.
    pub fn is_rare_treasure_hole(&self, hole_id: u32) -> bool {
        self.treasure_island
            .as_ref()
            .and_then(|island| island.rare_treasure.as_ref())
            .map_or(false, |rare| rare.hole_id == hole_id)
    }
}
