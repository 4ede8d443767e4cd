use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of inventory item names the client core reads: the digging
/// tool and the treasure-island yields a reveal can produce.
///
/// Serialized names match the session service's JSON, which uses the
/// human-readable item strings as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemName {
    #[serde(rename = "Sand Shovel")]
    SandShovel,
    #[serde(rename = "Sand Drill")]
    SandDrill,
    Pearl,
    Coral,
    #[serde(rename = "Clam Shell")]
    ClamShell,
    #[serde(rename = "Sea Cucumber")]
    SeaCucumber,
    Crab,
    Starfish,
    Seaweed,
    #[serde(rename = "Pirate Bounty")]
    PirateBounty,
    #[serde(rename = "Wooden Compass")]
    WoodenCompass,
}

impl ItemName {
    /// Returns the display name for this item.
    pub fn name(&self) -> &'static str {
        match self {
            ItemName::SandShovel => "Sand Shovel",
            ItemName::SandDrill => "Sand Drill",
            ItemName::Pearl => "Pearl",
            ItemName::Coral => "Coral",
            ItemName::ClamShell => "Clam Shell",
            ItemName::SeaCucumber => "Sea Cucumber",
            ItemName::Crab => "Crab",
            ItemName::Starfish => "Starfish",
            ItemName::Seaweed => "Seaweed",
            ItemName::PirateBounty => "Pirate Bounty",
            ItemName::WoodenCompass => "Wooden Compass",
        }
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
