//! Farm resource records as they arrive in the session snapshot.
//!
//! The session service owns every collection here; the client core only
//! reads them. Member keys keep the service's camelCase JSON names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of crop names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropName {
    Sunflower,
    Potato,
    Pumpkin,
    Carrot,
    Cabbage,
    Beetroot,
    Cauliflower,
    Parsnip,
    Eggplant,
    Corn,
    Radish,
    Wheat,
    Kale,
}

impl fmt::Display for CropName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CropName::Sunflower => "Sunflower",
            CropName::Potato => "Potato",
            CropName::Pumpkin => "Pumpkin",
            CropName::Carrot => "Carrot",
            CropName::Cabbage => "Cabbage",
            CropName::Beetroot => "Beetroot",
            CropName::Cauliflower => "Cauliflower",
            CropName::Parsnip => "Parsnip",
            CropName::Eggplant => "Eggplant",
            CropName::Corn => "Corn",
            CropName::Radish => "Radish",
            CropName::Wheat => "Wheat",
            CropName::Kale => "Kale",
        };
        f.write_str(name)
    }
}

/// Closed set of fruit names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitName {
    Apple,
    Orange,
    Blueberry,
}

/// A crop growing in a field plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub name: CropName,
    /// Unix ms when the crop was planted.
    #[serde(rename = "plantedAt")]
    pub planted_at: i64,
}

/// A field plot; `crop` is `None` while the plot stands empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CropPlot {
    #[serde(default)]
    pub crop: Option<Crop>,
}

/// Fruit growing on a patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub name: FruitName,
}

/// A fruit patch; `fruit` is `None` between harvests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FruitPatch {
    #[serde(default)]
    pub fruit: Option<Fruit>,
}

/// A chicken; `fed_at` is set while a feed cycle is in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chicken {
    #[serde(rename = "fedAt", default)]
    pub fed_at: Option<i64>,
}
