use std::fmt;

use serde::{Deserialize, Serialize};

use crate::farm::types::CropName;

/// Closed set of equippable wearable names.
///
/// Serialized names match the session service's JSON item strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wearable {
    #[serde(rename = "Fruit Picker Apron")]
    FruitPickerApron,
    #[serde(rename = "Eggplant Onesie")]
    EggplantOnesie,
    #[serde(rename = "Corn Onesie")]
    CornOnesie,
    Parsnip,
    #[serde(rename = "Sunflower Amulet")]
    SunflowerAmulet,
    #[serde(rename = "Carrot Amulet")]
    CarrotAmulet,
    #[serde(rename = "Beetroot Amulet")]
    BeetrootAmulet,
    #[serde(rename = "Green Amulet")]
    GreenAmulet,
    #[serde(rename = "Angel Wings")]
    AngelWings,
    #[serde(rename = "Devil Wings")]
    DevilWings,
    Cattlegrim,
    #[serde(rename = "Infernal Pitchfork")]
    InfernalPitchfork,
    #[serde(rename = "Red Farmer Shirt")]
    RedFarmerShirt,
    #[serde(rename = "Blue Farmer Shirt")]
    BlueFarmerShirt,
    #[serde(rename = "Farmer Overalls")]
    FarmerOveralls,
    #[serde(rename = "Black Farmer Boots")]
    BlackFarmerBoots,
    #[serde(rename = "Farmer Pants")]
    FarmerPants,
}

/// Every wearable, for exhaustive iteration.
pub const ALL_WEARABLES: [Wearable; 17] = [
    Wearable::FruitPickerApron,
    Wearable::EggplantOnesie,
    Wearable::CornOnesie,
    Wearable::Parsnip,
    Wearable::SunflowerAmulet,
    Wearable::CarrotAmulet,
    Wearable::BeetrootAmulet,
    Wearable::GreenAmulet,
    Wearable::AngelWings,
    Wearable::DevilWings,
    Wearable::Cattlegrim,
    Wearable::InfernalPitchfork,
    Wearable::RedFarmerShirt,
    Wearable::BlueFarmerShirt,
    Wearable::FarmerOveralls,
    Wearable::BlackFarmerBoots,
    Wearable::FarmerPants,
];

/// Resource condition that must be clear before a wearable may be
/// withdrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawCondition {
    /// Every fruit patch must be empty.
    NoFruitGrowing,
    /// No planted crop may have the given name.
    NoCropOf(CropName),
    /// Every field plot must be empty.
    NoCropsGrowing,
    /// No chicken may currently be fed.
    NoFedChickens,
    /// Withdrawal is never allowed.
    Never,
}

impl Wearable {
    /// Maps this wearable to the condition gating its withdrawal.
    ///
    /// Wearables without a boost tied to live resources fall through to
    /// [`WithdrawCondition::Never`].
    pub fn withdraw_condition(&self) -> WithdrawCondition {
        match self {
            Wearable::FruitPickerApron => WithdrawCondition::NoFruitGrowing,
            Wearable::EggplantOnesie => WithdrawCondition::NoCropOf(CropName::Eggplant),
            Wearable::CornOnesie => WithdrawCondition::NoCropOf(CropName::Corn),
            Wearable::Parsnip => WithdrawCondition::NoCropOf(CropName::Parsnip),
            Wearable::SunflowerAmulet => WithdrawCondition::NoCropOf(CropName::Sunflower),
            Wearable::CarrotAmulet => WithdrawCondition::NoCropOf(CropName::Carrot),
            Wearable::BeetrootAmulet => WithdrawCondition::NoCropOf(CropName::Beetroot),
            Wearable::GreenAmulet | Wearable::AngelWings | Wearable::DevilWings => {
                WithdrawCondition::NoCropsGrowing
            }
            Wearable::Cattlegrim => WithdrawCondition::NoFedChickens,
            Wearable::InfernalPitchfork => WithdrawCondition::NoCropsGrowing,
            _ => WithdrawCondition::Never,
        }
    }

    /// Returns the display name for this wearable.
    pub fn name(&self) -> &'static str {
        match self {
            Wearable::FruitPickerApron => "Fruit Picker Apron",
            Wearable::EggplantOnesie => "Eggplant Onesie",
            Wearable::CornOnesie => "Corn Onesie",
            Wearable::Parsnip => "Parsnip",
            Wearable::SunflowerAmulet => "Sunflower Amulet",
            Wearable::CarrotAmulet => "Carrot Amulet",
            Wearable::BeetrootAmulet => "Beetroot Amulet",
            Wearable::GreenAmulet => "Green Amulet",
            Wearable::AngelWings => "Angel Wings",
            Wearable::DevilWings => "Devil Wings",
            Wearable::Cattlegrim => "Cattlegrim",
            Wearable::InfernalPitchfork => "Infernal Pitchfork",
            Wearable::RedFarmerShirt => "Red Farmer Shirt",
            Wearable::BlueFarmerShirt => "Blue Farmer Shirt",
            Wearable::FarmerOveralls => "Farmer Overalls",
            Wearable::BlackFarmerBoots => "Black Farmer Boots",
            Wearable::FarmerPants => "Farmer Pants",
        }
    }
}

impl fmt::Display for Wearable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
