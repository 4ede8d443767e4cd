//! Integration test: wearable withdrawal eligibility
//!
//! Exercises the full rule table against snapshots built in code and
//! snapshots decoded from service JSON: boost wearables blocked by live
//! resources, cleared by harvested resources, and the fail-closed
//! defaults for unknown state and plain clothing.

use homestead::farm::types::{Chicken, Crop, CropName, CropPlot, Fruit, FruitName, FruitPatch};
use homestead::wearables::{is_withdrawable, Wearable, WithdrawCondition, ALL_WEARABLES};
use homestead::SessionState;

/// Snapshot with one growing entry in every collection.
fn busy_farm() -> SessionState {
    let mut state = SessionState::new();
    state.crops.insert(
        "1".to_string(),
        CropPlot {
            crop: Some(Crop {
                name: CropName::Sunflower,
                planted_at: 1_000,
            }),
        },
    );
    state.fruit_patches.insert(
        "1".to_string(),
        FruitPatch {
            fruit: Some(Fruit {
                name: FruitName::Blueberry,
            }),
        },
    );
    state.chickens.insert(
        "1".to_string(),
        Chicken {
            fed_at: Some(1_500),
        },
    );
    state
}

/// Snapshot where every collection has entries but nothing is growing.
fn resting_farm() -> SessionState {
    let mut state = SessionState::new();
    state.crops.insert("1".to_string(), CropPlot { crop: None });
    state
        .fruit_patches
        .insert("1".to_string(), FruitPatch { fruit: None });
    state
        .chickens
        .insert("1".to_string(), Chicken { fed_at: None });
    state
}

// =============================================================================
// Fail-closed defaults
// =============================================================================

#[test]
fn test_every_wearable_blocked_without_state() {
    for wearable in ALL_WEARABLES {
        assert!(
            !is_withdrawable(wearable, None),
            "{} must be blocked when state is unknown",
            wearable
        );
    }
}

#[test]
fn test_wearables_without_condition_never_withdraw() {
    let state = SessionState::new();
    for wearable in ALL_WEARABLES {
        if wearable.withdraw_condition() == WithdrawCondition::Never {
            assert!(
                !is_withdrawable(wearable, Some(&state)),
                "{} has no clearing condition and must stay locked",
                wearable
            );
        }
    }
}

// =============================================================================
// Rule table, blocked side
// =============================================================================

#[test]
fn test_boost_wearables_blocked_by_busy_farm() {
    let state = busy_farm();

    // Everything the Sunflower and the fruit and the fed chicken touch.
    for wearable in [
        Wearable::FruitPickerApron,
        Wearable::SunflowerAmulet,
        Wearable::GreenAmulet,
        Wearable::AngelWings,
        Wearable::DevilWings,
        Wearable::InfernalPitchfork,
        Wearable::Cattlegrim,
    ] {
        assert!(
            !is_withdrawable(wearable, Some(&state)),
            "{} should be blocked while its resource is live",
            wearable
        );
    }

    // Wearables tied to crops that are not planted stay withdrawable.
    for wearable in [
        Wearable::EggplantOnesie,
        Wearable::CornOnesie,
        Wearable::Parsnip,
        Wearable::CarrotAmulet,
        Wearable::BeetrootAmulet,
    ] {
        assert!(
            is_withdrawable(wearable, Some(&state)),
            "{} is not tied to a Sunflower and should withdraw",
            wearable
        );
    }
}

#[test]
fn test_each_crop_wearable_blocked_by_its_own_crop() {
    let pairs = [
        (Wearable::EggplantOnesie, CropName::Eggplant),
        (Wearable::CornOnesie, CropName::Corn),
        (Wearable::Parsnip, CropName::Parsnip),
        (Wearable::SunflowerAmulet, CropName::Sunflower),
        (Wearable::CarrotAmulet, CropName::Carrot),
        (Wearable::BeetrootAmulet, CropName::Beetroot),
    ];

    for (wearable, crop) in pairs {
        let mut state = SessionState::new();
        state.crops.insert(
            "1".to_string(),
            CropPlot {
                crop: Some(Crop {
                    name: crop,
                    planted_at: 1_000,
                }),
            },
        );
        assert!(
            !is_withdrawable(wearable, Some(&state)),
            "{} should be blocked while {} grows",
            wearable,
            crop
        );
    }
}

// =============================================================================
// Rule table, clear side
// =============================================================================

#[test]
fn test_boost_wearables_clear_on_resting_farm() {
    let state = resting_farm();
    for wearable in ALL_WEARABLES {
        let expected = wearable.withdraw_condition() != WithdrawCondition::Never;
        assert_eq!(
            is_withdrawable(wearable, Some(&state)),
            expected,
            "{} on a farm with nothing growing",
            wearable
        );
    }
}

#[test]
fn test_conditions_hold_vacuously_on_empty_farm() {
    // No plots, patches, or chickens at all.
    let state = SessionState::new();
    for wearable in [
        Wearable::FruitPickerApron,
        Wearable::GreenAmulet,
        Wearable::Cattlegrim,
        Wearable::Parsnip,
    ] {
        assert!(
            is_withdrawable(wearable, Some(&state)),
            "{} should withdraw when the collection is empty",
            wearable
        );
    }
}

// =============================================================================
// Service JSON end to end
// =============================================================================

#[test]
fn test_eligibility_over_decoded_snapshot() {
    let state = SessionState::from_json(
        r#"{
            "crops": { "1": { "crop": { "name": "Parsnip", "plantedAt": 1000 } } },
            "chickens": { "1": {} }
        }"#,
    )
    .expect("snapshot should decode");

    assert!(!is_withdrawable(Wearable::Parsnip, Some(&state)));
    assert!(!is_withdrawable(Wearable::GreenAmulet, Some(&state)));
    assert!(is_withdrawable(Wearable::CornOnesie, Some(&state)));
    assert!(is_withdrawable(Wearable::Cattlegrim, Some(&state)));
}
