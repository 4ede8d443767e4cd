//! Withdrawal eligibility for boost wearables.
//!
//! A wearable that boosts a resource cannot be withdrawn while any entry
//! of that resource still depends on the boost (e.g. a crop mid-growth
//! that the wearable accelerates). The check is a pure read of the
//! session snapshot and never mutates it.

use super::types::{Wearable, WithdrawCondition};
use crate::core::session_state::SessionState;

/// Returns whether `wearable` may be withdrawn under the given session
/// snapshot.
///
/// Fail-closed on both axes: an absent snapshot blocks withdrawal, and a
/// wearable with no known condition is never withdrawable. Conditions
/// hold vacuously over empty collections.
pub fn is_withdrawable(wearable: Wearable, state: Option<&SessionState>) -> bool {
    let Some(state) = state else {
        return false;
    };

    match wearable.withdraw_condition() {
        WithdrawCondition::NoFruitGrowing => state
            .fruit_patches
            .values()
            .all(|patch| patch.fruit.is_none()),
        WithdrawCondition::NoCropOf(name) => state
            .crops
            .values()
            .all(|plot| plot.crop.as_ref().map_or(true, |crop| crop.name != name)),
        WithdrawCondition::NoCropsGrowing => state.crops.values().all(|plot| plot.crop.is_none()),
        WithdrawCondition::NoFedChickens => state
            .chickens
            .values()
            .all(|chicken| chicken.fed_at.is_none()),
        WithdrawCondition::Never => false,
    }
}
