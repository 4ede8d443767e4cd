//! Wearables: equippable items and withdrawal eligibility.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
