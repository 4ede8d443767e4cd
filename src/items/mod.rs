//! Inventory item vocabulary.

pub mod types;

pub use types::*;
