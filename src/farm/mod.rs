//! Farm resources: crops, fruit patches, and livestock.

pub mod types;

pub use types::*;
