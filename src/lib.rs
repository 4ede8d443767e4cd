//! Homestead - Farming & Adventure Game Client Core
//!
//! Client-side game logic exposed for the renderer host and for testing:
//! the wearable withdrawal check, the per-hole treasure dig state machine,
//! and the read-only session snapshot both evaluate against. Rendering and
//! all authoritative state mutation live in external collaborators.

pub mod core;
pub mod farm;
pub mod items;
pub mod treasure;
pub mod wearables;

pub use crate::core::constants::{DIG_TOOL, REVEAL_GATE_DELAY_MS};
pub use crate::core::session_state::SessionState;
