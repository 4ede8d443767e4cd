//! Treasure dig data structures and per-hole dig session state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::items::types::ItemName;

/// Authoritative record of one dug hole, created by the session service
/// at reveal time and immutable afterwards.
///
/// `discovered: None` means the hole was dug and held nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardRecord {
    #[serde(default)]
    pub discovered: Option<ItemName>,
    /// Unix ms when the dig was recorded.
    #[serde(rename = "dugAt")]
    pub dug_at: i64,
}

/// Marks the hole hiding this island's rare treasure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RareTreasure {
    #[serde(rename = "holeId")]
    pub hole_id: u32,
}

/// Treasure island section of the session snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreasureIsland {
    #[serde(default)]
    pub holes: HashMap<u32, RewardRecord>,
    #[serde(rename = "rareTreasure", default)]
    pub rare_treasure: Option<RareTreasure>,
}

/// Client-visible lifecycle of digging one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigState {
    /// Waiting for the player to dig.
    Idle,
    /// Player tried to dig without the required tool.
    NoShovel,
    /// Reveal requested; waiting for the animation gate to release it.
    Digging,
    /// Transient resolution step between `Digging` and an outcome state.
    Finishing,
    /// Terminal: the hole has been dug.
    Dug,
    /// Reveal produced an item; awaiting player acknowledgment.
    TreasureFound,
    /// Reveal produced nothing; returns to `Idle` once acknowledged.
    TreasureNotFound,
}

/// Events the renderer feeds into a dig session.
#[derive(Debug, Clone, PartialEq)]
pub enum DigEvent {
    Dig,
    NoShovel,
    FinishDigging {
        discovered: Option<ItemName>,
        dug_at: i64,
    },
    Acknowledge,
}

/// Commands a dig session emits for its collaborators to execute.
///
/// The session never performs side effects itself; the renderer forwards
/// these to the session service or acts on them directly, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DigCommand {
    /// Ask the session service to reveal the hole's contents.
    RequestReveal { hole_id: u32, created_at: i64 },
    /// Show the one-time "you need a Sand Shovel" explanation.
    ShowMissingShovelModal,
    /// Brief non-blocking reminder that the tool is missing.
    MissingShovelPopover,
    /// Tell the session service to resume normal play after a miss.
    ResumePlay,
    /// Show the "+1 item" confirmation for a found treasure.
    TreasureToast { item: ItemName },
}

/// Per-hole dig session tracking one hole's reveal lifecycle.
///
/// Created when the hole's plot mounts, discarded when it unmounts.
/// Sessions for different holes are fully independent values.
#[derive(Debug, Clone, PartialEq)]
pub struct DigSession {
    pub hole_id: u32,
    pub state: DigState,
    /// Reward stored by `FinishDigging`; `None` until the dig resolves.
    pub reward: Option<RewardRecord>,
    /// Item discovered this session, surfaced for the acknowledge toast.
    pub discovered: Option<ItemName>,
}

impl DigSession {
    /// Builds the session for a hole, resuming straight into `Dug` when
    /// the snapshot already records a prior dig.
    pub fn new(hole_id: u32, prior_reward: Option<RewardRecord>) -> Self {
        match prior_reward {
            Some(reward) => Self {
                hole_id,
                state: DigState::Dug,
                discovered: reward.discovered,
                reward: Some(reward),
            },
            None => Self {
                hole_id,
                state: DigState::Idle,
                reward: None,
                discovered: None,
            },
        }
    }

    pub fn is_dug(&self) -> bool {
        self.state == DigState::Dug
    }
}
