//! Buffer between the authoritative reveal response and the dig
//! animation's synchronization frame.
//!
//! "The reward has arrived" is a data fact held here; "the animation
//! reached its sync frame" is renderer timing. The dig session only ever
//! sees `FinishDigging` after both have happened, so the reveal response
//! and the shovel strike stay visually in step however far apart they
//! land in time. The recommended hold after release is
//! [`crate::core::constants::REVEAL_GATE_DELAY_MS`].

use super::types::RewardRecord;

/// Single-shot reveal buffer for one dig attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealGate {
    reward: Option<RewardRecord>,
    released: bool,
}

impl RevealGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the reveal response. The first arrival wins; replays are
    /// dropped.
    pub fn record(&mut self, reward: RewardRecord) {
        if self.reward.is_none() {
            self.reward = Some(reward);
        }
    }

    /// Whether a response has arrived and not yet been released.
    pub fn is_pending(&self) -> bool {
        self.reward.is_some() && !self.released
    }

    /// Called each time the animation reaches its sync frame. Returns the
    /// buffered reward exactly once; `None` before arrival or after
    /// release, so the animation loop can poll it every pass.
    pub fn try_release(&mut self) -> Option<RewardRecord> {
        if self.released {
            return None;
        }
        let reward = self.reward.clone()?;
        self.released = true;
        Some(reward)
    }
}
