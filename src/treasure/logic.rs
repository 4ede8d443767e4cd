//! Dig session transition logic.
//!
//! One event at a time, strictly in call order; (state, event) pairs not
//! listed in the match are ignored. The session mutates only itself and
//! returns [`DigCommand`]s for the host to execute instead of performing
//! side effects.

use super::types::{DigCommand, DigEvent, DigSession, DigState, RewardRecord};
use crate::core::constants::{DIG_TOOL, DIG_TOOL_MIN_QUANTITY};
use crate::core::session_state::SessionState;
use crate::items::types::ItemName;

/// Inputs a dig transition reads alongside the event.
#[derive(Debug, Clone, Copy)]
pub struct DigContext<'a> {
    /// Read-only session snapshot.
    pub session: &'a SessionState,
    /// Item currently selected in the toolbar.
    pub selected_item: Option<ItemName>,
    /// Whether the one-time missing-shovel explanation was already shown.
    /// Owned by the host and shared across every hole of the island.
    pub shovel_notice_shown: bool,
    /// Client timestamp in Unix ms, stamped on reveal requests.
    pub now: i64,
}

impl<'a> DigContext<'a> {
    /// Context stamped with the current wall clock.
    pub fn new(
        session: &'a SessionState,
        selected_item: Option<ItemName>,
        shovel_notice_shown: bool,
    ) -> Self {
        Self {
            session,
            selected_item,
            shovel_notice_shown,
            now: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Context with an explicit timestamp.
    pub fn at(
        session: &'a SessionState,
        selected_item: Option<ItemName>,
        shovel_notice_shown: bool,
        now: i64,
    ) -> Self {
        Self {
            session,
            selected_item,
            shovel_notice_shown,
            now,
        }
    }
}

/// Whether the dig tool is both selected and held in sufficient quantity.
pub fn has_dig_tool(state: &SessionState, selected_item: Option<ItemName>) -> bool {
    selected_item == Some(DIG_TOOL)
        && state.inventory.get(&DIG_TOOL).copied().unwrap_or(0) >= DIG_TOOL_MIN_QUANTITY
}

/// Applies one event to the session and returns the commands it emits.
pub fn handle_event(dig: &mut DigSession, event: DigEvent, ctx: &DigContext) -> Vec<DigCommand> {
    let mut commands = Vec::new();

    match (dig.state, event) {
        (DigState::Idle, DigEvent::Dig) => {
            if has_dig_tool(ctx.session, ctx.selected_item) {
                dig.state = DigState::Digging;
                commands.push(DigCommand::RequestReveal {
                    hole_id: dig.hole_id,
                    created_at: ctx.now,
                });
            } else if !ctx.shovel_notice_shown {
                // First miss gets the full explanation, later ones a popover.
                dig.state = DigState::NoShovel;
                commands.push(DigCommand::ShowMissingShovelModal);
            } else {
                dig.state = DigState::NoShovel;
                commands.push(DigCommand::MissingShovelPopover);
            }
        }
        (DigState::Idle, DigEvent::NoShovel) => {
            dig.state = DigState::NoShovel;
            commands.push(DigCommand::MissingShovelPopover);
        }
        (DigState::NoShovel, DigEvent::Acknowledge) => {
            dig.state = DigState::Idle;
        }
        (DigState::Digging, DigEvent::FinishDigging { discovered, dug_at }) => {
            dig.state = DigState::Finishing;
            dig.reward = Some(RewardRecord { discovered, dug_at });
            dig.discovered = discovered;
            finish(dig, &mut commands);
        }
        (DigState::TreasureFound, DigEvent::Acknowledge) => {
            dig.state = DigState::Dug;
            if let Some(item) = dig.discovered {
                commands.push(DigCommand::TreasureToast { item });
            }
        }
        // The renderer forwards this on its own once it observes the miss;
        // no player input is involved.
        (DigState::TreasureNotFound, DigEvent::Acknowledge) => {
            dig.state = DigState::Idle;
        }
        // `Digging` with no resolution stays parked (retry/timeout is the
        // session service's concern); `Dug` is terminal.
        _ => {}
    }

    commands
}

/// Resolves the transient `Finishing` step into an outcome state.
///
/// `ResumePlay` fires here, on entry to `TreasureNotFound`, so a miss
/// unblocks global play exactly once however the acknowledge lands.
fn finish(dig: &mut DigSession, commands: &mut Vec<DigCommand>) {
    if dig.discovered.is_some() {
        dig.state = DigState::TreasureFound;
    } else {
        dig.state = DigState::TreasureNotFound;
        commands.push(DigCommand::ResumePlay);
    }
}
