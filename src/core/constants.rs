use crate::items::types::ItemName;

// Treasure digging
pub const DIG_TOOL: ItemName = ItemName::SandShovel;
pub const DIG_TOOL_MIN_QUANTITY: u32 = 1;

// Hold between the reveal gate releasing (dig animation at its sync
// frame) and the host sending `FinishDigging`.
pub const REVEAL_GATE_DELAY_MS: u64 = 1000;
