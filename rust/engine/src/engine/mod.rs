// rust/engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod board;
mod constants;
mod piece_rule;
mod pieces;
mod sim;

/**
 * Curated engine public API.
 *
 * `sim` is the seam the agent depends on; `Board` is the reference implementation behind it.
 */
pub use board::{Board, BoardConfig, Falling};
pub use constants::{
    BOARD_CELLS, DEFAULT_BOMBS, DEFAULT_DISCARDS, H, MAX_CANDIDATES, MAX_ROTS, SPAWN_X, W,
};
pub use piece_rule::{PieceRule, PieceRuleKind};
pub use pieces::{Kind, min_dx, rotations};
pub use sim::{Action, BoardSim, Cell, CellSet};
