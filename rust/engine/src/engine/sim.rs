// rust/engine/src/engine/sim.rs
#![forbid(unsafe_code)]

use rustc_hash::FxHashSet;

use crate::error::SimError;

/// Board coordinate `(x, y)`; `y = 0` is the top row.
pub type Cell = (usize, usize);

/// Occupied (locked) cells of a board. Two boards are "the same state" for the agent iff their
/// cell sets are equal.
pub type CellSet = FxHashSet<Cell>;

/// One atomic per-tick action.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    /// Hard drop: locks the falling piece.
    Drop,
    RotateClockwise,
    RotateAnticlockwise,
    Discard,
    Bomb,
}

/// Simulation interface the agent needs from a board engine.
///
/// `Clone` must produce an independent deep copy: the placement search mutates clones freely
/// and relies on them never touching the caller's board.
pub trait BoardSim: Clone {
    fn cells(&self) -> &CellSet;

    /// Leftmost column of the falling piece, or `None` if nothing is falling.
    fn falling_left(&self) -> Option<i32>;

    fn discards_remaining(&self) -> u32;

    fn bombs_remaining(&self) -> u32;

    /// Apply one action. On `Err` the board is unchanged.
    fn apply(&mut self, action: Action) -> Result<(), SimError>;
}
