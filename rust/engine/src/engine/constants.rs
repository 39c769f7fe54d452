// rust/engine/src/engine/constants.rs
#![forbid(unsafe_code)]

pub const H: usize = 24;
pub const W: usize = 10;

/// Number of cells on the board; every linear heuristic is normalized by it.
pub const BOARD_CELLS: usize = H * W;

/// Rotation slots enumerated by the placement search (clockwise quarter-turns).
pub const MAX_ROTS: usize = 4;

/// Upper bound on candidates evaluated by a single search call.
pub const MAX_CANDIDATES: usize = MAX_ROTS * W;

/// Anchor column of a freshly spawned piece.
pub const SPAWN_X: i32 = 3;

pub const DEFAULT_DISCARDS: u32 = 10;
pub const DEFAULT_BOMBS: u32 = 5;
