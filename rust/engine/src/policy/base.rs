// rust/engine/src/policy/base.rs
#![forbid(unsafe_code)]

use crate::engine::{Action, BoardSim};

/// Policy chooses the next atomic action for the observed board.
///
/// Called once per game tick; implementations may keep state between calls.
pub trait Policy<B: BoardSim> {
    fn choose_action(&mut self, board: &B) -> Action;
}
