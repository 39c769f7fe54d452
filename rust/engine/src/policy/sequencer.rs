// rust/engine/src/policy/sequencer.rs
#![forbid(unsafe_code)]

use crate::engine::Action;

/// Rotation and movement still owed before the next drop.
///
/// Rotation is drained completely before any horizontal move; once both deltas reach zero every
/// call yields [`Action::Drop`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PendingPlan {
    pub to_rotate: i32,
    pub to_move: i32,
}

impl PendingPlan {
    pub fn new(to_rotate: i32, to_move: i32) -> Self {
        Self { to_rotate, to_move }
    }

    pub fn is_exhausted(&self) -> bool {
        self.to_rotate == 0 && self.to_move == 0
    }

    /// Emit the next atomic action and step the plan toward zero.
    pub fn next_action(&mut self) -> Action {
        if self.to_rotate < 0 {
            self.to_rotate += 1;
            Action::RotateAnticlockwise
        } else if self.to_rotate > 0 {
            self.to_rotate -= 1;
            Action::RotateClockwise
        } else if self.to_move < 0 {
            self.to_move += 1;
            Action::MoveLeft
        } else if self.to_move > 0 {
            self.to_move -= 1;
            Action::MoveRight
        } else {
            Action::Drop
        }
    }
}
