// rust/engine/src/policy/placement.rs
#![forbid(unsafe_code)]

use crate::engine::{Action, BoardSim, MAX_CANDIDATES, MAX_ROTS, W};
use crate::error::{SearchError, SimError};
use crate::policy::heuristic::HeuristicScorer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchMode {
    /// Rotate and shift the current falling piece.
    Place,
    /// Replace the falling piece with a bomb, then shift it (no rotation).
    Bomb,
}

/// Best reachable placement found by [`search`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Net quarter-turns: 0..=2 clockwise, or -1 for a single anticlockwise turn.
    pub rotation: i32,
    /// Net columns to move, negative = left.
    pub offset: i32,
    pub score: f64,
}

/// Drive a clone of `board` to (`rot`, `target`) and drop it.
///
/// Returns the dropped board and the signed horizontal displacement, or `None` if any step is
/// rejected or the piece does not end up with its leftmost column on `target`.
pub fn simulate_candidate<B: BoardSim>(
    board: &B,
    mode: SearchMode,
    rot: usize,
    target: i32,
) -> Option<(B, i32)> {
    let mut sim = board.clone();
    let movement = steer(&mut sim, mode, rot, target).ok()?;
    if sim.falling_left() != Some(target) {
        return None;
    }
    sim.apply(Action::Drop).ok()?;
    Some((sim, movement))
}

fn steer<B: BoardSim>(
    sim: &mut B,
    mode: SearchMode,
    rot: usize,
    target: i32,
) -> Result<i32, SimError> {
    match mode {
        SearchMode::Bomb => sim.apply(Action::Bomb)?,
        SearchMode::Place => {
            for _ in 0..rot {
                sim.apply(Action::RotateClockwise)?;
            }
        }
    }

    let left = sim.falling_left().ok_or(SimError::NoFallingPiece)?;
    let (step, dir) = if target < left {
        (-1, Action::MoveLeft)
    } else {
        (1, Action::MoveRight)
    };

    let mut movement = 0;
    for _ in 0..(target - left).abs() {
        sim.apply(dir)?;
        movement += step;
    }
    Ok(movement)
}

/// Greedy one-ply search over every (rotation, column) pair.
///
/// Candidates are visited rotation-major (0..4) then column (0..W); a later candidate replaces
/// the best only with a strictly greater score, so ties keep the first one visited. The input
/// board is never mutated.
pub fn search<B: BoardSim>(
    board: &B,
    mode: SearchMode,
    scorer: &HeuristicScorer,
) -> Result<Placement, SearchError> {
    let rots = match mode {
        SearchMode::Place => MAX_ROTS,
        SearchMode::Bomb => 1,
    };

    let mut best: Option<Placement> = None;
    let mut reachable = 0usize;

    for rot in 0..rots {
        for target in 0..W as i32 {
            let Some((dropped, movement)) = simulate_candidate(board, mode, rot, target) else {
                continue;
            };
            reachable += 1;

            let score = scorer.evaluate_board(&dropped);
            match best {
                Some(b) if score <= b.score => {}
                _ => {
                    best = Some(Placement {
                        rotation: rot as i32,
                        offset: movement,
                        score,
                    })
                }
            }
        }
    }

    debug_assert!(reachable <= MAX_CANDIDATES);
    log::trace!("{mode:?} search: {reachable} reachable candidates, best={best:?}");

    let mut best = best.ok_or(SearchError::NoLegalPlacement)?;
    if best.rotation == 3 {
        best.rotation = -1;
    }
    Ok(best)
}
