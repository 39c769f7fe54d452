// rust/engine/src/policy/advisor.rs
#![forbid(unsafe_code)]

use crate::engine::{Action, BoardSim};
use crate::policy::cell_map::CellMap;
use crate::policy::heuristic::{HeuristicScorer, score_max_height};
use crate::policy::placement::{Placement, SearchMode, search};

pub const DEFAULT_BOMB_HEIGHT_THRESHOLD: f64 = 0.75;

/// A special action that preempts the normal placement plan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecialAction {
    Discard,
    /// Bomb, then steer the bomb `offset` columns before dropping it.
    Bomb { offset: i32 },
}

impl SpecialAction {
    pub fn action(self) -> Action {
        match self {
            SpecialAction::Discard => Action::Discard,
            SpecialAction::Bomb { .. } => Action::Bomb,
        }
    }
}

/// Decides whether a discard or a bomb should replace the normal placement this turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecialActionAdvisor {
    bomb_height_threshold: f64,
}

impl Default for SpecialActionAdvisor {
    fn default() -> Self {
        Self::new(DEFAULT_BOMB_HEIGHT_THRESHOLD)
    }
}

impl SpecialActionAdvisor {
    pub fn new(bomb_height_threshold: f64) -> Self {
        Self {
            bomb_height_threshold,
        }
    }

    /// Bomb iff the stack is tall enough and a bomb is available.
    #[inline]
    pub fn bomb_warranted(&self, max_height_score: f64, bombs_remaining: u32) -> bool {
        max_height_score > self.bomb_height_threshold && bombs_remaining > 0
    }

    /// Evaluates a discard by searching the board that would follow it.
    ///
    /// The comparison is computed and logged, but discarding is never recommended.
    pub fn consider_discard<B: BoardSim>(
        &self,
        board: &B,
        scorer: &HeuristicScorer,
        current: Option<&Placement>,
    ) -> bool {
        let mut after = board.clone();
        if after.apply(Action::Discard).is_err() {
            return false;
        }
        let discarded = search(&after, SearchMode::Place, scorer).ok();
        log::trace!(
            "discard comparison: keep={:?} discard={:?}",
            current.map(|p| p.score),
            discarded.map(|p| p.score)
        );
        false
    }

    /// Column offset for a bomb if one should be used now.
    ///
    /// The height test is made on the board as observed; the search only locates where the bomb
    /// would do the most good.
    pub fn consider_bomb<B: BoardSim>(&self, board: &B, scorer: &HeuristicScorer) -> Option<i32> {
        let height = score_max_height(&CellMap::from_cells(board.cells()));
        if !self.bomb_warranted(height, board.bombs_remaining()) {
            return None;
        }
        let target = search(board, SearchMode::Bomb, scorer).ok()?;
        log::trace!("bomb warranted at max_height={height:.3}, target={target:?}");
        Some(target.offset)
    }

    /// Checks discard (only with discards left), then bomb. First affirmative answer wins.
    pub fn advise<B: BoardSim>(
        &self,
        board: &B,
        scorer: &HeuristicScorer,
        current: Option<&Placement>,
    ) -> Option<SpecialAction> {
        if board.discards_remaining() > 0 && self.consider_discard(board, scorer, current) {
            return Some(SpecialAction::Discard);
        }
        self.consider_bomb(board, scorer)
            .map(|offset| SpecialAction::Bomb { offset })
    }
}
