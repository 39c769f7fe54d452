// rust/engine/src/policy/agent.rs
#![forbid(unsafe_code)]

use crate::engine::{Action, BoardSim, CellSet};
use crate::error::ConfigError;
use crate::policy::advisor::{SpecialAction, SpecialActionAdvisor};
use crate::policy::base::Policy;
use crate::policy::config::AgentConfig;
use crate::policy::heuristic::HeuristicScorer;
use crate::policy::placement::{SearchMode, search};
use crate::policy::sequencer::PendingPlan;

/// Greedy heuristic agent.
///
/// A new placement is searched only when the board's locked cells differ from the last board it
/// planned for; in between, the stored plan is replayed one action per call. Each instance owns
/// its plan and cache, so several agents can run side by side.
#[derive(Clone, Debug)]
pub struct HeuristicAgent {
    scorer: HeuristicScorer,
    advisor: SpecialActionAdvisor,
    plan: PendingPlan,
    last_observed_cells: Option<CellSet>,
    searches: u64,
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::from_validated(AgentConfig::default())
    }
}

impl HeuristicAgent {
    /// Build an agent from `config`, rejecting thresholds outside `[0, 1]` (NaN included).
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: AgentConfig) -> Self {
        Self {
            scorer: config.scorer,
            advisor: SpecialActionAdvisor::new(config.bomb_height_threshold),
            plan: PendingPlan::default(),
            last_observed_cells: None,
            searches: 0,
        }
    }

    pub fn plan(&self) -> PendingPlan {
        self.plan
    }

    /// Number of times a fresh plan has been searched.
    pub fn search_count(&self) -> u64 {
        self.searches
    }

    /// Search a new plan for `board`. Returns a special action to emit right away, if any.
    fn replan<B: BoardSim>(&mut self, board: &B) -> Option<Action> {
        self.searches += 1;

        let placement = match search(board, SearchMode::Place, &self.scorer) {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("{e}; falling back to dropping in place");
                None
            }
        };

        match self.advisor.advise(board, &self.scorer, placement.as_ref()) {
            // The cache is left stale so the board after the discard is searched again.
            Some(SpecialAction::Discard) => return Some(Action::Discard),
            Some(SpecialAction::Bomb { offset }) => {
                log::debug!("bombing, then moving {offset}");
                self.plan = PendingPlan::new(0, offset);
                self.last_observed_cells = Some(board.cells().clone());
                return Some(Action::Bomb);
            }
            None => {}
        }

        self.plan = placement.map_or_else(PendingPlan::default, |p| {
            PendingPlan::new(p.rotation, p.offset)
        });
        self.last_observed_cells = Some(board.cells().clone());
        log::debug!("new plan {:?} (score {:?})", self.plan, placement.map(|p| p.score));
        None
    }
}

impl<B: BoardSim> Policy<B> for HeuristicAgent {
    fn choose_action(&mut self, board: &B) -> Action {
        if self.last_observed_cells.as_ref() != Some(board.cells()) {
            if let Some(action) = self.replan(board) {
                return action;
            }
        }
        self.plan.next_action()
    }
}
