// rust/engine/src/policy/mod.rs
#![forbid(unsafe_code)]

mod advisor;
mod agent;
mod base;
mod cell_map;
mod config;
mod heuristic;
mod placement;
mod sequencer;

/**
 * Curated policy public API.
 *
 * Internal modules remain private; the agent, its building blocks and their configuration are
 * re-exported here.
 */
pub use advisor::{DEFAULT_BOMB_HEIGHT_THRESHOLD, SpecialAction, SpecialActionAdvisor};
pub use agent::HeuristicAgent;
pub use base::Policy;
pub use cell_map::CellMap;
pub use config::AgentConfig;
pub use heuristic::{
    HeuristicFeature, HeuristicScorer, compute_feature_values, score_bumpiness, score_covered_cells,
    score_max_height, score_roof_cells, score_row_transitions, score_total_height,
};
pub use placement::{Placement, SearchMode, search, simulate_candidate};
pub use sequencer::PendingPlan;
