// rust/engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod policy;

pub use engine::{
    Action, Board, BoardConfig, BoardSim, Cell, CellSet, Falling, H, Kind, PieceRuleKind, W,
};
pub use error::{ConfigError, SearchError, SimError};
pub use policy::{
    AgentConfig, CellMap, HeuristicAgent, HeuristicFeature, HeuristicScorer, PendingPlan, Placement,
    Policy, SearchMode, SpecialAction, SpecialActionAdvisor,
};
