// rust/engine/src/policy/config.rs
#![forbid(unsafe_code)]

use crate::error::ConfigError;
use crate::policy::advisor::DEFAULT_BOMB_HEIGHT_THRESHOLD;
use crate::policy::heuristic::HeuristicScorer;

/// Static knobs of [`crate::policy::HeuristicAgent`].
#[derive(Clone, Debug, PartialEq)]
pub struct AgentConfig {
    pub scorer: HeuristicScorer,
    /// Max-height score above which a bomb is used (when one is available).
    pub bomb_height_threshold: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            scorer: HeuristicScorer::default(),
            bomb_height_threshold: DEFAULT_BOMB_HEIGHT_THRESHOLD,
        }
    }
}

impl AgentConfig {
    pub fn new(scorer: HeuristicScorer, bomb_height_threshold: f64) -> Result<Self, ConfigError> {
        let config = Self {
            scorer,
            bomb_height_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Max-height scores live in [0, 1].
        if !(0.0..=1.0).contains(&self.bomb_height_threshold) {
            return Err(ConfigError::BombThreshold(self.bomb_height_threshold));
        }
        Ok(())
    }
}
