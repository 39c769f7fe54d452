// rust/engine/src/error.rs
#![forbid(unsafe_code)]

use thiserror::Error;

/// Rejection reported by a board when an action cannot be applied.
///
/// A rejected action leaves the board unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SimError {
    #[error("no falling piece")]
    NoFallingPiece,
    #[error("piece is blocked")]
    Blocked,
    #[error("no discards remaining")]
    NoDiscardsRemaining,
    #[error("no bombs remaining")]
    NoBombsRemaining,
    #[error("game is over")]
    GameOver,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SearchError {
    #[error("no legal placement for the falling piece")]
    NoLegalPlacement,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("features must not be empty")]
    EmptyFeatures,
    #[error("features/weights length mismatch: {features} vs {weights}")]
    LengthMismatch { features: usize, weights: usize },
    #[error("weight for {feature} is not finite: {weight}")]
    NonFiniteWeight { feature: &'static str, weight: f64 },
    #[error("unknown heuristic feature: {0}")]
    UnknownFeature(String),
    #[error("bomb height threshold must be within [0, 1], got {0}")]
    BombThreshold(f64),
}
