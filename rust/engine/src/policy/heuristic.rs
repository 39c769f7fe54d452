// rust/engine/src/policy/heuristic.rs
#![forbid(unsafe_code)]

use crate::engine::{BOARD_CELLS, BoardSim, H, W};
use crate::error::ConfigError;
use crate::policy::cell_map::CellMap;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeuristicFeature {
    MaxHeight,
    TotalHeight,
    CoveredCells,
    Bumpiness,
    RowTransitions,
    RoofCells,
}

impl HeuristicFeature {
    /// All features, in the order they are summed by the default scorer.
    pub const ALL: [HeuristicFeature; 6] = [
        HeuristicFeature::MaxHeight,
        HeuristicFeature::TotalHeight,
        HeuristicFeature::CoveredCells,
        HeuristicFeature::Bumpiness,
        HeuristicFeature::RowTransitions,
        HeuristicFeature::RoofCells,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        let k = name.trim().to_ascii_lowercase();
        match k.as_str() {
            "max_h" | "max_height" => Some(Self::MaxHeight),
            "total_h" | "total_height" | "agg_h" | "agg_height" => Some(Self::TotalHeight),
            "covered" | "covered_cells" | "holes" => Some(Self::CoveredCells),
            "bump" | "bumpiness" => Some(Self::Bumpiness),
            "row_trans" | "row_transitions" => Some(Self::RowTransitions),
            "roof" | "roof_cells" => Some(Self::RoofCells),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MaxHeight => "max_height",
            Self::TotalHeight => "total_height",
            Self::CoveredCells => "covered_cells",
            Self::Bumpiness => "bumpiness",
            Self::RowTransitions => "row_transitions",
            Self::RoofCells => "roof_cells",
        }
    }

    pub fn value(self, map: &CellMap) -> f64 {
        match self {
            Self::MaxHeight => score_max_height(map),
            Self::TotalHeight => score_total_height(map),
            Self::CoveredCells => score_covered_cells(map),
            Self::Bumpiness => score_bumpiness(map),
            Self::RowTransitions => score_row_transitions(map),
            Self::RoofCells => score_roof_cells(map),
        }
    }
}

// ---------------- individual heuristics ----------------
//
// Each term grows with the property it measures. Linear terms are normalized by BOARD_CELLS.

/// `((H - top_row) / H)^2` for the topmost occupied row on the board, 0 when empty.
pub fn score_max_height(map: &CellMap) -> f64 {
    for (y, row) in map.rows().iter().enumerate() {
        if row.iter().any(|&c| c) {
            let h = (H - y) as f64 / H as f64;
            return h * h;
        }
    }
    0.0
}

/// Sum of column heights, normalized by the cell count.
pub fn score_total_height(map: &CellMap) -> f64 {
    let total: usize = (0..W).map(|x| map.column_height(x)).sum();
    total as f64 / BOARD_CELLS as f64
}

/// Empty cells lying below the first occupied cell of their column.
pub fn score_covered_cells(map: &CellMap) -> f64 {
    let mut total = 0usize;
    for x in 0..W {
        let mut covered = false;
        for y in 0..H {
            if map.is_occupied(x, y) {
                covered = true;
            } else if covered {
                total += 1;
            }
        }
    }
    total as f64 / BOARD_CELLS as f64
}

/// Height differences between consecutive non-empty columns, seeded with column 0's height.
///
/// Empty columns after the first are skipped rather than treated as height 0.
pub fn score_bumpiness(map: &CellMap) -> f64 {
    let mut last = map.column_height(0);
    let mut total = 0usize;
    for x in 1..W {
        if let Some(top) = map.column_top(x) {
            let h = H - top;
            total += h.abs_diff(last);
            last = h;
        }
    }
    total as f64 / BOARD_CELLS as f64
}

/// Filled/empty changes between horizontally adjacent cells, normalized by the cell count.
pub fn score_row_transitions(map: &CellMap) -> f64 {
    let total: usize = map
        .rows()
        .iter()
        .map(|row| row.windows(2).filter(|w| w[0] != w[1]).count())
        .sum();
    total as f64 / BOARD_CELLS as f64
}

/// Occupied cells that have an empty cell somewhere beneath them in the same column.
pub fn score_roof_cells(map: &CellMap) -> f64 {
    let mut total = 0usize;
    for x in 0..W {
        let mut hole = false;
        for y in (0..H).rev() {
            if map.is_occupied(x, y) {
                if hole {
                    total += 1;
                }
            } else {
                hole = true;
            }
        }
    }
    total as f64 / BOARD_CELLS as f64
}

/// Per-feature values, in the order given.
pub fn compute_feature_values(map: &CellMap, features: &[HeuristicFeature]) -> Vec<f64> {
    features.iter().map(|f| f.value(map)).collect()
}

// ---------------- scorer ----------------

/// Weighted sum of heuristic features over a cell map.
///
/// NOTE (sign convention): placement search keeps the candidate with the *largest* score even
/// though every term measures something undesirable. This is the established behavior of the
/// agent and is kept as-is; negative weights are accepted if a caller wants the opposite.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicScorer {
    features: Vec<HeuristicFeature>,
    weights: Vec<f64>,
}

impl HeuristicScorer {
    pub fn new(features: Vec<HeuristicFeature>, weights: Vec<f64>) -> Result<Self, ConfigError> {
        if features.is_empty() {
            return Err(ConfigError::EmptyFeatures);
        }
        if features.len() != weights.len() {
            return Err(ConfigError::LengthMismatch {
                features: features.len(),
                weights: weights.len(),
            });
        }
        if let Some((f, &w)) = features.iter().zip(&weights).find(|(_, w)| !w.is_finite()) {
            return Err(ConfigError::NonFiniteWeight {
                feature: f.name(),
                weight: w,
            });
        }
        Ok(Self { features, weights })
    }

    /// Build from `(feature_name, weight)` pairs, e.g. loaded from a config file.
    pub fn from_named<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut features = Vec::new();
        let mut weights = Vec::new();
        for (name, w) in pairs {
            let f = HeuristicFeature::parse(name)
                .ok_or_else(|| ConfigError::UnknownFeature(name.to_string()))?;
            features.push(f);
            weights.push(w);
        }
        Self::new(features, weights)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn evaluate(&self, map: &CellMap) -> f64 {
        let mut score = 0.0;
        for (feat, w) in self.features.iter().zip(self.weights.iter()) {
            score += feat.value(map) * w;
        }
        score
    }

    pub fn evaluate_board<B: BoardSim>(&self, board: &B) -> f64 {
        self.evaluate(&CellMap::from_cells(board.cells()))
    }
}

impl Default for HeuristicScorer {
    /// All six features at weight 1.0.
    fn default() -> Self {
        Self {
            features: HeuristicFeature::ALL.to_vec(),
            weights: vec![1.0; HeuristicFeature::ALL.len()],
        }
    }
}
