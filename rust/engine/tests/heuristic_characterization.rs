// rust/engine/tests/heuristic_characterization.rs
#![forbid(unsafe_code)]

/**
 * Heuristic characterization tests.
 *
 * Purpose:
 * - Lock in the exact values of the six board heuristics on small hand-built boards.
 * - Lock in the bomb trigger rule (strict threshold + allowance).
 *
 * Boards are built from explicit cell sets so expected values can be derived by hand.
 */
use tetris_agent::policy::{
    compute_feature_values, score_bumpiness, score_covered_cells, score_max_height,
    score_roof_cells, score_row_transitions, score_total_height,
};
use tetris_agent::{
    Board, BoardConfig, BoardSim, CellMap, CellSet, H, HeuristicFeature, HeuristicScorer, Kind,
    SpecialAction, SpecialActionAdvisor, W,
};

fn map_of(cells: &[(usize, usize)]) -> CellMap {
    let set: CellSet = cells.iter().copied().collect();
    CellMap::from_cells(&set)
}

#[test]
fn empty_board_has_zero_heights() {
    let m = map_of(&[]);
    assert_eq!(score_max_height(&m), 0.0);
    assert_eq!(score_total_height(&m), 0.0);
}

#[test]
fn four_tall_stack_in_first_column() {
    let m = map_of(&[(0, 20), (0, 21), (0, 22), (0, 23)]);
    assert_eq!(score_total_height(&m), 4.0 / 240.0);
    let expected_max = (4.0f64 / 24.0).powi(2);
    assert!((score_max_height(&m) - expected_max).abs() < 1e-15);
}

#[test]
fn single_gap_under_surface_is_one_covered_cell() {
    let m = map_of(&[(6, 20), (6, 22), (6, 23)]);
    assert_eq!(score_covered_cells(&m), 1.0 / 240.0);
    // Only the cell directly above the gap sits on a hole.
    assert_eq!(score_roof_cells(&m), 1.0 / 240.0);
}

#[test]
fn covered_cells_count_every_empty_cell_below_the_surface() {
    let m = map_of(&[(2, 18)]);
    assert_eq!(score_covered_cells(&m), 5.0 / 240.0);
    assert_eq!(score_roof_cells(&m), 1.0 / 240.0);
}

#[test]
fn full_row_has_no_transitions_but_a_partial_one_does() {
    let full: Vec<(usize, usize)> = (0..W).map(|x| (x, H - 1)).collect();
    assert_eq!(score_row_transitions(&map_of(&full)), 0.0);

    let partial = map_of(&[(1, H - 1), (2, H - 1), (5, H - 1)]);
    // .##..#.... => 4 transitions
    assert_eq!(score_row_transitions(&partial), 4.0 / 240.0);
}

#[test]
fn bumpiness_walks_non_empty_columns_left_to_right() {
    // heights: [1, 3, 0, 0, 2, 0, 0, 0, 0, 1]
    let m = map_of(&[
        (0, 23),
        (1, 21),
        (1, 22),
        (1, 23),
        (4, 22),
        (4, 23),
        (9, 23),
    ]);
    // |3-1| + |2-3| + |1-2|
    assert_eq!(score_bumpiness(&m), 4.0 / 240.0);
}

#[test]
fn combined_score_sums_terms_in_order() {
    let m = map_of(&[(0, 23), (1, 23)]);
    let values = compute_feature_values(&m, &HeuristicFeature::ALL);
    assert_eq!(values[0], (1.0 / 24.0) * (1.0 / 24.0));
    assert_eq!(values[1], 2.0 / 240.0);
    assert_eq!(values[2], 0.0);
    assert_eq!(values[3], 0.0);
    assert_eq!(values[4], 1.0 / 240.0);
    assert_eq!(values[5], 0.0);

    let total = HeuristicScorer::default().evaluate(&m);
    assert_eq!(total, values.iter().fold(0.0, |acc, v| acc + v));
}

#[test]
fn bomb_rule_at_point_eight() {
    let advisor = SpecialActionAdvisor::default();
    assert!(advisor.bomb_warranted(0.8, 1));
    assert!(!advisor.bomb_warranted(0.8, 0));
}

#[test]
fn bomb_is_advised_on_tall_boards_only_with_allowance() {
    // Topmost row 2 => ((24 - 2) / 24)^2 ~= 0.84.
    let cells: Vec<(usize, usize)> = (2..H).map(|y| (0, y)).collect();
    let advisor = SpecialActionAdvisor::default();
    let scorer = HeuristicScorer::default();

    let with_bombs = Board::new(5).with_cells(cells.clone()).with_falling(Kind::Z);
    let m = CellMap::from_cells(with_bombs.cells());
    assert!(score_max_height(&m) > 0.8);
    assert!(matches!(
        advisor.advise(&with_bombs, &scorer, None),
        Some(SpecialAction::Bomb { .. })
    ));

    let no_bombs = Board::with_config(
        5,
        BoardConfig {
            bombs: 0,
            ..Default::default()
        },
    )
    .with_cells(cells)
    .with_falling(Kind::Z);
    assert_eq!(advisor.advise(&no_bombs, &scorer, None), None);
}
