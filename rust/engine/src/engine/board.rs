// rust/engine/src/engine/board.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{DEFAULT_BOMBS, DEFAULT_DISCARDS, H, SPAWN_X, W};
use crate::engine::piece_rule::{PieceRule, PieceRuleKind};
use crate::engine::pieces::{Kind, min_dx, rotations};
use crate::engine::sim::{Action, BoardSim, Cell, CellSet};
use crate::error::SimError;

/// The piece currently under player control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Falling {
    pub kind: Kind,
    pub rot: usize,
    pub x: i32,
    pub y: i32,
}

impl Falling {
    fn spawn(kind: Kind) -> Self {
        Self {
            kind,
            rot: 0,
            x: SPAWN_X,
            y: 0,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x + min_dx(self.kind, self.rot)
    }

    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        rotations(self.kind)[self.rot]
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardConfig {
    pub discards: u32,
    pub bombs: u32,
    pub piece_rule: PieceRuleKind,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            discards: DEFAULT_DISCARDS,
            bombs: DEFAULT_BOMBS,
            piece_rule: PieceRuleKind::Uniform,
        }
    }
}

/// Reference board engine implementing [`BoardSim`].
///
/// Engine semantics:
/// - Every action is a discrete step; there is no gravity between actions.
/// - `Drop` hard-drops and locks, clears full rows, then spawns the next piece.
/// - A bomb removes every locked cell within one cell (Chebyshev) of where it lands.
/// - A spawn that collides ends the game; afterwards every action is rejected.
#[derive(Clone, Debug)]
pub struct Board {
    cells: CellSet,
    falling: Option<Falling>,
    next: Kind,
    piece_rule: PieceRule,
    discards_remaining: u32,
    bombs_remaining: u32,

    pub lines_cleared: u64,
    pub pieces_locked: u64,
    game_over: bool,
}

impl Board {
    /// Default: uniform IID stream, default allowances.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, BoardConfig::default())
    }

    pub fn with_config(seed: u64, config: BoardConfig) -> Self {
        let mut piece_rule = PieceRule::new(seed, config.piece_rule);
        let active = piece_rule.draw();
        let next = piece_rule.draw();

        let mut board = Self {
            cells: CellSet::default(),
            falling: None,
            next,
            piece_rule,
            discards_remaining: config.discards,
            bombs_remaining: config.bombs,
            lines_cleared: 0,
            pieces_locked: 0,
            game_over: false,
        };
        board.spawn(active);
        board
    }

    /// Replace the locked cells and respawn the current falling kind against them.
    pub fn with_cells<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> Self {
        self.cells = cells.into_iter().filter(|&(x, y)| x < W && y < H).collect();
        self.game_over = false;
        if let Some(kind) = self.falling.map(|f| f.kind) {
            self.spawn(kind);
        }
        self
    }

    /// Force the falling piece kind (spawned at the default spawn position).
    pub fn with_falling(mut self, kind: Kind) -> Self {
        self.game_over = false;
        self.spawn(kind);
        self
    }

    pub fn falling(&self) -> Option<Falling> {
        self.falling
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn fits(&self, piece: &Falling) -> bool {
        piece.blocks().all(|(gx, gy)| {
            gx >= 0
                && gx < W as i32
                && gy >= 0
                && gy < H as i32
                && !self.cells.contains(&(gx as usize, gy as usize))
        })
    }

    fn spawn(&mut self, kind: Kind) {
        let piece = Falling::spawn(kind);
        if self.fits(&piece) {
            self.falling = Some(piece);
        } else {
            self.falling = None;
            self.game_over = true;
        }
    }

    fn spawn_next(&mut self) {
        let kind = self.next;
        self.next = self.piece_rule.draw();
        self.spawn(kind);
    }

    fn active(&self) -> Result<Falling, SimError> {
        self.falling.ok_or(SimError::NoFallingPiece)
    }

    fn try_replace(&mut self, candidate: Falling) -> Result<(), SimError> {
        if !self.fits(&candidate) {
            return Err(SimError::Blocked);
        }
        self.falling = Some(candidate);
        Ok(())
    }

    fn shift(&mut self, dx: i32) -> Result<(), SimError> {
        let mut p = self.active()?;
        p.x += dx;
        self.try_replace(p)
    }

    fn rotate(&mut self, clockwise: bool) -> Result<(), SimError> {
        let mut p = self.active()?;
        let n = p.kind.num_rots();
        p.rot = if clockwise {
            (p.rot + 1) % n
        } else {
            (p.rot + n - 1) % n
        };
        self.try_replace(p)
    }

    fn hard_drop(&mut self) -> Result<(), SimError> {
        let mut p = self.active()?;
        loop {
            let below = Falling { y: p.y + 1, ..p };
            if !self.fits(&below) {
                break;
            }
            p = below;
        }

        if p.kind.is_bomb() {
            self.explode(p.x, p.y);
        } else {
            self.cells
                .extend(p.blocks().map(|(gx, gy)| (gx as usize, gy as usize)));
            self.lines_cleared += u64::from(self.clear_lines());
        }
        self.pieces_locked += 1;

        self.spawn_next();
        Ok(())
    }

    /// Remove full rows, shifting the rows above them down. Returns the number of rows removed.
    fn clear_lines(&mut self) -> u32 {
        let mut row_counts = [0usize; H];
        for &(_, y) in &self.cells {
            row_counts[y] += 1;
        }
        let full: Vec<usize> = (0..H).filter(|&y| row_counts[y] == W).collect();
        if full.is_empty() {
            return 0;
        }

        self.cells = self
            .cells
            .iter()
            .filter(|(_, y)| !full.contains(y))
            .map(|&(x, y)| (x, y + full.iter().filter(|&&r| r > y).count()))
            .collect();

        full.len() as u32
    }

    fn explode(&mut self, cx: i32, cy: i32) {
        self.cells
            .retain(|&(x, y)| (x as i32 - cx).abs() > 1 || (y as i32 - cy).abs() > 1);
    }

    fn discard(&mut self) -> Result<(), SimError> {
        self.active()?;
        if self.discards_remaining == 0 {
            return Err(SimError::NoDiscardsRemaining);
        }
        self.discards_remaining -= 1;
        self.spawn_next();
        Ok(())
    }

    fn bomb(&mut self) -> Result<(), SimError> {
        self.active()?;
        if self.bombs_remaining == 0 {
            return Err(SimError::NoBombsRemaining);
        }
        self.try_replace(Falling::spawn(Kind::Bomb))?;
        self.bombs_remaining -= 1;
        Ok(())
    }
}

impl BoardSim for Board {
    fn cells(&self) -> &CellSet {
        &self.cells
    }

    fn falling_left(&self) -> Option<i32> {
        self.falling.map(|f| f.left())
    }

    fn discards_remaining(&self) -> u32 {
        self.discards_remaining
    }

    fn bombs_remaining(&self) -> u32 {
        self.bombs_remaining
    }

    fn apply(&mut self, action: Action) -> Result<(), SimError> {
        if self.game_over {
            return Err(SimError::GameOver);
        }
        match action {
            Action::MoveLeft => self.shift(-1),
            Action::MoveRight => self.shift(1),
            Action::RotateClockwise => self.rotate(true),
            Action::RotateAnticlockwise => self.rotate(false),
            Action::Drop => self.hard_drop(),
            Action::Discard => self.discard(),
            Action::Bomb => self.bomb(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bottom_row_except(hole: usize) -> Vec<Cell> {
        (0..W).filter(|&x| x != hole).map(|x| (x, H - 1)).collect()
    }

    #[test]
    fn o_piece_drops_to_floor() {
        let mut b = Board::new(1).with_falling(Kind::O);
        b.apply(Action::Drop).unwrap();
        let expected: CellSet = [(3, 22), (4, 22), (3, 23), (4, 23)].into_iter().collect();
        assert_eq!(b.cells(), &expected);
        assert_eq!(b.pieces_locked, 1);
    }

    #[test]
    fn walls_reject_moves_and_leave_board_unchanged() {
        let mut b = Board::new(2).with_falling(Kind::O);
        for _ in 0..3 {
            b.apply(Action::MoveLeft).unwrap();
        }
        assert_eq!(b.falling_left(), Some(0));
        let before = b.falling();
        assert_eq!(b.apply(Action::MoveLeft), Err(SimError::Blocked));
        assert_eq!(b.falling(), before);
    }

    #[test]
    fn rotation_changes_left_column() {
        let mut b = Board::new(3).with_falling(Kind::I);
        assert_eq!(b.falling_left(), Some(3));
        b.apply(Action::RotateClockwise).unwrap();
        assert_eq!(b.falling_left(), Some(5));
        b.apply(Action::RotateAnticlockwise).unwrap();
        assert_eq!(b.falling_left(), Some(3));
    }

    #[test]
    fn full_row_is_cleared_and_rows_above_shift_down() {
        let mut cells = bottom_row_except(0);
        cells.push((5, H - 2));
        let mut b = Board::new(4).with_cells(cells).with_falling(Kind::I);
        b.apply(Action::RotateClockwise).unwrap();
        for _ in 0..5 {
            b.apply(Action::MoveLeft).unwrap();
        }
        assert_eq!(b.falling_left(), Some(0));
        b.apply(Action::Drop).unwrap();

        assert_eq!(b.lines_cleared, 1);
        assert!(b.cells().contains(&(5, H - 1)));
        assert!(b.cells().contains(&(0, H - 1)));
        assert!(b.cells().contains(&(0, H - 3)));
        assert_eq!(b.cells().len(), 4);
    }

    #[test]
    fn bomb_clears_neighbourhood_of_landing_cell() {
        let cells: Vec<Cell> = (0..W).flat_map(|x| [(x, H - 1), (x, H - 2)]).collect();
        let mut b = Board::new(5).with_cells(cells).with_falling(Kind::T);
        b.apply(Action::Bomb).unwrap();
        assert_eq!(b.bombs_remaining(), DEFAULT_BOMBS - 1);
        assert_eq!(b.falling().map(|f| f.kind), Some(Kind::Bomb));

        b.apply(Action::Drop).unwrap();
        for x in 2..=4 {
            assert!(!b.cells().contains(&(x, H - 2)), "x={x}");
        }
        assert!(b.cells().contains(&(1, H - 2)));
        assert!(b.cells().contains(&(5, H - 2)));
        assert!(b.cells().contains(&(3, H - 1)));
        assert_eq!(b.cells().len(), 2 * W - 3);
    }

    #[test]
    fn allowances_are_enforced() {
        let config = BoardConfig {
            discards: 1,
            bombs: 0,
            piece_rule: PieceRuleKind::Bag7,
        };
        let mut b = Board::with_config(6, config);
        assert_eq!(b.apply(Action::Bomb), Err(SimError::NoBombsRemaining));
        assert!(b.apply(Action::Discard).is_ok());
        assert_eq!(b.discards_remaining(), 0);
        assert_eq!(b.apply(Action::Discard), Err(SimError::NoDiscardsRemaining));
    }

    #[test]
    fn blocked_spawn_ends_the_game() {
        let cells: Vec<Cell> = (0..W).flat_map(|x| (0..H).map(move |y| (x, y))).collect();
        let mut b = Board::new(7).with_cells(cells);
        assert!(b.is_game_over());
        assert_eq!(b.falling_left(), None);
        assert_eq!(b.apply(Action::Drop), Err(SimError::GameOver));
    }

    #[test]
    fn clones_are_independent() {
        let b = Board::new(8).with_falling(Kind::S);
        let mut c = b.clone();
        c.apply(Action::Drop).unwrap();
        assert!(b.cells().is_empty());
        assert!(!c.cells().is_empty());
    }
}
