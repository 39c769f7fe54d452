// rust/engine/src/policy/cell_map.rs
#![forbid(unsafe_code)]

use crate::engine::{CellSet, H, W};

/// Dense occupancy grid, row-major by `y` (row 0 = top).
///
/// Built fresh from a board's cell set for every evaluation; never shared between boards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellMap([[bool; W]; H]);

impl CellMap {
    pub fn empty() -> Self {
        Self([[false; W]; H])
    }

    pub fn from_cells(cells: &CellSet) -> Self {
        let mut grid = [[false; W]; H];
        for &(x, y) in cells {
            debug_assert!(x < W && y < H, "cell out of bounds: ({x}, {y})");
            if x < W && y < H {
                grid[y][x] = true;
            }
        }
        Self(grid)
    }

    #[inline]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.0[y][x]
    }

    #[inline]
    pub fn rows(&self) -> &[[bool; W]; H] {
        &self.0
    }

    /// Topmost occupied row of column `x`, if any.
    #[inline]
    pub fn column_top(&self, x: usize) -> Option<usize> {
        (0..H).find(|&y| self.0[y][x])
    }

    /// Column height measured from the floor (0 for an empty column).
    #[inline]
    pub fn column_height(&self, x: usize) -> usize {
        self.column_top(x).map_or(0, |y| H - y)
    }

    pub fn occupied_cells(&self) -> CellSet {
        let mut out = CellSet::default();
        for (y, row) in self.0.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                if filled {
                    out.insert((x, y));
                }
            }
        }
        out
    }
}
