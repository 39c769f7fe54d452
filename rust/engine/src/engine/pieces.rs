// rust/engine/src/engine/pieces.rs
#![forbid(unsafe_code)]

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    /// Single-cell special piece created by the bomb action. Never drawn from a piece stream.
    Bomb,
}

impl Kind {
    /// The seven tetrominoes a piece stream may emit.
    pub fn tetrominoes() -> &'static [Kind] {
        use Kind::*;
        &[I, O, T, S, Z, J, L]
    }

    pub fn is_bomb(self) -> bool {
        matches!(self, Kind::Bomb)
    }

    /// Number of *distinct* rotations for this piece.
    ///
    /// Rotating wraps modulo this count, so e.g. an `O` accepts any rotation as a no-op.
    #[inline]
    pub fn num_rots(self) -> usize {
        rotations(self).len()
    }
}

/// Rotations are represented as (dx, dy) offsets from the piece anchor, `dy` growing downward.
/// `rotations(kind)[rot]` returns the occupied blocks; index `rot + 1` is one clockwise turn.
pub fn rotations(kind: Kind) -> &'static [&'static [(i32, i32)]] {
    use Kind::*;
    match kind {
        Bomb => &[&[(0, 0)]],

        O => &[&[(0, 0), (1, 0), (0, 1), (1, 1)]],

        I => &[
            &[(0, 1), (1, 1), (2, 1), (3, 1)],
            &[(2, 0), (2, 1), (2, 2), (2, 3)],
        ],
        S => &[
            &[(1, 0), (2, 0), (0, 1), (1, 1)],
            &[(1, 0), (1, 1), (2, 1), (2, 2)],
        ],
        Z => &[
            &[(0, 0), (1, 0), (1, 1), (2, 1)],
            &[(2, 0), (1, 1), (2, 1), (1, 2)],
        ],

        T => &[
            &[(1, 0), (0, 1), (1, 1), (2, 1)],
            &[(1, 0), (1, 1), (2, 1), (1, 2)],
            &[(0, 1), (1, 1), (2, 1), (1, 2)],
            &[(1, 0), (0, 1), (1, 1), (1, 2)],
        ],
        J => &[
            &[(0, 0), (0, 1), (1, 1), (2, 1)],
            &[(1, 0), (2, 0), (1, 1), (1, 2)],
            &[(0, 1), (1, 1), (2, 1), (2, 2)],
            &[(1, 0), (1, 1), (0, 2), (1, 2)],
        ],
        L => &[
            &[(2, 0), (0, 1), (1, 1), (2, 1)],
            &[(1, 0), (1, 1), (1, 2), (2, 2)],
            &[(0, 1), (1, 1), (2, 1), (0, 2)],
            &[(0, 0), (1, 0), (1, 1), (1, 2)],
        ],
    }
}

/// Leftmost dx of a rotation; `anchor_x + min_dx` is the piece's leftmost column.
#[inline]
pub fn min_dx(kind: Kind, rot: usize) -> i32 {
    rotations(kind)[rot]
        .iter()
        .map(|&(dx, _dy)| dx)
        .min()
        .unwrap_or(0)
}
