//! Pieces module - shape masks and the active piece
//!
//! Every shape is a small rectangular boolean mask. Templates are constants and
//! rotation builds a new mask value, so a template can never be altered by play.

use crate::board::Board;
use crate::types::{Color, PieceKind, SPAWN_X, SPAWN_Y};

/// Largest mask side length (the I piece is 4 long)
pub const MAX_MASK: usize = 4;

/// Rectangular grid of occupied cells, at most 4x4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_MASK]; MAX_MASK],
}

impl Mask {
    /// Build a mask from a literal grid of 0/1 values.
    ///
    /// Grids larger than 4x4 fail at compile time when used in a const.
    ///
    /// ```
    /// use grid_tetris_core::pieces::Mask;
    ///
    /// let t = Mask::from_grid([[1, 1, 1], [0, 1, 0]]);
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(t.get(1, 1));
    /// assert!(!t.get(1, 0));
    /// ```
    pub const fn from_grid<const R: usize, const C: usize>(grid: [[u8; C]; R]) -> Self {
        let mut bits = [[false; MAX_MASK]; MAX_MASK];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                bits[r][c] = grid[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            bits,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at (row, col) is filled; false outside the mask
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Filled cells as (dx, dy) offsets from the mask's top-left corner.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols())
                .filter(move |&c| self.bits[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Quarter-turn: an R×C mask becomes C×R, and new row `i` is old column
    /// `C-1-i` read top to bottom.
    pub fn rotated(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut bits = [[false; MAX_MASK]; MAX_MASK];
        for (i, out_row) in bits.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.bits[j][cols - 1 - i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

const I_MASK: Mask = Mask::from_grid([[1, 1, 1, 1]]);
const O_MASK: Mask = Mask::from_grid([[1, 1], [1, 1]]);
const T_MASK: Mask = Mask::from_grid([[1, 1, 1], [0, 1, 0]]);
const L_MASK: Mask = Mask::from_grid([[1, 1, 1], [1, 0, 0]]);
const J_MASK: Mask = Mask::from_grid([[1, 1, 1], [0, 0, 1]]);
const S_MASK: Mask = Mask::from_grid([[1, 1, 0], [0, 1, 1]]);
const Z_MASK: Mask = Mask::from_grid([[0, 1, 1], [1, 1, 0]]);

/// Spawn orientation mask for a piece kind
pub fn template(kind: PieceKind) -> Mask {
    match kind {
        PieceKind::I => I_MASK,
        PieceKind::O => O_MASK,
        PieceKind::T => T_MASK,
        PieceKind::L => L_MASK,
        PieceKind::J => J_MASK,
        PieceKind::S => S_MASK,
        PieceKind::Z => Z_MASK,
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub color: Color,
    pub mask: Mask,
    /// Column of the mask's top-left cell
    pub x: i8,
    /// Row of the mask's top-left cell (may be negative)
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            mask: template(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute board positions of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask
            .offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether any filled cell hits a wall, the floor or a locked cell
    pub fn collides(&self, board: &Board) -> bool {
        self.cells().any(|(x, y)| board.blocks(x, y))
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn rotated(&self) -> Self {
        Self {
            mask: self.mask.rotated(),
            ..*self
        }
    }
}
