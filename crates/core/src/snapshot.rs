//! Snapshot module - by-value frame data for renderers
//!
//! A snapshot is a plain copy of the board as the player sees it, plus the
//! score and line counters. Hosts keep one and refill it with
//! `GameEngine::snapshot_into` so frames never allocate.
//!
//! ```
//! use grid_tetris_core::{GameEngine, GameSnapshot};
//!
//! let mut engine = GameEngine::new(9);
//! let mut snap = GameSnapshot::default();
//! engine.snapshot_into(&mut snap);
//! assert_eq!(snap.active.as_ref().map(|a| a.cells.len()), Some(4));
//!
//! engine.hard_drop();
//! engine.snapshot_into(&mut snap);
//! assert!(snap.board[19].iter().any(|cell| cell.is_some()));
//! ```

use arrayvec::ArrayVec;

use crate::pieces::Tetromino;
use crate::types::{Cell, Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The falling piece, resolved to absolute board cells.
///
/// Only cells on the visible board (y >= 0) are listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    pub cells: ArrayVec<(i8, i8), 4>,
}

impl From<&Tetromino> for ActiveSnapshot {
    fn from(value: &Tetromino) -> Self {
        let mut cells = ArrayVec::new();
        for (x, y) in value.cells().filter(|&(_, y)| y >= 0) {
            // Every template has exactly four minos.
            let _ = cells.try_push((x, y));
        }
        Self {
            kind: value.kind,
            color: value.color,
            cells,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// What to paint at (x, y): the active piece wins over the board.
    ///
    /// The flag is true when the color comes from the active piece.
    pub fn resolved(&self, x: i8, y: i8) -> Option<(Color, bool)> {
        if let Some(active) = &self.active {
            if active.cells.contains(&(x, y)) {
                return Some((active.color, true));
            }
        }
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        self.board[y as usize][x as usize].map(|color| (color, false))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_cells_above_board_are_dropped() {
        let mut piece = Tetromino::new(PieceKind::T, Color::Purple);
        piece.y = -1;
        let snap = ActiveSnapshot::from(&piece);
        // Top row of the T is at y = -1; only the stem is visible.
        assert_eq!(snap.cells.as_slice(), &[(4, 0)]);
    }

    #[test]
    fn resolved_prefers_active_piece() {
        let mut snap = GameSnapshot::default();
        snap.board[0][3] = Some(Color::Red);
        assert_eq!(snap.resolved(3, 0), Some((Color::Red, false)));

        let piece = Tetromino::new(PieceKind::I, Color::Cyan);
        snap.active = Some(ActiveSnapshot::from(&piece));
        assert_eq!(snap.resolved(3, 0), Some((Color::Cyan, true)));
        assert_eq!(snap.resolved(9, 19), None);
        assert_eq!(snap.resolved(-1, 0), None);
    }
}
