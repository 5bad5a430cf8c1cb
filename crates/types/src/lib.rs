//! Shared types and constants for the game.
//!
//! Everything here is plain data with no dependencies, so it can be used from
//! the engine, the terminal renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0), the top-left cell of the piece mask
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 400 | Fixed gravity interval |
//!
//! There is no level curve: the fall interval never changes during a game.
//!
//! # Examples
//!
//! ```
//! use grid_tetris_types::{line_clear_score, GameAction, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//! assert_eq!(line_clear_score(4), 1200);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor column for a freshly spawned piece
pub const SPAWN_X: i8 = 3;

/// Anchor row for a freshly spawned piece
pub const SPAWN_Y: i8 = 0;

/// Gravity interval in milliseconds
pub const TICK_MS: u32 = 400;

/// Points per lock event, indexed by the number of lines cleared by that lock.
///
/// - 0 lines: 0
/// - 1 line: 40
/// - 2 lines: 100
/// - 3 lines: 300
/// - 4 lines: 1200
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Score awarded for clearing `lines` rows in one lock.
///
/// Counts above four can only come from hand-built boards; they score as four.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(LINE_SCORES[LINE_SCORES.len() - 1])
}

/// The seven piece shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in template order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Short name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Cell colors.
///
/// Color is drawn independently of the piece kind, so any shape can show up in
/// any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Red,
    Cyan,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Red,
        Color::Cyan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Cyan => "cyan",
        }
    }
}

/// Commands an input source can issue.
///
/// The first four go to the engine. `Restart` is handled by the host session
/// and is the only command that does anything after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Quarter-turn the piece mask in place
    Rotate,
    /// Drop the piece to the lowest valid row and lock it
    HardDrop,
    /// Throw the current game away and start a fresh one
    Restart,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;
