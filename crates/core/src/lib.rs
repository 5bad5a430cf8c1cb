//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules: the board, piece masks, collision, locking,
//! line clearing and scoring. It does no I/O. Hosts drive it through
//! [`Session`], which hands snapshots to a [`Renderer`] and the final score to
//! a [`Presenter`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with bounds checks and line clearing
//! - [`pieces`]: shape masks, rotation and the falling [`Tetromino`]
//! - [`rng`]: seeded shape/color selection
//! - [`engine`]: [`GameEngine`], the state machine behind every command
//! - [`snapshot`]: by-value frame data for renderers
//! - [`session`]: renderer/presenter wiring
//!
//! # Game Rules
//!
//! - Pieces spawn with their mask's top-left cell at (3, 0)
//! - Moves and rotations that collide are reverted; there are no wall kicks
//! - Hard drop falls to the lowest valid row and locks at once
//! - Each gravity tick either drops the piece one row or locks it
//! - Lines score 40 / 100 / 300 / 1200 for 1-4 rows cleared by one lock
//! - A spawn that collides ends the game
//!
//! # Example
//!
//! ```
//! use grid_tetris_core::{GameEngine, Outcome};
//!
//! let mut game = GameEngine::new(12345);
//! game.move_left();
//!
//! match game.hard_drop() {
//!     Outcome::Locked { lines, awarded } => assert_eq!((lines, awarded), (0, 0)),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert!(game.board().row(19).iter().any(|cell| cell.is_some()));
//! assert_eq!(game.pieces_spawned(), 2);
//! ```

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use grid_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{GameEngine, Outcome};
pub use pieces::{template, Mask, Tetromino};
pub use rng::{PieceSource, SimpleRng};
pub use session::{Presenter, Renderer, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
