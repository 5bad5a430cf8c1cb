//! Terminal input mapping.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. There is no
//! DAS/ARR handling: each press (or terminal auto-repeat) is one command.

pub mod map;

pub use grid_tetris_types as types;

pub use map::{handle_key_event, is_press, should_quit};
