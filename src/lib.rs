//! Grid Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `grid_tetris::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use grid_tetris_core as core;
pub use grid_tetris_input as input;
pub use grid_tetris_term as term;
pub use grid_tetris_types as types;
