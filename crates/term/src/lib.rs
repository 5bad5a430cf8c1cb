//! Terminal rendering for the game.
//!
//! Snapshots are painted into a simple framebuffer (no widget toolkit), which
//! is then flushed to the terminal with crossterm.
//!
//! - [`GameView`] is pure: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns stdout and does the diffing
//! - [`TermSink`] and [`FinalScore`] plug both into a core `Session`

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use grid_tetris_core as core;
pub use grid_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
pub use sink::{FinalScore, TermSink};
