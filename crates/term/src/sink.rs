//! Terminal implementations of the core `Renderer` and `Presenter` traits.

use anyhow::Result;
use tracing::info;

use crate::core::{GameSnapshot, Presenter, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Paints every snapshot to the terminal.
pub struct TermSink<'a> {
    term: &'a mut TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl<'a> TermSink<'a> {
    pub fn new(term: &'a mut TerminalRenderer, view: GameView) -> Self {
        Self {
            term,
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Next frame is drawn in full (call after a resize).
    pub fn invalidate(&mut self) {
        self.term.invalidate();
    }
}

impl Renderer for TermSink<'_> {
    type Error = anyhow::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}

/// Keeps the final score of the most recent game.
///
/// The game-over screen itself is part of the rendered frame; this is what the
/// host reports once the terminal is restored.
#[derive(Debug, Default)]
pub struct FinalScore {
    last: Option<u32>,
    games: u32,
}

impl FinalScore {
    pub fn last(&self) -> Option<u32> {
        self.last
    }

    pub fn games(&self) -> u32 {
        self.games
    }
}

impl Presenter for FinalScore {
    fn game_over(&mut self, final_score: u32) {
        self.last = Some(final_score);
        self.games += 1;
        info!(final_score, games = self.games, "presented game over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_score_tracks_latest_game() {
        let mut p = FinalScore::default();
        assert_eq!(p.last(), None);
        p.game_over(40);
        p.game_over(1300);
        assert_eq!(p.last(), Some(1300));
        assert_eq!(p.games(), 2);
    }
}
