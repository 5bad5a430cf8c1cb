//! Game engine - owns the board, the falling piece and the score
//!
//! Every public operation runs to completion and reports an [`Outcome`].
//! Locking, clearing and spawning the next piece happen inside a single call,
//! so callers never see a locked board without a next piece.

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::rng::PieceSource;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{line_clear_score, Color, GameAction, PieceKind};

/// What a single engine or session call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No active piece, or the game is already over.
    Ignored,
    /// The piece moved, rotated or fell one row.
    Moved,
    /// The requested move collided and was reverted.
    Blocked,
    /// The piece locked and the next one spawned.
    Locked { lines: usize, awarded: u32 },
    /// The piece locked (or a spawn was attempted) and the next spawn collided.
    GameOver { final_score: u32 },
    /// The host threw the game away and started a new one.
    Restarted,
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: Option<Tetromino>,
    source: PieceSource,
    score: u32,
    lines: u32,
    pieces_spawned: u32,
    game_over: bool,
    /// Final score waiting for the host, set once when the game ends.
    pending_game_over: Option<u32>,
}

impl GameEngine {
    /// Start a game on an empty board and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::from_board(seed, Board::new())
    }

    /// Start a game on a prepared board.
    ///
    /// The first spawn may already collide, in which case the engine starts
    /// out over.
    pub fn from_board(seed: u32, board: Board) -> Self {
        let mut engine = Self {
            board,
            active: None,
            source: PieceSource::new(seed),
            score: 0,
            lines: 0,
            pieces_spawned: 0,
            game_over: false,
            pending_game_over: None,
        };
        engine.spawn_next();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// RNG state, suitable for seeding the next game
    pub fn seed(&self) -> u32 {
        self.source.seed()
    }

    /// Take the game-over notification. Yields the final score once.
    pub fn take_game_over(&mut self) -> Option<u32> {
        self.pending_game_over.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the active piece with a specific one at the spawn anchor.
    ///
    /// Follows the same rules as a random spawn: if the piece collides the
    /// game ends. Only built for tests and benches (`test-util`), since it
    /// discards the falling piece without locking it.
    #[cfg(any(test, feature = "test-util"))]
    pub fn spawn_piece(&mut self, kind: PieceKind, color: Color) -> Outcome {
        if self.game_over {
            return Outcome::Ignored;
        }
        if self.spawn(kind, color) {
            Outcome::Moved
        } else {
            Outcome::GameOver {
                final_score: self.score,
            }
        }
    }

    fn spawn_next(&mut self) -> bool {
        let (kind, color) = self.source.draw();
        self.spawn(kind, color)
    }

    fn spawn(&mut self, kind: PieceKind, color: Color) -> bool {
        let piece = Tetromino::new(kind, color);
        if piece.collides(&self.board) {
            self.active = None;
            self.game_over = true;
            self.pending_game_over = Some(self.score);
            info!(score = self.score, lines = self.lines, "game over");
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!(kind = kind.as_str(), color = color.as_str(), "spawned piece");
        true
    }

    fn playing(&self) -> Option<Tetromino> {
        if self.game_over {
            return None;
        }
        self.active
    }

    /// Keep `candidate` if it fits, otherwise leave the piece where it was.
    fn commit(&mut self, candidate: Tetromino) -> Outcome {
        if candidate.collides(&self.board) {
            return Outcome::Blocked;
        }
        self.active = Some(candidate);
        Outcome::Moved
    }

    /// Shift the piece one column. `direction` is -1 (left) or +1 (right);
    /// anything else is ignored.
    pub fn move_piece(&mut self, direction: i8) -> Outcome {
        if direction != -1 && direction != 1 {
            return Outcome::Ignored;
        }
        let Some(active) = self.playing() else {
            return Outcome::Ignored;
        };
        self.commit(active.shifted(direction, 0))
    }

    pub fn move_left(&mut self) -> Outcome {
        self.move_piece(-1)
    }

    pub fn move_right(&mut self) -> Outcome {
        self.move_piece(1)
    }

    /// Quarter-turn the mask in place. No kicks: a colliding turn is discarded.
    pub fn rotate(&mut self) -> Outcome {
        let Some(active) = self.playing() else {
            return Outcome::Ignored;
        };
        self.commit(active.rotated())
    }

    /// Drop to the lowest row that still fits and lock there.
    pub fn hard_drop(&mut self) -> Outcome {
        let Some(mut piece) = self.playing() else {
            return Outcome::Ignored;
        };
        while !piece.collides(&self.board) {
            piece.y += 1;
        }
        piece.y -= 1;
        self.lock(piece)
    }

    /// One gravity step: fall a row, or lock if the row below is taken.
    pub fn tick(&mut self) -> Outcome {
        let Some(active) = self.playing() else {
            return Outcome::Ignored;
        };
        let fallen = active.shifted(0, 1);
        if fallen.collides(&self.board) {
            return self.lock(active);
        }
        self.active = Some(fallen);
        Outcome::Moved
    }

    fn lock(&mut self, piece: Tetromino) -> Outcome {
        for (x, y) in piece.cells() {
            // Cells above the board are lost.
            if y >= 0 {
                self.board.set(x, y, Some(piece.color));
            }
        }
        self.active = None;

        let cleared = self.board.clear_full_rows();
        let awarded = line_clear_score(cleared);
        self.score = self.score.saturating_add(awarded);
        self.lines = self.lines.saturating_add(cleared as u32);
        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            lines = cleared,
            score = self.score,
            "locked piece"
        );

        if self.spawn_next() {
            Outcome::Locked {
                lines: cleared,
                awarded,
            }
        } else {
            Outcome::GameOver {
                final_score: self.score,
            }
        }
    }

    /// Apply an engine command. `Restart` belongs to the host and is ignored.
    pub fn apply_action(&mut self, action: GameAction) -> Outcome {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Restart => Outcome::Ignored,
        }
    }
}
