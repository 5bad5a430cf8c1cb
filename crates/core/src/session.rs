//! Session - connects an engine to its renderer and presenter
//!
//! The host owns the timer and the input source and calls [`Session::apply`]
//! and [`Session::tick`]. The session pushes a snapshot to the renderer after
//! every call the engine accepted and tells the presenter about game over
//! exactly once per game.

use crate::engine::{GameEngine, Outcome};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// Paints a snapshot. Called after every mutation with the full state.
pub trait Renderer {
    type Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}

/// Receives the end-of-game notification.
pub trait Presenter {
    fn game_over(&mut self, final_score: u32);
}

pub struct Session<R, P> {
    engine: GameEngine,
    renderer: R,
    presenter: P,
    snapshot: GameSnapshot,
}

impl<R: Renderer, P: Presenter> Session<R, P> {
    /// Start a game and draw its first frame
    pub fn new(seed: u32, renderer: R, presenter: P) -> Result<Self, R::Error> {
        Self::with_engine(GameEngine::new(seed), renderer, presenter)
    }

    /// Wrap an existing engine and draw its current state
    pub fn with_engine(engine: GameEngine, renderer: R, presenter: P) -> Result<Self, R::Error> {
        let mut session = Self {
            engine,
            renderer,
            presenter,
            snapshot: GameSnapshot::default(),
        };
        session.refresh()?;
        Ok(session)
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn game_over(&self) -> bool {
        self.engine.game_over()
    }

    /// Whether the host should arm another gravity tick
    pub fn should_schedule_tick(&self) -> bool {
        !self.engine.game_over()
    }

    /// Handle one input command.
    ///
    /// `Restart` always starts a new game. Everything else is dropped once the
    /// game is over, without a redraw.
    pub fn apply(&mut self, action: GameAction) -> Result<Outcome, R::Error> {
        if action == GameAction::Restart {
            self.restart()?;
            return Ok(Outcome::Restarted);
        }
        if self.engine.game_over() {
            return Ok(Outcome::Ignored);
        }
        let outcome = self.engine.apply_action(action);
        self.refresh()?;
        Ok(outcome)
    }

    /// Advance gravity by one step
    pub fn tick(&mut self) -> Result<Outcome, R::Error> {
        if self.engine.game_over() {
            return Ok(Outcome::Ignored);
        }
        let outcome = self.engine.tick();
        self.refresh()?;
        Ok(outcome)
    }

    /// Throw the current game away: empty board, score 0, new first piece.
    ///
    /// The new game continues the RNG sequence instead of replaying it.
    pub fn restart(&mut self) -> Result<(), R::Error> {
        self.engine = GameEngine::new(self.engine.seed());
        self.refresh()
    }

    /// Draw the current state again without changing it (e.g. after a resize)
    pub fn redraw(&mut self) -> Result<(), R::Error> {
        self.engine.snapshot_into(&mut self.snapshot);
        self.renderer.render(&self.snapshot)
    }

    /// Redraw, then hand a fresh game over to the presenter.
    ///
    /// The notice is delivered even when the render fails: once the game is
    /// over nothing calls `refresh` again until a restart.
    fn refresh(&mut self) -> Result<(), R::Error> {
        let rendered = self.redraw();
        if let Some(final_score) = self.engine.take_game_over() {
            self.presenter.game_over(final_score);
        }
        rendered
    }
}
