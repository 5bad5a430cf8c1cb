//! Terminal runner (default binary).
//!
//! Owns the gravity timer and the keyboard, and hands both to a core
//! `Session` that renders through crossterm.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grid_tetris::core::Session;
use grid_tetris::input::{handle_key_event, is_press, should_quit};
use grid_tetris::term::{FinalScore, GameView, TermSink, TerminalRenderer};
use grid_tetris::types::{GameAction, TICK_MS};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// RNG seed; defaults to one taken from the clock.
    #[arg(long)]
    seed: Option<u32>,
    /// Gravity interval in milliseconds.
    #[arg(long, default_value_t = TICK_MS, value_parser = clap::value_parser!(u32).range(1..))]
    tick_ms: u32,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    log: String,
    /// Write logs to this file. Nothing is logged without it, since the
    /// game owns the terminal.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, tick_ms = args.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, Duration::from_millis(args.tick_ms as u64));

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(score) = result? {
        println!("Game over! Score: {score}");
    }
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&args.log))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

/// Play until the user quits. Returns the final score of the last finished game.
fn run(term: &mut TerminalRenderer, seed: u32, tick: Duration) -> Result<Option<u32>> {
    let sink = TermSink::new(term, GameView::default());
    let mut session = Session::new(seed, sink, FinalScore::default())?;
    let mut last_tick = Instant::now();

    loop {
        // Only wait on the timer while a tick is due; after game over, block on input.
        let ready = if session.should_schedule_tick() {
            let timeout = tick.saturating_sub(last_tick.elapsed());
            event::poll(timeout)?
        } else {
            true
        };

        if ready {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        let outcome = session.apply(action)?;
                        debug!(action = action.as_str(), ?outcome, "input");
                        if action == GameAction::Restart {
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Resize(..) => {
                    session.renderer_mut().invalidate();
                    session.redraw()?;
                }
                _ => {}
            }
        }

        if session.should_schedule_tick() && last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            session.tick()?;
        }
    }

    info!(games = session.presenter().games(), "quit");
    Ok(session.presenter().last())
}
