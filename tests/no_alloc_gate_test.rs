use std::alloc::{GlobalAlloc, Layout, System};
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use grid_tetris::core::{GameEngine, GameSnapshot, Presenter, Renderer, Session};
use grid_tetris::types::GameAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Keeps only counters so the renderer itself never allocates.
#[derive(Default)]
struct Counting {
    frames: usize,
    score: u32,
}

impl Renderer for Counting {
    type Error = Infallible;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Infallible> {
        self.frames += 1;
        self.score = snapshot.score;
        Ok(())
    }
}

#[derive(Default)]
struct Games(u32);

impl Presenter for Games {
    fn game_over(&mut self, _final_score: u32) {
        self.0 += 1;
    }
}

// Both hot paths share one test: the counter is process-global and tests run
// in parallel threads.
#[test]
fn engine_and_session_hot_paths_do_not_allocate() {
    let mut engine = GameEngine::new(1);
    let mut snap = GameSnapshot::default();
    let mut session = Session::new(2, Counting::default(), Games::default()).unwrap();

    // Warm-up: play one game to the end so every log callsite is registered.
    let mut warm = GameEngine::new(3);
    while !warm.game_over() {
        let _ = warm.hard_drop();
    }

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = engine.tick();
            engine.snapshot_into(&mut snap);
        }

        for _ in 0..50 {
            let _ = engine.move_left();
            let _ = engine.move_right();
            let _ = engine.rotate();
        }

        // Hard drops drive locking, line clears, spawning and game over.
        for _ in 0..100 {
            let _ = engine.hard_drop();
            if engine.game_over() {
                engine = GameEngine::new(engine.seed());
            }
        }

        for _ in 0..100 {
            let _ = session.apply(GameAction::MoveLeft);
            let _ = session.apply(GameAction::Rotate);
            let _ = session.tick();
            let _ = session.apply(GameAction::HardDrop);
            if session.game_over() {
                let _ = session.apply(GameAction::Restart);
            }
        }
    });

    assert_eq!(allocs, 0);
    assert!(session.renderer().frames > 400);
}
