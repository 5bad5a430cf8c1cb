//! Engine behaviour: movement, rotation, drops, locking, scoring and game over.

use grid_tetris::core::{Board, GameEngine, Outcome, Tetromino};
use grid_tetris::types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};

fn engine_with(kind: PieceKind, color: Color) -> GameEngine {
    engine_on(Board::new(), kind, color)
}

fn engine_on(board: Board, kind: PieceKind, color: Color) -> GameEngine {
    let mut engine = GameEngine::from_board(12345, board);
    assert!(!engine.game_over());
    assert_eq!(engine.spawn_piece(kind, color), Outcome::Moved);
    engine
}

fn active(engine: &GameEngine) -> Tetromino {
    *engine.active().expect("active piece")
}

/// Every row of the board rendered as `.` (empty) or `#` (filled).
fn board_rows(board: &Board) -> Vec<String> {
    board
        .rows()
        .map(|row| row.iter().map(|c| if c.is_some() { '#' } else { '.' }).collect())
        .collect()
}

#[test]
fn test_collision_predicate_matches_definition() {
    let mut board = Board::new();
    board.set(5, 10, Some(Color::Red));
    let engine = GameEngine::from_board(1, board);

    for kind in PieceKind::ALL {
        for y in -3..22i8 {
            for x in -4..12i8 {
                let mut piece = Tetromino::new(kind, Color::Blue);
                piece.x = x;
                piece.y = y;
                let expected = piece.cells().any(|(cx, cy)| {
                    cx < 0
                        || cx >= BOARD_WIDTH as i8
                        || cy >= BOARD_HEIGHT as i8
                        || (cy >= 0 && (cx, cy) == (5, 10))
                });
                assert_eq!(piece.collides(engine.board()), expected, "{:?} at ({}, {})", kind, x, y);
            }
        }
    }
}

#[test]
fn test_move_into_occupied_cell_keeps_anchor() {
    let mut board = Board::new();
    // Right of where the O will be after five ticks (columns 3-4, rows 5-6).
    board.set(5, 6, Some(Color::Red));
    let mut engine = engine_on(board, PieceKind::O, Color::Yellow);
    for _ in 0..5 {
        assert_eq!(engine.tick(), Outcome::Moved);
    }

    let before = active(&engine);
    assert_eq!(engine.move_right(), Outcome::Blocked);
    assert_eq!(active(&engine), before);

    assert_eq!(engine.move_left(), Outcome::Moved);
    assert_eq!(active(&engine).x, SPAWN_X - 1);
}

#[test]
fn test_move_into_right_wall_keeps_anchor() {
    let mut engine = engine_with(PieceKind::I, Color::Cyan);
    for _ in 0..3 {
        assert_eq!(engine.move_right(), Outcome::Moved);
    }
    assert_eq!(active(&engine).x, 6);
    assert_eq!(engine.move_right(), Outcome::Blocked);
    assert_eq!(active(&engine).x, 6);
}

#[test]
fn test_rotate_blocked_by_neighbour_restores_mask() {
    let mut board = Board::new();
    // A vertical I at (3, 0) would cover (3, 0..4); block (3, 2).
    board.set(3, 2, Some(Color::Green));
    let mut engine = engine_on(board, PieceKind::I, Color::Cyan);

    let before = active(&engine);
    assert_eq!(engine.rotate(), Outcome::Blocked);
    assert_eq!(active(&engine).mask, before.mask);
    assert_eq!(active(&engine), before);
}

#[test]
fn test_rotate_keeps_anchor() {
    let mut engine = engine_with(PieceKind::T, Color::Purple);
    engine.tick();
    let before = active(&engine);
    assert_eq!(engine.rotate(), Outcome::Moved);
    let after = active(&engine);
    assert_eq!((after.x, after.y), (before.x, before.y));
    assert_eq!(after.mask, before.mask.rotated());
}

#[test]
fn test_rotate_o_piece_keeps_shape() {
    let mut engine = engine_with(PieceKind::O, Color::Yellow);
    let before = active(&engine);
    assert_eq!(engine.rotate(), Outcome::Moved);
    assert_eq!(active(&engine).mask, before.mask);
}

#[test]
fn test_single_line_clear_scores_40() {
    let mut board = Board::new();
    // Row 19 full except columns 3-6, where the I piece will land.
    for x in (0..3).chain(7..10) {
        board.set(x, 19, Some(Color::Red));
    }
    board.set(0, 18, Some(Color::Blue));
    let mut engine = engine_on(board, PieceKind::I, Color::Cyan);

    assert_eq!(
        engine.hard_drop(),
        Outcome::Locked {
            lines: 1,
            awarded: 40
        }
    );
    assert_eq!(engine.score(), 40);
    assert_eq!(engine.lines(), 1);
    // Former row 18 is now the bottom row.
    assert_eq!(engine.board().get(0, 19), Some(Some(Color::Blue)));
    assert_eq!(engine.board().rows().flatten().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_four_line_clear_scores_1200_in_one_lock() {
    let mut board = Board::new();
    // Rows 16-19 full except column 0; a vertical I finishes all four.
    for y in 16..20 {
        for x in 1..10 {
            board.set(x, y, Some(Color::Orange));
        }
    }
    let mut engine = engine_on(board, PieceKind::I, Color::Cyan);
    assert_eq!(engine.rotate(), Outcome::Moved);
    for _ in 0..3 {
        assert_eq!(engine.move_left(), Outcome::Moved);
    }
    assert_eq!(active(&engine).x, 0);

    assert_eq!(
        engine.hard_drop(),
        Outcome::Locked {
            lines: 4,
            awarded: 1200
        }
    );
    assert_eq!(engine.score(), 1200);
    assert!(engine.board().is_empty());
}

#[test]
fn test_score_accumulates_and_never_decreases() {
    let mut engine = GameEngine::new(99);
    let mut last = engine.score();
    for _ in 0..200 {
        if engine.game_over() {
            break;
        }
        let _ = engine.tick();
        assert!(engine.score() >= last);
        last = engine.score();
    }
}

#[test]
fn test_hard_drop_rests_on_floor_or_stack() {
    for seed in 1..40u32 {
        let mut engine = GameEngine::new(seed);
        for _ in 0..6 {
            let Some(piece) = engine.active().copied() else {
                break;
            };
            let before = *engine.board();

            // Work out where the drop should land on the pre-lock board.
            let mut landed = piece;
            while !landed.shifted(0, 1).collides(&before) {
                landed = landed.shifted(0, 1);
            }
            assert!(landed.shifted(0, 1).collides(&before));

            engine.hard_drop();

            let supported = landed.cells().any(|(x, y)| {
                y + 1 == BOARD_HEIGHT as i8 || before.is_occupied(x, y + 1)
            });
            assert!(supported, "seed {} piece {:?} floats", seed, piece.kind);
        }
    }
}

#[test]
fn test_tick_locks_when_grounded() {
    let mut engine = engine_with(PieceKind::I, Color::Green);
    let spawned = engine.pieces_spawned();
    for _ in 0..19 {
        assert_eq!(engine.tick(), Outcome::Moved);
    }
    assert_eq!(active(&engine).y, 19);
    assert_eq!(
        engine.tick(),
        Outcome::Locked {
            lines: 0,
            awarded: 0
        }
    );
    assert_eq!(engine.board().get(3, 19), Some(Some(Color::Green)));
    assert_eq!(engine.pieces_spawned(), spawned + 1);
}

#[test]
fn test_spawn_into_full_top_is_game_over() {
    let mut board = Board::new();
    for y in 0..2 {
        for x in 0..BOARD_WIDTH as usize {
            // Leave a hole per row so nothing clears.
            if x != 9 {
                board.set(x as i8, y, Some(Color::Red));
            }
        }
    }
    let mut engine = GameEngine::from_board(7, board);

    assert!(engine.game_over());
    assert!(engine.active().is_none());
    assert_eq!(engine.take_game_over(), Some(0));

    let before = engine.snapshot();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::HardDrop,
    ] {
        assert_eq!(engine.apply_action(action), Outcome::Ignored);
    }
    assert_eq!(engine.tick(), Outcome::Ignored);
    assert_eq!(engine.spawn_piece(PieceKind::O, Color::Red), Outcome::Ignored);
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.take_game_over(), None);
}

#[test]
fn test_lock_that_blocks_spawn_ends_game() {
    let mut board = Board::new();
    // Stack reaching row 2 under the spawn area, with a gap so it never clears.
    for y in 2..20 {
        board.set(4, y, Some(Color::Blue));
    }
    let mut engine = engine_on(board, PieceKind::O, Color::Yellow);

    // The O lands on top of the column at rows 0-1 and fills the spawn area.
    assert_eq!(engine.hard_drop(), Outcome::GameOver { final_score: 0 });
    assert!(engine.game_over());
    assert_eq!(engine.take_game_over(), Some(0));
}

#[test]
fn test_end_to_end_i_piece_hard_drop() {
    let c = Color::Purple;
    let mut engine = engine_with(PieceKind::I, c);
    let spawned = engine.pieces_spawned();

    assert_eq!(
        engine.hard_drop(),
        Outcome::Locked {
            lines: 0,
            awarded: 0
        }
    );

    let bottom: Vec<_> = engine.board().row(19).to_vec();
    assert_eq!(
        bottom,
        vec![None, None, None, Some(c), Some(c), Some(c), Some(c), None, None, None]
    );
    let rows = board_rows(engine.board());
    assert!(rows[..19].iter().all(|r| r == ".........."));
    assert_eq!(engine.score(), 0);
    assert!(engine.active().is_some());
    assert_eq!(engine.pieces_spawned(), spawned + 1);
}

#[test]
fn test_snapshot_reports_visible_active_cells() {
    let engine = engine_with(PieceKind::T, Color::Red);
    let snap = engine.snapshot();
    let active = snap.active.expect("active");
    assert_eq!(active.color, Color::Red);
    assert_eq!(active.cells.as_slice(), &[(3, 0), (4, 0), (5, 0), (4, 1)]);
    assert!(!snap.game_over);
    assert_eq!(snap.score, 0);
}
