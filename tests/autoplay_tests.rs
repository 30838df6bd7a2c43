//! Autoplay integration: the search contract and the paced driver playing
//! real games through the engine's command surface.

use blockfall::autoplay::{find_best_move, AutoplayDriver};
use blockfall::core::{Board, GameEngine, Tetromino};
use blockfall::types::PieceKind;

#[test]
fn search_restores_all_observable_state() {
    let mut board = Board::default();
    for x in 0..10 {
        board.set(x, 19, Some(PieceKind::L));
    }
    board.set(0, 18, Some(PieceKind::L));
    let board_before = board.clone();

    let piece = Tetromino::new(PieceKind::S, 10);
    let piece_before = piece;

    let plan = find_best_move(&piece, &board).expect("placements exist");
    assert!(plan.rotation < 4);
    assert!((0..10).contains(&plan.column));

    assert_eq!(board, board_before);
    assert_eq!(piece, piece_before);
    assert_eq!(piece.cells(), piece_before.cells());
}

#[test]
fn search_fills_a_double_gap_with_the_square() {
    let mut board = Board::default();
    for x in 0..10 {
        if x != 4 && x != 5 {
            board.set(x, 18, Some(PieceKind::J));
            board.set(x, 19, Some(PieceKind::J));
        }
    }
    let piece = Tetromino::new(PieceKind::O, 10);
    let plan = find_best_move(&piece, &board).unwrap();
    assert_eq!(plan.column, 4);
}

#[test]
fn driver_respects_pause_and_the_autoplay_flag() {
    let mut game = GameEngine::new(11);
    let mut driver = AutoplayDriver::new();
    game.start();

    assert!(!driver.step(&mut game), "autoplay off by default");

    game.set_autoplay(true);
    game.pause();
    assert!(!driver.step(&mut game));

    game.resume();
    assert!(driver.step(&mut game));
}

#[test]
fn driver_plays_a_whole_game_through_the_move_api() {
    let mut game = GameEngine::new(123);
    let mut driver = AutoplayDriver::new();
    game.set_autoplay(true);
    game.start();

    // Alternate autoplay steps with gravity, like a host with two timers.
    let mut clears = 0;
    for _ in 0..50_000 {
        if game.game_over() || game.piece_id() > 300 {
            break;
        }
        driver.step(&mut game);
        if let Some(event) = game.take_last_event() {
            clears += event.lines_cleared;
        }
        game.tick();
        if let Some(event) = game.take_last_event() {
            clears += event.lines_cleared;
        }
    }

    // The heuristic comfortably outlives random stacking: it must still be
    // alive (or have cleared lines on the way down) after many pieces.
    assert!(game.piece_id() > 50 || clears > 0);
    assert_eq!(game.lines(), clears);
}

#[test]
fn driver_completes_an_obvious_double_clear() {
    // Rows 18 and 19 almost full; the driver gets O pieces and must close
    // the two-column gap.
    let mut game = GameEngine::new(6);
    let mut driver = AutoplayDriver::new();
    game.set_autoplay(true);
    game.set_forced_next(Some(PieceKind::O));
    game.start();

    // Build the near-complete floor with forced O pieces: columns 0..=3
    // and 6..=9 across rows 18..=19, leaving the middle gap open.
    for column in [0i8, 2, 6, 8] {
        loop {
            let x = game.current().unwrap().x;
            if x == column {
                break;
            }
            if x < column {
                game.move_right();
            } else {
                game.move_left();
            }
        }
        game.hard_drop();
        game.take_last_event();
    }
    assert_eq!(game.lines(), 0);

    // Now let the driver place the final O.
    let before_id = game.piece_id();
    for _ in 0..200 {
        if game.piece_id() != before_id {
            break;
        }
        driver.step(&mut game);
    }

    assert_eq!(game.lines(), 2);
    let event = game.take_last_event().expect("clearing settle");
    assert_eq!(event.lines_cleared, 2);
    assert_eq!(event.points, 100);
}
