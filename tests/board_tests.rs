//! Board rules: bounds, collision, settling, and line clears.

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn new_board_is_empty_with_default_dimensions() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn construction_rejects_zero_dimensions() {
    assert!(Board::new(0, 20).is_err());
    assert!(Board::new(10, 0).is_err());
    assert!(Board::new(10, 20).is_ok());
}

#[test]
fn collision_applies_to_out_of_bounds_regardless_of_occupancy() {
    let board = Board::default();
    // Empty board: the walls and the floor alone cause collisions.
    assert!(board.collides(&[(-1, 5), (0, 5), (1, 5), (2, 5)]));
    assert!(board.collides(&[(7, 5), (8, 5), (9, 5), (10, 5)]));
    assert!(board.collides(&[(4, 17), (4, 18), (4, 19), (4, 20)]));
    assert!(!board.collides(&[(0, 0), (9, 0), (0, 19), (9, 19)]));
}

#[test]
fn cells_above_the_board_never_collide_on_occupancy() {
    let mut board = Board::default();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 0, Some(PieceKind::T));
    }
    // The whole top row is occupied, yet y < 0 stays collision-free.
    assert!(!board.collides(&[(3, -1), (4, -1), (5, -1), (6, -1)]));
    // The walls still apply above the board.
    assert!(board.collides(&[(-1, -1), (0, -1), (1, -1), (2, -1)]));
}

#[test]
fn clear_lines_on_an_empty_board_clears_nothing() {
    let mut board = Board::default();
    assert!(board.clear_lines().is_empty());
}

#[test]
fn one_full_row_clears_and_shifts_content_down() {
    let mut board = Board::default();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, Some(PieceKind::I));
    }
    board.set(0, 18, Some(PieceKind::S));

    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), 1);
    // The row above moved down; a fresh empty row appeared at the top.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(0, 18), Some(None));
    assert!(!board.top_row_occupied());
}

#[test]
fn settle_writes_only_visible_cells() {
    let mut board = Board::default();
    let cleared = board.settle(PieceKind::T, &[(4, -1), (3, 0), (4, 0), (5, 0)]);
    assert!(cleared.is_empty());
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 3);
    assert_eq!(board.get(4, 0), Some(Some(PieceKind::T)));
}

#[test]
fn settle_entirely_above_the_board_leaves_the_grid_unchanged() {
    let mut board = Board::default();
    let before = board.clone();
    board.settle(PieceKind::Z, &[(4, -2), (5, -2), (5, -1), (6, -1)]);
    assert_eq!(board, before);
}

#[test]
fn four_full_rows_clear_together() {
    let mut board = Board::default();
    for y in 16..20 {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }
    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), 4);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn reset_restores_the_empty_grid() {
    let mut board = Board::default();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 10, Some(PieceKind::L));
    }
    board.reset();
    assert!(board.cells().iter().all(|c| c.is_none()));
}
