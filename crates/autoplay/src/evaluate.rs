//! Placement evaluation - the heuristic that scores a candidate landing.
//!
//! The score is computed against a scratch board with the candidate
//! placement already baked in (complete rows still present, not yet
//! cleared). Higher is better. The terms reward low flat stacks that keep
//! the middle columns open for long pieces, and punish holes hard.

use blockfall_core::{Board, Tetromino};

/// Multiplier on the landing-depth term.
const HEIGHT_FACTOR: f64 = 1.5;
/// Weight of surface smoothness (sum of adjacent height differences).
const SMOOTHNESS_WEIGHT: f64 = 2.5;
/// Weight per covered hole. Dominant penalty.
const HOLE_WEIGHT: f64 = -7.5;
/// Weight per completed row.
const LINE_WEIGHT: f64 = 20.0;
/// Multiplier on the squared tallest-column penalty.
const MAX_HEIGHT_FACTOR: f64 = 0.8;
/// Weight of the edge-vs-center height balance.
const CENTER_WEIGHT: f64 = 2.0;

/// Height of every column: board height minus the topmost occupied row,
/// or 0 for an empty column.
pub fn column_heights(board: &Board) -> Vec<u32> {
    let (width, height) = (board.width() as i8, board.height() as i8);
    (0..width)
        .map(|x| {
            (0..height)
                .find(|&y| board.is_occupied(x, y))
                .map_or(0, |top| (height - top) as u32)
        })
        .collect()
}

/// Covered holes: empty cells with any occupied cell above them, summed
/// per column.
pub fn count_holes(board: &Board) -> u32 {
    let (width, height) = (board.width() as i8, board.height() as i8);
    let mut holes = 0;
    for x in 0..width {
        let mut covered = false;
        for y in 0..height {
            if board.is_occupied(x, y) {
                covered = true;
            } else if covered {
                holes += 1;
            }
        }
    }
    holes
}

/// Rows that are currently complete (about to clear).
pub fn complete_rows(board: &Board) -> u32 {
    (0..board.height() as usize)
        .filter(|&y| board.is_row_full(y))
        .count() as u32
}

/// Negated sum of adjacent column height differences; 0 for a flat
/// surface, increasingly negative for jagged ones.
fn smoothness(heights: &[u32]) -> f64 {
    -heights
        .windows(2)
        .map(|pair| (pair[0] as i64 - pair[1] as i64).abs() as f64)
        .sum::<f64>()
}

/// Average edge-column height minus average center-column height.
///
/// Positive when the middle stays open (where long pieces want to land).
/// Edges are the two outermost columns per side; the center is the four
/// middle columns ({0,1,8,9} vs {3,4,5,6} on the default board). Boards
/// too narrow for disjoint groups score 0.
fn center_balance(heights: &[u32]) -> f64 {
    let w = heights.len();
    if w < 8 {
        return 0.0;
    }
    let edges = [0, 1, w - 2, w - 1];
    let mid = (w - 4) / 2;
    let edge_avg = edges.iter().map(|&x| heights[x] as f64).sum::<f64>() / 4.0;
    let center_avg = heights[mid..mid + 4].iter().map(|&h| h as f64).sum::<f64>() / 4.0;
    edge_avg - center_avg
}

/// Score a candidate placement.
///
/// `board` must already contain the candidate piece's cells; `piece` is
/// the dropped candidate (its bottom row decides the landing-depth term).
pub fn evaluate_placement(board: &Board, piece: &Tetromino) -> f64 {
    let bottom = piece.cells().iter().map(|&(_, y)| y).max().unwrap_or(0);
    let height_score = (board.height() as f64 - (bottom + 1) as f64) * HEIGHT_FACTOR;

    let heights = column_heights(board);
    let max_height = heights.iter().copied().max().unwrap_or(0) as f64;
    let max_height_score = -(max_height * max_height) * MAX_HEIGHT_FACTOR;

    height_score
        + smoothness(&heights) * SMOOTHNESS_WEIGHT
        + count_holes(board) as f64 * HOLE_WEIGHT
        + complete_rows(board) as f64 * LINE_WEIGHT
        + max_height_score
        + center_balance(&heights) * CENTER_WEIGHT
}
