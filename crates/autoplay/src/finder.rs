//! Move search - exhaustive rotation x column placement scan.
//!
//! For each reachable rotation and each column, the candidate piece is
//! hard-dropped on a scratch copy and the resulting position scored with
//! [`evaluate_placement`](crate::evaluate::evaluate_placement). Everything
//! runs on copies; the live piece and board are never touched.

use blockfall_core::{Board, Tetromino};

use crate::evaluate::evaluate_placement;

/// A chosen placement: target rotation counter and anchor column, plus the
/// heuristic score that won. Recomputed for every piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePlan {
    pub rotation: u8,
    pub column: i8,
    pub score: f64,
}

/// Find the best `(rotation, column)` placement for `piece` on `board`.
///
/// Rotations are produced by repeated clockwise rotations of a scratch
/// copy at the piece's current position; once one rotation fails, deeper
/// ones are not attempted. Columns that collide before dropping are
/// skipped. Ties break to the first candidate found (rotation ascending,
/// then column ascending) because the comparison is strict.
///
/// Returns `None` only when no rotation/column admits a legal placement.
pub fn find_best_move(piece: &Tetromino, board: &Board) -> Option<MovePlan> {
    let mut best: Option<MovePlan> = None;
    let mut oriented = *piece;

    for step in 0..4u8 {
        if step > 0 && !oriented.rotate(board, true) {
            break;
        }

        for column in 0..board.width() as i8 {
            let mut candidate = oriented;
            candidate.x = column;
            if candidate.collides(board) {
                continue;
            }
            candidate.drop_to_rest(board);

            let mut scratch = board.clone();
            for (x, y) in candidate.cells() {
                if y >= 0 {
                    scratch.set(x, y, Some(candidate.kind));
                }
            }

            let score = evaluate_placement(&scratch, &candidate);
            if best.map_or(true, |b| score > b.score) {
                best = Some(MovePlan {
                    rotation: oriented.rotation(),
                    column,
                    score,
                });
            }
        }
    }

    best
}
