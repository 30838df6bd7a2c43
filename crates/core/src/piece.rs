//! Piece module - the active tetromino and its legal transformations.
//!
//! Shapes are block offsets around a rotation center, not per-rotation
//! lookup tables: rotating applies the 90-degree matrix to the offsets and
//! keeps the result only if it is collision-free in place. There is no
//! wall-kick correction; a blocked rotation simply fails and rolls back.
//!
//! The O piece's center sits between its four cells at (0.5, -0.5), so
//! centers are stored in half-cell units to keep all arithmetic integral.
//! O never moves its offsets anyway (4-fold symmetry); only its rotation
//! counter advances.

use blockfall_types::PieceKind;

use crate::board::Board;

/// Block offsets (cell units) and rotation center (half-cell units) for a
/// piece kind in its spawn orientation. Negative y extends upward.
fn shape(kind: PieceKind) -> ([(i8, i8); 4], (i8, i8)) {
    match kind {
        PieceKind::I => ([(-1, 0), (0, 0), (1, 0), (2, 0)], (0, 0)),
        PieceKind::J => ([(-1, -1), (-1, 0), (0, 0), (1, 0)], (0, 0)),
        PieceKind::L => ([(-1, 0), (0, 0), (1, 0), (1, -1)], (0, 0)),
        PieceKind::O => ([(0, 0), (0, -1), (1, 0), (1, -1)], (1, -1)),
        PieceKind::S => ([(-1, 0), (0, 0), (0, -1), (1, -1)], (0, 0)),
        PieceKind::T => ([(-1, 0), (0, 0), (1, 0), (0, -1)], (0, 0)),
        PieceKind::Z => ([(-1, -1), (0, -1), (0, 0), (1, 0)], (0, 0)),
    }
}

/// The active falling piece.
///
/// A small value type: copies are the mechanism for speculative work
/// (ghost projection, autoplay search), so there is no shared state to
/// restore afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Block offsets for the current orientation, relative to the anchor.
    blocks: [(i8, i8); 4],
    /// Rotation counter, 0..4. Advances on every successful rotation.
    rotation: u8,
    /// Board-space anchor column.
    pub x: i8,
    /// Board-space anchor row; may be negative right after spawning.
    pub y: i8,
}

impl Tetromino {
    /// Create a piece of `kind` at the spawn anchor: middle column, top row.
    pub fn new(kind: PieceKind, board_width: u8) -> Self {
        let (blocks, _) = shape(kind);
        Self {
            kind,
            blocks,
            rotation: 0,
            x: ((board_width - 1) / 2) as i8,
            y: 0,
        }
    }

    /// Current shape-local block offsets (used for next-piece previews).
    pub fn blocks(&self) -> [(i8, i8); 4] {
        self.blocks
    }

    /// Rotation counter, 0..4.
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Absolute board coordinates of the four blocks. Pure.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.blocks.map(|(bx, by)| (bx + self.x, by + self.y))
    }

    /// Whether the piece is illegal at its current position.
    ///
    /// Legality is the board's rule; the piece only asks.
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.cells())
    }

    /// Rotate 90 degrees around the piece's center.
    ///
    /// The square piece always succeeds without moving its blocks. Other
    /// kinds commit only if the rotated position is collision-free; on a
    /// collision the pre-rotation offsets and counter are restored and
    /// false is returned.
    pub fn rotate(&mut self, board: &Board, clockwise: bool) -> bool {
        if self.kind == PieceKind::O {
            self.rotation = (self.rotation + 1) % 4;
            return true;
        }

        let saved_blocks = self.blocks;
        let saved_rotation = self.rotation;
        let (_, (cx, cy)) = shape(self.kind);

        for block in &mut self.blocks {
            // Half-cell units keep the translate/rotate/translate exact.
            let rx = 2 * block.0 - cx;
            let ry = 2 * block.1 - cy;
            let (nx, ny) = if clockwise { (-ry, rx) } else { (ry, -rx) };
            *block = ((nx + cx) / 2, (ny + cy) / 2);
        }
        self.rotation = (self.rotation + 1) % 4;

        if self.collides(board) {
            self.blocks = saved_blocks;
            self.rotation = saved_rotation;
            return false;
        }
        true
    }

    /// Tentatively shift the anchor; revert and report false on collision.
    pub fn shift(&mut self, dx: i8, dy: i8, board: &Board) -> bool {
        self.x += dx;
        self.y += dy;
        if self.collides(board) {
            self.x -= dx;
            self.y -= dy;
            return false;
        }
        true
    }

    /// One cell down.
    pub fn move_down(&mut self, board: &Board) -> bool {
        self.shift(0, 1, board)
    }

    /// One cell left.
    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift(-1, 0, board)
    }

    /// One cell right.
    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift(1, 0, board)
    }

    /// Repeat down-steps until blocked; returns the cells moved.
    pub fn drop_to_rest(&mut self, board: &Board) -> u32 {
        let mut moved = 0;
        while self.move_down(board) {
            moved += 1;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_anchor_is_mid_column_top_row() {
        let piece = Tetromino::new(PieceKind::T, 10);
        assert_eq!((piece.x, piece.y), (4, 0));
        assert_eq!(piece.rotation(), 0);
    }

    #[test]
    fn cells_add_anchor_to_offsets() {
        let piece = Tetromino::new(PieceKind::I, 10);
        assert_eq!(piece.cells(), [(3, 0), (4, 0), (5, 0), (6, 0)]);
    }

    #[test]
    fn clockwise_rotation_applies_the_matrix() {
        let board = Board::default();
        let mut piece = Tetromino::new(PieceKind::I, 10);
        piece.y = 2;
        assert!(piece.rotate(&board, true));
        // (x, y) -> (-y, x) around the origin.
        assert_eq!(piece.blocks(), [(0, -1), (0, 0), (0, 1), (0, 2)]);
        assert_eq!(piece.rotation(), 1);
    }

    #[test]
    fn counter_clockwise_rotation_inverts_the_matrix() {
        let board = Board::default();
        let mut piece = Tetromino::new(PieceKind::T, 10);
        piece.y = 2;
        let before = piece.blocks();
        assert!(piece.rotate(&board, true));
        assert!(piece.rotate(&board, false));
        assert_eq!(piece.blocks(), before);
    }

    #[test]
    fn four_clockwise_rotations_are_identity() {
        let board = Board::default();
        let mut piece = Tetromino::new(PieceKind::S, 10);
        piece.y = 3;
        let before = piece.blocks();
        for _ in 0..4 {
            assert!(piece.rotate(&board, true));
        }
        assert_eq!(piece.blocks(), before);
        assert_eq!(piece.rotation(), 0);
    }

    #[test]
    fn square_rotation_never_moves_blocks() {
        let board = Board::default();
        let mut piece = Tetromino::new(PieceKind::O, 10);
        let cells = piece.cells();
        assert!(piece.rotate(&board, true));
        assert_eq!(piece.cells(), cells);
        assert_eq!(piece.rotation(), 1);
    }

    #[test]
    fn blocked_rotation_rolls_back() {
        let mut board = Board::default();
        let mut piece = Tetromino::new(PieceKind::I, 10);
        piece.y = 2;
        // A vertical I at x=4 would need (4,1)..(4,4); block one of them.
        board.set(4, 3, Some(PieceKind::J));

        let before = piece;
        assert!(!piece.rotate(&board, true));
        assert_eq!(piece, before);
    }

    #[test]
    fn shift_reverts_on_collision() {
        let board = Board::default();
        let mut piece = Tetromino::new(PieceKind::I, 10);
        // Left wall: I spans x-1..=x+2, so x can go down to 1.
        assert!(piece.move_left(&board));
        assert!(piece.move_left(&board));
        assert!(piece.move_left(&board));
        assert!(!piece.move_left(&board));
        assert_eq!(piece.x, 1);
    }

    #[test]
    fn drop_to_rest_reports_cells_moved() {
        let board = Board::default();
        let mut piece = Tetromino::new(PieceKind::I, 10);
        // Horizontal I on row 0 falls to the bottom row.
        let moved = piece.drop_to_rest(&board);
        assert_eq!(moved, 19);
        assert_eq!(piece.y, 19);
        assert!(!piece.move_down(&board));
    }
}
