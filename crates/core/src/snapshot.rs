//! Read-only snapshots of engine state for rendering collaborators.
//!
//! A snapshot is an owned copy of everything a renderer reads: the grid,
//! the active piece and its ghost projection, the next-piece preview, and
//! the counters/flags. Renderers never touch live engine state.

use blockfall_types::{Cell, PieceKind};

use crate::piece::Tetromino;

/// The active piece as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    /// Absolute board coordinates of the four blocks.
    pub cells: [(i8, i8); 4],
}

impl From<&Tetromino> for ActiveSnapshot {
    fn from(piece: &Tetromino) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation(),
            x: piece.x,
            y: piece.y,
            cells: piece.cells(),
        }
    }
}

/// The queued next piece: kind plus shape-local offsets for previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub blocks: [(i8, i8); 4],
}

impl From<&Tetromino> for NextSnapshot {
    fn from(piece: &Tetromino) -> Self {
        Self {
            kind: piece.kind,
            blocks: piece.blocks(),
        }
    }
}

/// Complete observable game state at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Settled cells, row-major (`y * width + x`).
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Where the active piece would land if hard-dropped right now.
    pub ghost: Option<[(i8, i8); 4]>,
    pub next: Option<NextSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub gravity_ms: u32,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub piece_id: u32,
}
