//! Board module - the settled-cell grid.
//!
//! The board owns all settled cells and is the single authority on
//! collision and line-clear rules. Cells are stored in a flat row-major
//! vector for cache locality. Coordinates: `(x, y)` with x in `0..width`
//! (left to right) and y in `0..height` (top to bottom). Negative y is
//! "above the board" and is legal for an active piece but never stored.

use arrayvec::ArrayVec;

use blockfall_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Error raised for invalid board construction inputs.
///
/// Geometry failures during play are ordinary `bool` outcomes; this error
/// only exists for programming/config mistakes caught at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Width or height was zero.
    EmptyBoard { width: u8, height: u8 },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::EmptyBoard { width, height } => {
                write!(f, "board dimensions must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// The game board: a `width` x `height` grid of settled cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat cell storage, row-major order (`y * width + x`).
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    ///
    /// Fails fast on a zero dimension; that is a caller bug, not a game
    /// event.
    pub fn new(width: u8, height: u8) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyBoard { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Flat index for `(x, y)`, or `None` when outside the stored grid.
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at `(x, y)`, or `None` when the coordinate is off the grid.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell; returns false when the coordinate is off the grid.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True when `(x, y)` is inside the side and bottom walls.
    ///
    /// Negative `y` (above the visible board) is in bounds: pieces spawn
    /// there. Only the x walls and the floor are enforced.
    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && x < self.width as i8 && y < self.height as i8
    }

    /// True when `(x, y)` holds a settled cell.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Authoritative collision rule for a set of absolute piece cells.
    ///
    /// A cell collides when it leaves the side/bottom bounds, or when it
    /// is on the visible board (`y >= 0`) and already occupied. Cells
    /// above the board never collide on occupancy, only on the x walls.
    pub fn collides(&self, cells: &[(i8, i8); 4]) -> bool {
        cells.iter().any(|&(x, y)| {
            if !self.in_bounds(x, y) {
                return true;
            }
            if y < 0 {
                return false;
            }
            self.is_occupied(x, y)
        })
    }

    /// True when a full row sits at `y`.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let start = y * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Write a settled piece's cells into the grid, then clear lines.
    ///
    /// Only cells with `y >= 0` are written; a piece may legally settle
    /// partially (or entirely) above the board, contributing only its
    /// visible cells. Returns the cleared row indices, bottom to top.
    pub fn settle(&mut self, kind: PieceKind, cells: &[(i8, i8); 4]) -> ArrayVec<u8, 4> {
        for &(x, y) in cells {
            if y >= 0 {
                self.set(x, y, Some(kind));
            }
        }
        self.clear_lines()
    }

    /// Remove every complete row, shifting the rows above it down and
    /// refilling the top with empty rows.
    ///
    /// Scans bottom to top with a write pointer, so several rows clear in
    /// one pass and a removed row's index is effectively re-tested.
    /// Returns the cleared row indices, bottom to top (at most 4: a
    /// tetromino spans at most four rows).
    pub fn clear_lines(&mut self) -> ArrayVec<u8, 4> {
        let mut cleared = ArrayVec::new();
        let width = self.width as usize;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y as u8);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Game-over predicate: any settled cell in the top row.
    pub fn top_row_occupied(&self) -> bool {
        self.cells[..self.width as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Reinitialize every cell to empty. Dimensions never change.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Flat view of the grid, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT).expect("default dimensions are positive")
    }
}
