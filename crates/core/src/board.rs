//! Board module - manages the game grid
//!
//! The board is a 10x22 grid where each cell is empty or holds a display attribute.
//! The top `HIDDEN_ROWS` rows are the spawn buffer: they are never drawn but take
//! part in every collision check.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..21 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Attr, Cell, LossCause, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices reported by a completeness scan, top to bottom
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff any mino of `shape` anchored at (x, y) is off the board or on an
    /// occupied cell. This is the only legality test for a placement.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .iter()
            .any(|&(dx, dy)| !matches!(self.get(x + dx, y + dy), Some(None)))
    }

    /// Landing test used by gravity, evaluated at the tentative (already lowered) anchor.
    ///
    /// A mino has landed when it reaches past the floor, or when it sits on an
    /// occupied cell whose upper neighbour is empty. Rows above the board count as
    /// empty.
    pub fn has_landed(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.iter().any(|&(dx, dy)| {
            let (px, py) = (x + dx, y + dy);
            py >= BOARD_HEIGHT as i8 || (self.is_occupied(px, py) && !self.is_occupied(px, py - 1))
        })
    }

    /// Loss test for a freshly spawned piece
    ///
    /// Minos above row 0 are reported before overlaps.
    pub fn loss_cause(&self, shape: &Shape, x: i8, y: i8) -> Option<LossCause> {
        if shape.iter().any(|&(_, dy)| y + dy < 0) {
            return Some(LossCause::AboveBoard);
        }
        if shape
            .iter()
            .any(|&(dx, dy)| self.is_occupied(x + dx, y + dy))
        {
            return Some(LossCause::SpawnBlocked);
        }
        None
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// All complete rows, scanned top to bottom in a single pass
    pub fn cleared_rows(&self) -> ClearedRows {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_complete(y))
            .collect()
    }

    /// Remove row `y`, shift every row above it down by one and insert an empty
    /// row at the top
    pub fn shift_down(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(None);
    }

    /// Write the attribute into every cell covered by `shape` at (x, y).
    ///
    /// Assumes the placement was already resolved as legal; minos that fall
    /// outside the board are skipped.
    pub fn place(&mut self, shape: &Shape, x: i8, y: i8, attr: Attr) {
        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(attr));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = BOARD_WIDTH as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Copy the board into a 2D grid (for render snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Fill a whole row with one attribute
    pub fn fill_row(&mut self, y: usize, attr: Attr) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }
        let width = BOARD_WIDTH as usize;
        self.cells[y * width..(y + 1) * width].fill(Some(attr));
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
