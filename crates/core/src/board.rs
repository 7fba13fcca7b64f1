//! Board module - manages the game grid
//!
//! The board is a 10x10 grid where each cell is either empty or filled.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..9 (top to bottom).
//!
//! Placement checks deliberately accept cells above the top edge (negative y):
//! only the left, right and bottom edges bound a piece.

use arrayvec::ArrayVec;

use crate::pieces::CellOffset;
use crate::types::{Cell, BOARD_SIZE};

/// Board side length as an index type
pub const SIZE: usize = BOARD_SIZE as usize;

/// Total number of cells on the board
const CELL_COUNT: usize = SIZE * SIZE;

/// Row-major copy of the whole board
pub type Grid = [[Cell; SIZE]; SIZE];

/// Row indices removed by a single collapse pass, in detection order
pub type ClearedRows = ArrayVec<usize, SIZE>;

/// The game board - 10 columns x 10 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from a row-major grid
    pub fn from_grid(grid: Grid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            board.cells[y * SIZE..(y + 1) * SIZE].copy_from_slice(row);
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_SIZE as i8 || y < 0 || y >= BOARD_SIZE as i8 {
            return None;
        }
        Some((y as usize) * SIZE + (x as usize))
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
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

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled))
    }

    /// Check whether a shape with the given occupied offsets fits at origin (x, y).
    ///
    /// Rejects any occupied cell left of column 0, right of the last column,
    /// below the last row, or on a filled cell. Cells above row 0 pass.
    pub fn can_place(&self, shape: &[CellOffset], x: i8, y: i8) -> bool {
        shape.iter().all(|&offset| {
            let (bx, by) = offset_cell(x, y, offset);
            if bx < 0 || bx >= BOARD_SIZE as i16 || by >= BOARD_SIZE as i16 {
                return false;
            }
            by < 0 || !self.cells[by as usize * SIZE + bx as usize].is_filled()
        })
    }

    /// Check whether the shape fits at any on-board origin
    pub fn fits_anywhere(&self, shape: &[CellOffset]) -> bool {
        (0..BOARD_SIZE as i8).any(|y| (0..BOARD_SIZE as i8).any(|x| self.can_place(shape, x, y)))
    }

    /// Lock a shape onto the board at origin (x, y).
    ///
    /// Returns false without touching the board if the placement is illegal.
    /// Cells above row 0 are dropped.
    pub fn lock_cells(&mut self, shape: &[CellOffset], x: i8, y: i8) -> bool {
        if !self.can_place(shape, x, y) {
            return false;
        }

        for &offset in shape {
            let (bx, by) = offset_cell(x, y, offset);
            if by >= 0 {
                self.cells[by as usize * SIZE + bx as usize] = Cell::Filled;
            }
        }

        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= SIZE {
            return false;
        }
        self.row(y).iter().all(Cell::is_filled)
    }

    /// Cells of row `y` (left to right)
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * SIZE..(y + 1) * SIZE]
    }

    /// Clear a row and shift all rows above down by one.
    /// Returns the number of rows cleared (1 or 0).
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= SIZE {
            return 0;
        }

        for row in (1..=y).rev() {
            let src_start = (row - 1) * SIZE;
            self.cells.copy_within(src_start..src_start + SIZE, row * SIZE);
        }

        self.cells[..SIZE].fill(Cell::Empty);

        1
    }

    /// Remove full rows in one top-to-bottom pass.
    ///
    /// Each full row is cleared as soon as it is found and the scan carries on
    /// at the next index; a row is never re-examined after rows above it shift
    /// down into it.
    pub fn collapse_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in 0..SIZE {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y);
            }
        }
        cleared
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a row-major grid
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[Cell::Empty; SIZE]; SIZE];
        self.write_grid(&mut grid);
        grid
    }

    /// Copy the board into an existing grid without allocating
    pub fn write_grid(&self, out: &mut Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Create from ASCII rows for testing ('#' filled, anything else empty)
    #[cfg(test)]
    pub(crate) fn from_ascii(rows: [&str; SIZE]) -> Self {
        let mut board = Self::new();
        for (y, line) in rows.iter().enumerate() {
            for (x, ch) in line.chars().take(SIZE).enumerate() {
                if ch == '#' {
                    board.set(x as i8, y as i8, Cell::Filled);
                }
            }
        }
        board
    }
}

/// Board coordinates of a shape cell, widened so edge origins cannot overflow
#[inline(always)]
fn offset_cell(x: i8, y: i8, (dx, dy): CellOffset) -> (i16, i16) {
    (x as i16 + dx as i16, y as i16 + dy as i16)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
