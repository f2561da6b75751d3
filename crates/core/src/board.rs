//! Board module - manages the occupancy grid
//!
//! The board is a `height x width` grid of booleans (`true` = occupied), stored
//! as a flat row-major vector. Coordinates are `(row, col)`: row 0 is the top,
//! row `height - 1` the bottom. Dimensions never change for the lifetime of a
//! game; every operation returns a new board.

use crate::pieces::Piece;
use crate::types::{Position, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Create a board from row slices (`rows[0]` is the top row)
    ///
    /// Rows shorter than the board width are padded with empty cells and extra
    /// cells are dropped, so the dimensions always match `width x rows.len()`.
    /// Rows past the 255th are ignored.
    pub fn with_cells(width: u8, rows: &[Vec<bool>]) -> Self {
        let height = u8::try_from(rows.len()).unwrap_or(u8::MAX);
        let mut board = Self::new(width, height);
        for (r, row) in rows.iter().take(height as usize).enumerate() {
            for (c, &occupied) in row.iter().take(width as usize).enumerate() {
                board.cells[r * width as usize + c] = occupied;
            }
        }
        board
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0
            || pos.col < 0
            || pos.row as i16 >= self.height as i16
            || pos.col as i16 >= self.width as i16
        {
            return None;
        }
        Some(pos.row as usize * self.width as usize + pos.col as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// In bounds and filled
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.index(pos).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// In bounds and empty
    pub fn is_valid_cell(&self, pos: Position) -> bool {
        self.index(pos).map(|i| !self.cells[i]).unwrap_or(false)
    }

    /// Whether every block of `piece` sits on a valid cell
    ///
    /// This is the only legality check for moves, rotations and spawns.
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.blocks().iter().all(|&b| self.is_valid_cell(b))
    }

    /// Mark every block of `piece` occupied
    ///
    /// Out-of-bounds blocks are skipped.
    pub fn place(&self, piece: &Piece) -> Board {
        let mut next = self.clone();
        for &b in piece.blocks() {
            if let Some(i) = next.index(b) {
                next.cells[i] = true;
            }
        }
        next
    }

    /// Cells of one row (`None` past the bottom)
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.height as usize {
            return None;
        }
        let start = row * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&c| c))
            .unwrap_or(false)
    }

    /// Remove every full row at once and drop the rows above into place
    ///
    /// Returns the new board and the number of rows removed. Surviving rows keep
    /// their relative order; the same number of empty rows appear at the top.
    pub fn clear_full_lines(&self) -> (Board, usize) {
        let width = self.width as usize;
        let mut next = self.clone();
        let mut write_row = self.height as usize;
        let mut cleared = 0;

        // Scan bottom to top, compacting surviving rows downward.
        for read_row in (0..self.height as usize).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                next.cells.copy_within(src..src + width, write_row * width);
            }
        }

        next.cells[..write_row * width].fill(false);
        (next, cleared)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
