//! Board module - the locked blocks of the playfield
//!
//! The board is a 10x20 grid stored as a flat, row-major array of slots.
//! A slot is either empty or holds the shape that locked into it.
//! Coordinates: `col` 0..9 (left to right), `row` 0..19 (top to bottom).

use log::warn;

use crate::types::{Cell, Shape, Slot, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row-major copy of the board, as exported to renderers
pub type Grid = [[Slot; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    slots: [Slot; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            slots: [None; BOARD_SIZE],
        }
    }

    /// Build a board from text rows, aligned to the bottom of the board.
    ///
    /// `.` is an empty cell and a shape letter (`IOTSZJL`) is a locked cell.
    /// Every row must be exactly 10 characters wide. Returns `None` for a bad
    /// row width, an unknown character, or more than 20 rows.
    ///
    /// ```
    /// use blockfall_core::Board;
    /// use blockfall_core::types::Cell;
    ///
    /// let board = Board::from_rows(&["T.........", "IIIIIIIII."]).unwrap();
    /// assert!(board.is_occupied(Cell::new(0, 18)));
    /// assert!(!board.is_occupied(Cell::new(9, 19)));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() > HEIGHT {
            return None;
        }

        let mut board = Self::new();
        let top = HEIGHT - rows.len();
        for (i, line) in rows.iter().enumerate() {
            if line.chars().count() != WIDTH {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                board.slots[(top + i) * WIDTH + col] = match ch {
                    '.' => None,
                    other => Some(Shape::from_char(other)?),
                };
            }
        }
        Some(board)
    }

    #[inline(always)]
    fn index(cell: Cell) -> Option<usize> {
        if !cell.in_bounds() {
            return None;
        }
        Some(cell.row as usize * WIDTH + cell.col as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Slot at a cell; `None` when out of bounds
    pub fn get(&self, cell: Cell) -> Option<Slot> {
        Self::index(cell).map(|idx| self.slots[idx])
    }

    /// Whether the cell lies on the board
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.in_bounds()
    }

    /// Whether the cell is on the board and locked. Out of bounds is never occupied.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        self.row_slots(row).iter().all(|slot| slot.is_some())
    }

    fn row_slots(&self, row: usize) -> &[Slot] {
        let start = row * WIDTH;
        &self.slots[start..start + WIDTH]
    }

    /// Lock a frozen piece's cells into the board.
    ///
    /// Callers pass four distinct, in-bounds, empty cells. Because rotation is
    /// unchecked a piece can freeze partly inside a wall or the stack; such
    /// cells are skipped (out of bounds) or left untouched (already occupied)
    /// so the board never holds an out-of-bounds or doubly-placed block.
    pub fn merge(&mut self, cells: &[Cell; 4], shape: Shape) {
        for &cell in cells {
            match Self::index(cell) {
                None => {
                    warn!(
                        "dropping out-of-bounds {} block at ({}, {})",
                        shape.as_str(),
                        cell.col,
                        cell.row
                    );
                }
                Some(idx) if self.slots[idx].is_some() => {
                    warn!(
                        "{} block merged onto occupied cell ({}, {})",
                        shape.as_str(),
                        cell.col,
                        cell.row
                    );
                }
                Some(idx) => self.slots[idx] = Some(shape),
            }
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are compacted bottom-up: each surviving row is copied down past
    /// the full rows beneath it, so every block ends up shifted by the number
    /// of cleared rows below it. One pass settles the board completely.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_row = HEIGHT;

        for read_row in (0..HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * WIDTH;
                self.slots.copy_within(src..src + WIDTH, write_row * WIDTH);
            }
        }

        self.slots[..write_row * WIDTH].fill(None);
        cleared
    }

    /// All locked cells with the shape that locked them, top row first
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, Shape)> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.map(|shape| {
                let cell = Cell::new((idx % WIDTH) as i8, (idx / WIDTH) as i8);
                (cell, shape)
            })
        })
    }

    /// Number of locked cells
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Copy the board into a row-major grid without allocating
    pub fn write_grid(&self, out: &mut Grid) {
        for (row, line) in out.iter_mut().enumerate() {
            line.copy_from_slice(self.row_slots(row));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
