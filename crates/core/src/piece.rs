//! Piece module - the falling piece and its Active/Frozen state machine
//!
//! A piece is a shape, a rotation state and an anchor cell. Its four blocks are
//! always derived from the rotation table, so moving touches only the anchor.
//!
//! Movement rules:
//! - sideways moves are rejected (no-op) when any block would leave the board
//!   or hit a locked block
//! - a blocked downward move freezes the piece in place; it never overlaps
//!   the obstruction
//! - rotation is unchecked: it may push blocks into a wall or the stack
//! - a frozen piece ignores every operation

use crate::board::Board;
use crate::rotation::offsets;
use crate::types::{Cell, Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_ANCHOR};

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    rotation: Rotation,
    anchor: Cell,
    frozen: bool,
}

impl Piece {
    /// Create an active piece in an explicit state
    pub fn new(shape: Shape, rotation: Rotation, anchor: Cell) -> Self {
        Self {
            shape,
            rotation,
            anchor,
            frozen: false,
        }
    }

    /// Create a new piece at the spawn anchor in rotation state 1
    pub fn spawn(shape: Shape) -> Self {
        Self::new(shape, Rotation::One, SPAWN_ANCHOR)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Absolute cells of the four blocks
    pub fn cells(&self) -> [Cell; 4] {
        Self::cells_at(self.shape, self.rotation, self.anchor)
    }

    fn cells_at(shape: Shape, rotation: Rotation, anchor: Cell) -> [Cell; 4] {
        offsets(shape, rotation).map(|offset| anchor.offset(offset))
    }

    /// Whether any block sits on a locked cell
    pub fn overlaps(&self, board: &Board) -> bool {
        self.cells().iter().any(|&cell| board.is_occupied(cell))
    }

    /// Shift one column left. Returns false if blocked or frozen.
    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift_sideways(-1, board)
    }

    /// Shift one column right. Returns false if blocked or frozen.
    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift_sideways(1, board)
    }

    fn shift_sideways(&mut self, dc: i8, board: &Board) -> bool {
        if self.frozen {
            return false;
        }

        let anchor = self.anchor.offset((dc, 0));
        let blocked = Self::cells_at(self.shape, self.rotation, anchor)
            .iter()
            .any(|&cell| cell.col < 0 || cell.col >= BOARD_WIDTH as i8 || board.is_occupied(cell));
        if blocked {
            return false;
        }

        self.anchor = anchor;
        true
    }

    /// Drop one row.
    ///
    /// If any block would pass the floor or land on a locked block, the piece
    /// freezes where it is and `false` is returned.
    pub fn move_down(&mut self, board: &Board) -> bool {
        if self.frozen {
            return false;
        }

        let anchor = self.anchor.offset((0, 1));
        let blocked = Self::cells_at(self.shape, self.rotation, anchor)
            .iter()
            .any(|&cell| cell.row >= BOARD_HEIGHT as i8 || board.is_occupied(cell));
        if blocked {
            self.frozen = true;
            return false;
        }

        self.anchor = anchor;
        true
    }

    /// Advance to the next rotation state (4 wraps to 1).
    ///
    /// No collision check is made. Returns false only when frozen.
    pub fn rotate(&mut self) -> bool {
        if self.frozen {
            return false;
        }
        self.rotation = self.rotation.next();
        true
    }
}
