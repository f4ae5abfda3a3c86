use crate::board::Grid;
use crate::piece::Piece;
use crate::types::{Cell, Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub rotation: Rotation,
    pub anchor: Cell,
    pub cells: [Cell; 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape(),
            rotation: value.rotation(),
            anchor: value.anchor(),
            cells: value.cells(),
        }
    }
}

/// Settled game state handed to renderers once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: ActiveSnapshot,
    pub topped_out: bool,
    pub pieces_spawned: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    pub fn is_occupied(&self, cell: Cell) -> bool {
        cell.in_bounds() && self.board[cell.row as usize][cell.col as usize].is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: Piece::spawn(Shape::I).into(),
            topped_out: false,
            pieces_spawned: 0,
            lines_cleared: 0,
        }
    }
}
