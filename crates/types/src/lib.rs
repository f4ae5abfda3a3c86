//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the input mapper and
//! the terminal renderer. Everything here is plain data with no dependencies.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: column 4, row 0
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 1500 | Time between forced one-row drops |
//! | `FRAME_MS` | 16 | Default frame/poll interval of the runner |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Shape::from_str("t"), Some(Shape::T));
//! assert_eq!(Rotation::Four.next(), Rotation::One);
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval: one forced drop every 1500ms
pub const GRAVITY_INTERVAL_MS: u32 = 1500;

/// Default frame interval of the terminal runner (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Anchor cell every new piece spawns at
pub const SPAWN_ANCHOR: Cell = Cell::new(4, 0);

/// The seven piece shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    /// All seven shapes, in a fixed order (the contents of a fresh bag)
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Parse a shape from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("L"), Some(Shape::L));
    /// assert_eq!(Shape::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parse a shape from a single letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(Shape::I),
            'O' => Some(Shape::O),
            'T' => Some(Shape::T),
            'S' => Some(Shape::S),
            'Z' => Some(Shape::Z),
            'J' => Some(Shape::J),
            'L' => Some(Shape::L),
            _ => None,
        }
    }

    /// Uppercase letter for this shape
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::O => "O",
            Shape::T => "T",
            Shape::S => "S",
            Shape::Z => "Z",
            Shape::J => "J",
            Shape::L => "L",
        }
    }
}

/// Rotation state of a piece, cycling 1 → 2 → 3 → 4 → 1
///
/// Every piece spawns in state [`Rotation::One`]. What each state looks like is
/// defined per shape by the rotation table in the core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl Rotation {
    /// Next state in the cycle (4 wraps to 1)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::One.next(), Rotation::Two);
    /// assert_eq!(Rotation::Four.next(), Rotation::One);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Rotation::One => Rotation::Two,
            Rotation::Two => Rotation::Three,
            Rotation::Three => Rotation::Four,
            Rotation::Four => Rotation::One,
        }
    }

    /// Numeric state in `1..=4`
    pub fn number(&self) -> u8 {
        match self {
            Rotation::One => 1,
            Rotation::Two => 2,
            Rotation::Three => 3,
            Rotation::Four => 4,
        }
    }

    /// Build from a numeric state; `None` outside `1..=4`
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Rotation::One),
            2 => Some(Rotation::Two),
            3 => Some(Rotation::Three),
            4 => Some(Rotation::Four),
            _ => None,
        }
    }
}

/// Offset of a single block relative to a piece anchor: (Δcol, Δrow)
pub type Offset = (i8, i8);

/// A grid coordinate. Row 0 is the top of the board.
///
/// Coordinates are signed so that candidate positions one step outside the
/// board (column -1, row 20) can be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: i8,
    pub row: i8,
}

impl Cell {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// This cell shifted by an offset
    #[inline]
    pub const fn offset(self, (dc, dr): Offset) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// Whether the cell lies on the 10x20 board
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.col >= 0
            && self.col < BOARD_WIDTH as i8
            && self.row >= 0
            && self.row < BOARD_HEIGHT as i8
    }
}

/// Contents of one board position
///
/// - `None`: empty
/// - `Some(Shape)`: locked, remembering which shape locked it (for colouring)
pub type Slot = Option<Shape>;

/// The four player actions the engine accepts
///
/// Any other key is ignored by the input layer; there is no error for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Drop the piece one row, locking it if blocked
    MoveDown,
    /// Advance to the next rotation state
    Rotate,
}

impl GameAction {
    pub const ALL: [GameAction; 4] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
    ];

    /// Parse an action name (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveDown"), Some(GameAction::MoveDown));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    /// camelCase name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Emitted by the game loop each time a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Shape of the piece that locked
    pub shape: Shape,
    /// Cells it occupied when it froze
    pub cells: [Cell; 4],
    /// Full rows removed by this lock
    pub rows_cleared: u32,
    /// Shape of the piece spawned in its place
    pub next: Shape,
}
