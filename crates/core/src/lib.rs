//! Core game logic - pure, deterministic and testable
//!
//! This crate holds the rules of the falling-block game. It never draws and
//! never reads the keyboard: callers feed it elapsed time and [`GameAction`]s and
//! read back a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`rotation`]: block offsets for every shape and rotation state
//! - [`board`]: 10x20 grid of locked blocks, row clearing
//! - [`piece`]: the falling piece, its movement and its Active/Frozen state
//! - [`shuffler`]: 7-bag shape randomizer
//! - [`game_loop`]: gravity timing, input dispatch, lock/merge/spawn
//! - [`snapshot`]: plain-data copy of the settled state for renderers
//!
//! # Game Rules
//!
//! - **Gravity**: one forced drop every 1500ms
//! - **Locking**: a piece that cannot drop freezes in place immediately
//! - **Rotation**: cycles through 4 states with no collision check and no kicks
//! - **Row clears**: every full row is removed; rows above fall by the number
//!   of rows cleared beneath them
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameLoop;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameLoop::new(12345);
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // Drop until the first piece locks.
//! let mut event = None;
//! while event.is_none() {
//!     event = game.apply_action(GameAction::MoveDown);
//! }
//! assert_eq!(game.board().occupied_count(), 4);
//! assert_eq!(game.pieces_spawned(), 2);
//! ```
//!
//! [`GameAction`]: types::GameAction

pub mod board;
pub mod game_loop;
pub mod piece;
pub mod rotation;
pub mod shuffler;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, Grid};
pub use game_loop::{GameLoop, INPUT_QUEUE_CAPACITY};
pub use piece::Piece;
pub use rotation::{offsets, PieceShape};
pub use shuffler::Shuffler;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
