//! Terminal input module.
//!
//! Maps `crossterm` key events to the four [`crate::types::GameAction`]s. Keys
//! with no mapping are ignored rather than reported.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, Command};
