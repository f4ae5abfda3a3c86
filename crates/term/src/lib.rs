//! Terminal "game renderer" module.
//!
//! A small game-oriented rendering layer: the view turns a settled core
//! snapshot into a framebuffer, and the renderer flushes framebuffers to the
//! terminal. The core never draws; everything visual lives here.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{shape_color, GameView, Viewport, MAX_CELL_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
