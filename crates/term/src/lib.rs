//! Terminal renderer for the game.
//!
//! A small, game-oriented rendering layer: [`GameView`] maps a
//! [`GameSnapshot`](quantum_blocks_core::GameSnapshot) into a [`FrameBuffer`]
//! without any I/O, and [`TerminalRenderer`] flushes framebuffers to the
//! terminal through crossterm. Board cells are drawn 2 characters wide to
//! offset the usual terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use quantum_blocks_core as core;
pub use quantum_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
