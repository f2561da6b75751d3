//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and turns a
//! held down key into a soft-drop start/stop pair, including on terminals
//! without key-release events.

pub mod handler;
pub mod map;

pub use quantum_blocks_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
