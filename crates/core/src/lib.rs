//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the data side of the rules: board, pieces, randomizer,
//! scoring arithmetic and the aggregate game state. It has no dependencies on
//! UI, timers or I/O, so:
//!
//! - **Deterministic**: same seed, same piece sequence
//! - **Testable**: every rule is a function of plain values
//! - **Portable**: runs headless, in the terminal, or in benchmarks
//!
//! # Module Structure
//!
//! - [`board`]: occupancy grid with collision checks and line clearing
//! - [`pieces`]: the seven tetromino shapes, movement and rotation
//! - [`rng`]: seeded LCG and the 7-bag randomizer
//! - [`scoring`]: line-clear points, derived level and fall delay
//! - [`game_state`]: the immutable aggregate snapshot
//! - [`snapshot`]: serializable renderer view of a game state
//!
//! The state transitions themselves live in the engine crate.
//!
//! # Example
//!
//! ```
//! use quantum_blocks_core::{Board, Piece};
//! use quantum_blocks_core::types::{Position, Shape};
//!
//! let board = Board::default();
//! let piece = Piece::spawn(Shape::T, board.width());
//! assert!(board.can_place(&piece));
//!
//! let board = board.place(&piece);
//! assert!(board.is_occupied(Position::new(0, 5)));
//! assert!(!board.can_place(&piece));
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use quantum_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Phase};
pub use pieces::Piece;
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{fall_delay_ms, level_for_score, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
