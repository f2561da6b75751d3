//! Rules engine - the pure command processor
//!
//! Every state transition of a game goes through [`process_command`]: it
//! takes a [`Command`] and the current [`GameState`](quantum_blocks_core::GameState)
//! and returns the next state. There is no shared mutable data here, so the
//! engine can be called from any thread; serializing concurrent callers is the
//! session's job.
//!
//! Phases are implicit in the state flags:
//!
//! | Phase | Entered by |
//! |-------|------------|
//! | Empty | `ResetGame` |
//! | Falling | successful `SpawnPiece`, accepted moves |
//! | AwaitingSpawn | `MoveDown`/`Tick` that cannot move (lock) |
//! | GameOver | `SpawnPiece` with no room |
//!
//! The engine never spawns on its own after a lock; it only raises
//! `needs_new_piece`. [`spawn_next`] is the step the session runs in response.
//!
//! # Example
//!
//! ```
//! use quantum_blocks_engine::{process_command, spawn_next, Command};
//! use quantum_blocks_core::GameState;
//!
//! let state = process_command(Command::ResetGame, &GameState::new(7));
//! let state = spawn_next(&state);
//! assert!(state.current_piece.is_some());
//!
//! let state = process_command(Command::MoveLeft, &state);
//! assert!(!state.game_over);
//! ```

pub mod command;
pub mod engine;
pub mod spawn;

pub use quantum_blocks_core as core;
pub use quantum_blocks_types as types;

pub use command::Command;
pub use engine::process_command;
pub use spawn::spawn_next;
