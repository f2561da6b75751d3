//! Session layer - shared state, timers and game orchestration
//!
//! The engine is pure; this crate is where time and concurrency come in.
//!
//! - [`StateHolder`]: one authoritative [`GameState`](quantum_blocks_core::GameState)
//!   behind a `tokio::sync::watch` channel. Commands are applied to the
//!   latest value under its write lock, so concurrent writers never lose an
//!   update and readers never see a half-applied command.
//! - [`Dispatcher`]: the single entry point for commands. After each command
//!   it spawns the next piece when a lock asked for one.
//! - [`timers`]: gravity (`Tick` after a score-dependent delay) and soft
//!   drop (`MoveDown` every 50 ms while held), both cancellable.
//! - [`GameSession`]: wires the above together for a front end.
//! - [`SessionConfig`]: board size, seed and pacing from JSON and `QB_*`
//!   environment variables.
//!
//! # Environment Variables
//!
//! - `QB_CONFIG`: path to a JSON config file
//! - `QB_BOARD_WIDTH`, `QB_BOARD_HEIGHT`: board size (default 10x20)
//! - `QB_SEED`: randomizer seed (default: from the clock)
//! - `QB_FALL_DELAY_MS`: level 1 fall delay (default 1000)
//! - `QB_SPEED_MULTIPLIER`: per-1000-points delay factor (default 0.9)
//! - `QB_SOFT_DROP_MS`: soft drop period (default 50)
//! - `QB_LOG_PATH`: log file for the terminal front end

pub mod config;
pub mod dispatcher;
pub mod holder;
pub mod session;
pub mod timers;

pub use quantum_blocks_core as core;
pub use quantum_blocks_engine as engine;
pub use quantum_blocks_types as types;

pub use config::SessionConfig;
pub use dispatcher::Dispatcher;
pub use holder::StateHolder;
pub use session::GameSession;
pub use timers::{CancelToken, FallTiming, TimerHandle};
