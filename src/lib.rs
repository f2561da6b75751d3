//! Quantum Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under one name, so binaries, integration
//! tests and benches can write `quantum_blocks::{core,engine,...}`.

pub use quantum_blocks_core as core;
pub use quantum_blocks_engine as engine;
pub use quantum_blocks_input as input;
pub use quantum_blocks_session as session;
pub use quantum_blocks_term as term;
pub use quantum_blocks_types as types;
