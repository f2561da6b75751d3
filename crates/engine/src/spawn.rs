//! Spawning from the randomizer with a single look-ahead slot.

use crate::command::Command;
use crate::core::GameState;
use crate::engine::process_command;

/// Spawn the next piece from the state's own randomizer
///
/// The look-ahead piece becomes the falling piece (one is drawn first when the
/// slot is empty, as right after a reset) and a fresh look-ahead is drawn. The
/// spawn itself goes through [`Command::SpawnPiece`], so a blocked spawn ends
/// the game exactly as an explicit command would.
pub fn spawn_next(state: &GameState) -> GameState {
    let width = state.board_width();
    let mut randomizer = state.randomizer.clone();

    let piece = match state.next_piece {
        Some(piece) => piece,
        None => randomizer.draw(width),
    };
    let next = randomizer.draw(width);

    let staged = GameState {
        next_piece: Some(next),
        randomizer,
        ..state.clone()
    };
    process_command(Command::SpawnPiece(piece), &staged)
}
