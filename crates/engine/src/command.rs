//! The finite command set driving every state transition.

use crate::core::Piece;
use crate::types::GameAction;

/// A request to change the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Time-based fall step from the fall timer
    Tick,
    MoveLeft,
    MoveRight,
    MoveDown,
    /// Rotate 90° clockwise
    Rotate,
    /// Put a piece on the board as the falling piece
    SpawnPiece(Piece),
    /// Start a game; the session orchestrates reset + first spawn
    StartGame,
    /// Replace the whole state with a fresh one
    ResetGame,
    SoftDropStart,
    SoftDropStop,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Tick => "tick",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::SpawnPiece(_) => "spawnPiece",
            Command::StartGame => "startGame",
            Command::ResetGame => "resetGame",
            Command::SoftDropStart => "softDropStart",
            Command::SoftDropStop => "softDropStop",
        }
    }

    /// Whether the command still applies once the game is over
    pub fn allowed_after_game_over(&self) -> bool {
        matches!(self, Command::SpawnPiece(_) | Command::ResetGame)
    }
}

impl From<GameAction> for Command {
    fn from(action: GameAction) -> Self {
        match action {
            GameAction::MoveLeft => Command::MoveLeft,
            GameAction::MoveRight => Command::MoveRight,
            GameAction::MoveDown => Command::MoveDown,
            GameAction::Rotate => Command::Rotate,
            GameAction::SoftDropStart => Command::SoftDropStart,
            GameAction::SoftDropStop => Command::SoftDropStop,
            GameAction::StartGame => Command::StartGame,
            GameAction::ResetGame => Command::ResetGame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shape;

    #[test]
    fn actions_map_one_to_one() {
        assert_eq!(Command::from(GameAction::MoveLeft), Command::MoveLeft);
        assert_eq!(Command::from(GameAction::Rotate), Command::Rotate);
        assert_eq!(Command::from(GameAction::SoftDropStop), Command::SoftDropStop);
        assert_eq!(Command::from(GameAction::ResetGame), Command::ResetGame);
    }

    #[test]
    fn only_spawn_and_reset_survive_game_over() {
        assert!(Command::ResetGame.allowed_after_game_over());
        assert!(Command::SpawnPiece(Piece::spawn(Shape::I, 10)).allowed_after_game_over());
        assert!(!Command::Tick.allowed_after_game_over());
        assert!(!Command::SoftDropStop.allowed_after_game_over());
        assert!(!Command::StartGame.allowed_after_game_over());
    }
}
