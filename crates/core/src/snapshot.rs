use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::types::{Position, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub blocks: [Position; 4],
}

/// Everything a renderer may look at, and nothing more
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Occupancy, `board[row][col]`, row 0 at the top
    pub board: Vec<Vec<bool>>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<Shape>,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub soft_drop_active: bool,
}

impl GameSnapshot {
    pub fn is_active_cell(&self, pos: Position) -> bool {
        self.active
            .map(|a| a.blocks.contains(&pos))
            .unwrap_or(false)
    }

    pub fn is_locked_cell(&self, pos: Position) -> bool {
        if pos.row < 0 || pos.col < 0 {
            return false;
        }
        self.board
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .unwrap_or(false)
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            width: state.board.width(),
            height: state.board.height(),
            board: state.board.rows().map(|row| row.to_vec()).collect(),
            active: state.current_piece.map(|p| ActiveSnapshot {
                shape: p.shape(),
                blocks: *p.blocks(),
            }),
            next: state.next_piece.map(|p| p.shape()),
            score: state.score,
            level: state.level(),
            game_over: state.game_over,
            // The flag outlives the game when soft drop is still held.
            soft_drop_active: state.soft_drop_active && !state.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Piece;

    #[test]
    fn snapshot_mirrors_state() {
        let mut state = GameState::new(3);
        let piece = Piece::spawn(Shape::T, 10);
        state.current_piece = Some(piece);
        state.next_piece = Some(Piece::spawn(Shape::L, 10));
        state.score = 2100;
        state.board = state.board.place(&Piece::new(Shape::O).move_by(Position::new(18, 0)));

        let snap = state.snapshot();
        assert_eq!(snap.width, 10);
        assert_eq!(snap.height, 20);
        assert_eq!(snap.board.len(), 20);
        assert_eq!(snap.level, 3);
        assert_eq!(snap.next, Some(Shape::L));
        assert!(snap.is_active_cell(Position::new(0, 5)));
        assert!(snap.is_locked_cell(Position::new(19, 1)));
        assert!(!snap.is_locked_cell(Position::new(0, 5)));
        assert!(!snap.is_locked_cell(Position::new(-1, 0)));
    }

    #[test]
    fn soft_drop_is_not_shown_after_game_over() {
        let mut state = GameState::new(3);
        state.soft_drop_active = true;
        assert!(state.snapshot().soft_drop_active);

        state.game_over = true;
        assert!(!state.snapshot().soft_drop_active);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let state = GameState::new(3);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("\"level\":1"));
        assert!(json.contains("\"active\":null"));

        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state.snapshot());
    }
}
