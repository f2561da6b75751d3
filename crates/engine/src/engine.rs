//! The state machine: `(Command, &GameState) -> GameState`.
//!
//! Illegal moves and rotations are ordinary rule outcomes: the input state
//! comes back unchanged. A failed spawn is also a rule outcome, it moves the
//! game into the terminal game-over phase. Nothing here can fail.

use crate::command::Command;
use crate::core::scoring::line_clear_score;
use crate::core::{GameState, Piece};
use crate::types::Position;

/// Apply one command to a state and return the next state
pub fn process_command(command: Command, state: &GameState) -> GameState {
    if state.game_over && !command.allowed_after_game_over() {
        return state.clone();
    }

    match command {
        Command::Tick | Command::MoveDown => move_down(state),
        Command::MoveLeft => try_move(state, Position::LEFT),
        Command::MoveRight => try_move(state, Position::RIGHT),
        Command::Rotate => try_transform(state, |p| p.rotate()),
        Command::SpawnPiece(piece) => spawn(state, piece),
        Command::StartGame => state.clone(),
        Command::ResetGame => state.reset(),
        Command::SoftDropStart => GameState {
            soft_drop_active: true,
            ..state.clone()
        },
        Command::SoftDropStop => GameState {
            soft_drop_active: false,
            ..state.clone()
        },
    }
}

fn try_move(state: &GameState, delta: Position) -> GameState {
    try_transform(state, |p| p.move_by(delta))
}

/// Replace the falling piece with `f(piece)` when the board accepts it
fn try_transform(state: &GameState, f: impl FnOnce(&Piece) -> Piece) -> GameState {
    let Some(piece) = state.current_piece else {
        return state.clone();
    };

    let moved = f(&piece);
    if state.board.can_place(&moved) {
        GameState {
            current_piece: Some(moved),
            ..state.clone()
        }
    } else {
        state.clone()
    }
}

fn move_down(state: &GameState) -> GameState {
    let Some(piece) = state.current_piece else {
        return state.clone();
    };

    let moved = piece.move_by(Position::DOWN);
    if state.board.can_place(&moved) {
        GameState {
            current_piece: Some(moved),
            ..state.clone()
        }
    } else {
        lock(state, &piece)
    }
}

/// Commit the piece, clear full rows and score them at the pre-lock level
fn lock(state: &GameState, piece: &Piece) -> GameState {
    let (board, lines) = state.board.place(piece).clear_full_lines();
    let score = state
        .score
        .saturating_add(line_clear_score(lines, state.level()));

    GameState {
        board,
        current_piece: None,
        needs_new_piece: true,
        score,
        ..state.clone()
    }
}

fn spawn(state: &GameState, piece: Piece) -> GameState {
    if state.board.can_place(&piece) {
        GameState {
            current_piece: Some(piece),
            game_over: false,
            needs_new_piece: false,
            ..state.clone()
        }
    } else {
        GameState {
            current_piece: None,
            game_over: true,
            ..state.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Phase};
    use crate::types::Shape;

    fn falling(shape: Shape) -> GameState {
        let state = GameState::new(1);
        process_command(Command::SpawnPiece(Piece::spawn(shape, 10)), &state)
    }

    #[test]
    fn spawn_on_empty_board_starts_falling() {
        let state = falling(Shape::T);
        assert_eq!(state.phase(), Phase::Falling);
        assert!(!state.needs_new_piece);
    }

    #[test]
    fn horizontal_moves_shift_one_column() {
        let state = falling(Shape::O);
        let left = process_command(Command::MoveLeft, &state);
        let right = process_command(Command::MoveRight, &state);
        let c = state.current_piece.unwrap().center();
        assert_eq!(left.current_piece.unwrap().center(), c + Position::LEFT);
        assert_eq!(right.current_piece.unwrap().center(), c + Position::RIGHT);
    }

    #[test]
    fn move_into_wall_is_rejected() {
        let mut state = falling(Shape::O);
        for _ in 0..20 {
            state = process_command(Command::MoveLeft, &state);
        }
        let at_wall = state.clone();
        assert_eq!(
            at_wall.current_piece.unwrap().blocks().iter().map(|b| b.col).min(),
            Some(0)
        );
        assert_eq!(process_command(Command::MoveLeft, &at_wall), at_wall);
    }

    #[test]
    fn rotation_blocked_at_top_edge_is_noop() {
        // The horizontal I rotates up into row -1 from the spawn row.
        let state = falling(Shape::I);
        assert_eq!(process_command(Command::Rotate, &state), state);

        let lowered = process_command(Command::MoveDown, &state);
        let rotated = process_command(Command::Rotate, &lowered);
        assert_ne!(rotated, lowered);
    }

    #[test]
    fn tick_equals_move_down() {
        let state = falling(Shape::S);
        assert_eq!(
            process_command(Command::Tick, &state),
            process_command(Command::MoveDown, &state)
        );
    }

    #[test]
    fn moves_without_piece_are_noops() {
        let state = GameState::new(1);
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::MoveDown,
            Command::Rotate,
            Command::Tick,
        ] {
            assert_eq!(process_command(cmd, &state), state);
        }
    }

    #[test]
    fn blocked_move_down_locks() {
        let mut state = falling(Shape::O);
        // Fill the cell directly under the left column of the O.
        let below = state.current_piece.unwrap().blocks()[2] + Position::DOWN;
        state.board = state.board.place(&Piece::new(Shape::O).move_by(below));

        let locked = process_command(Command::MoveDown, &state);
        assert_eq!(locked.phase(), Phase::AwaitingSpawn);
        assert!(locked.current_piece.is_none());
        assert!(locked.needs_new_piece);
        for b in state.current_piece.unwrap().blocks() {
            assert!(locked.board.is_occupied(*b));
        }
    }

    #[test]
    fn failed_spawn_is_game_over() {
        let mut state = falling(Shape::T);
        state.board = state.board.place(&state.current_piece.unwrap());
        let blocked = process_command(Command::SpawnPiece(Piece::spawn(Shape::T, 10)), &state);
        assert!(blocked.game_over);
        assert!(blocked.current_piece.is_none());
        assert_eq!(blocked.phase(), Phase::GameOver);
    }

    #[test]
    fn soft_drop_flag_toggles() {
        let state = falling(Shape::J);
        let on = process_command(Command::SoftDropStart, &state);
        assert!(on.soft_drop_active);
        let off = process_command(Command::SoftDropStop, &on);
        assert!(!off.soft_drop_active);
    }

    #[test]
    fn start_game_is_engine_noop() {
        let state = falling(Shape::Z);
        assert_eq!(process_command(Command::StartGame, &state), state);
    }

    #[test]
    fn reset_returns_empty_state() {
        let mut state = falling(Shape::L);
        state.score = 1234;
        state.board = state.board.place(&Piece::new(Shape::I).move_by(Position::new(19, 0)));
        let reset = process_command(Command::ResetGame, &state);
        assert_eq!(reset.phase(), Phase::Empty);
        assert_eq!(reset.board, Board::default());
        assert_eq!(reset.score, 0);
        assert!(reset.next_piece.is_none());
    }

    #[test]
    fn single_line_clear_scores_at_level_one() {
        // Bottom row full except the two cells the O will fill.
        let mut rows = vec![vec![false; 10]; 20];
        rows[19] = (0..10).map(|c| !(4..=5).contains(&c)).collect();
        let state = GameState {
            board: Board::with_cells(10, &rows),
            ..GameState::new(1)
        };
        let mut state = process_command(Command::SpawnPiece(Piece::spawn(Shape::O, 10)), &state);
        while state.current_piece.is_some() {
            state = process_command(Command::MoveDown, &state);
        }
        assert_eq!(state.score, 100);
        assert!(state.board.is_occupied(Position::new(19, 4)));
        assert!(!state.board.is_occupied(Position::new(19, 0)));
    }
}
