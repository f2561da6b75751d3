//! Session behavior under tokio's paused clock

use std::time::Duration;

use tokio::time::sleep;

use quantum_blocks::core::Phase;
use quantum_blocks::session::{GameSession, SessionConfig};
use quantum_blocks::types::GameAction;

fn config() -> SessionConfig {
    SessionConfig {
        seed: Some(2024),
        ..Default::default()
    }
}

fn piece_row(session: &GameSession) -> Option<i8> {
    session.state().current_piece.map(|p| p.center().row)
}

#[tokio::test(start_paused = true)]
async fn gravity_uses_configured_delay() {
    let mut session = GameSession::new(&SessionConfig {
        initial_fall_delay_ms: 200,
        ..config()
    })
    .unwrap();
    session.start_new_game();
    let row = piece_row(&session).unwrap();

    sleep(Duration::from_millis(201)).await;
    assert_eq!(piece_row(&session), Some(row + 1));
    sleep(Duration::from_millis(200)).await;
    assert_eq!(piece_row(&session), Some(row + 2));
}

#[tokio::test(start_paused = true)]
async fn soft_drop_runs_alongside_gravity() {
    let mut session = GameSession::new(&config()).unwrap();
    session.start_new_game();
    let row = piece_row(&session).unwrap();

    session.handle_action(GameAction::SoftDropStart);
    sleep(Duration::from_millis(251)).await;
    assert_eq!(piece_row(&session), Some(row + 5));

    session.handle_action(GameAction::SoftDropStop);
    sleep(Duration::from_millis(760)).await;
    // Only the gravity tick at 1000 ms landed.
    assert_eq!(piece_row(&session), Some(row + 6));
}

#[tokio::test(start_paused = true)]
async fn held_soft_drop_locks_and_continues_with_next_piece() {
    let mut session = GameSession::new(&config()).unwrap();
    let first = session.start_new_game().current_piece;

    session.handle_action(GameAction::SoftDropStart);
    sleep(Duration::from_millis(50 * 25)).await;

    let state = session.state();
    assert!(state.board.filled_count() >= 4);
    assert_ne!(state.current_piece, first);
    assert_eq!(state.phase(), Phase::Falling);
    assert!(state.soft_drop_active);
}

#[tokio::test(start_paused = true)]
async fn moves_apply_immediately() {
    let mut session = GameSession::new(&config()).unwrap();
    let before = session.start_new_game().current_piece.unwrap();

    let after = session.handle_action(GameAction::MoveLeft);
    assert_eq!(
        after.current_piece.map(|p| p.center().col),
        Some(before.center().col - 1)
    );
    let reset = session.handle_action(GameAction::ResetGame);
    assert_eq!(reset.score, 0);
    assert_eq!(reset.board.filled_count(), 0);
    assert_eq!(reset.phase(), Phase::Falling);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_session_stops_timers() {
    let mut session = GameSession::new(&config()).unwrap();
    let mut rx = session.subscribe();
    session.start_new_game();
    session.handle_action(GameAction::SoftDropStart);
    drop(session);

    rx.borrow_and_update();
    sleep(Duration::from_secs(5)).await;
    assert!(!rx.has_changed().unwrap_or(false));
}
