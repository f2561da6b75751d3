//! One entry point for every command, whether it comes from input or a timer.

use log::{debug, info};

use crate::core::GameState;
use crate::engine::{process_command, spawn_next, Command};
use crate::holder::StateHolder;
use crate::timers::CancelToken;
use crate::types::Shape;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    holder: StateHolder,
}

impl Dispatcher {
    pub fn new(holder: StateHolder) -> Self {
        Self { holder }
    }

    pub fn holder(&self) -> &StateHolder {
        &self.holder
    }

    /// Apply `command` to the latest state and return the result
    pub fn dispatch(&self, command: Command) -> GameState {
        let mut outcome = Outcome::default();
        let state = self
            .holder
            .update(|state| Some(step(command, state, &mut outcome)))
            .unwrap_or_else(|| self.holder.latest());
        outcome.log(command, &state);
        state
    }

    /// Spawn from the randomizer, as after a reset
    pub fn spawn(&self) -> GameState {
        let mut outcome = Outcome::default();
        let state = self
            .holder
            .update(|state| Some(spawn_step(state, &mut outcome)))
            .unwrap_or_else(|| self.holder.latest());
        outcome.log(Command::StartGame, &state);
        state
    }

    /// Dispatch on behalf of a timer
    ///
    /// Inside the critical section the command is dropped when `token` has
    /// been cancelled or `when` rejects the latest state. Returns `None` in
    /// that case.
    pub fn dispatch_guarded<W>(
        &self,
        command: Command,
        token: &CancelToken,
        when: W,
    ) -> Option<GameState>
    where
        W: FnOnce(&GameState) -> bool,
    {
        let mut outcome = Outcome::default();
        let state = self.holder.update(|state| {
            if token.is_cancelled() || !when(state) {
                return None;
            }
            Some(step(command, state, &mut outcome))
        })?;
        outcome.log(command, &state);
        Some(state)
    }
}

/// What one step did, recorded under the lock and logged after it is released
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Outcome {
    /// Rows cleared by a lock
    locked: Option<usize>,
    spawned: Option<Shape>,
    game_over: bool,
}

impl Outcome {
    fn log(&self, command: Command, state: &GameState) {
        if let Some(rows) = self.locked {
            debug!(
                "{} locked piece, {} rows cleared, score {}",
                command.as_str(),
                rows,
                state.score
            );
        }
        if let Some(shape) = self.spawned {
            debug!("spawned {}", shape.as_str());
        }
        if self.game_over {
            info!("game over: score {} level {}", state.score, state.level());
        }
    }
}

/// `process_command` followed by the automatic spawn after a lock
///
/// Runs under the holder's write lock, so it only computes.
fn step(command: Command, state: &GameState, outcome: &mut Outcome) -> GameState {
    let next = process_command(command, state);

    if next.needs_new_piece && !state.needs_new_piece {
        // Four cells land on every lock; anything missing went with cleared rows.
        let cleared = (state.board.filled_count() + 4 - next.board.filled_count())
            / next.board.width() as usize;
        outcome.locked = Some(cleared);
    }

    if next.needs_new_piece && !next.game_over {
        spawn_step(&next, outcome)
    } else {
        next
    }
}

fn spawn_step(state: &GameState, outcome: &mut Outcome) -> GameState {
    let next = spawn_next(state);
    outcome.spawned = next.current_piece.map(|piece| piece.shape());
    outcome.game_over = next.game_over && !state.game_over;
    next
}
