//! Game orchestration: reset and first spawn, timer lifecycle, input routing.

use std::time::Duration;

use anyhow::Result;
use log::info;
use tokio::sync::watch;

use crate::config::SessionConfig;
use crate::core::{GameSnapshot, GameState};
use crate::dispatcher::Dispatcher;
use crate::engine::Command;
use crate::holder::StateHolder;
use crate::timers::{spawn_fall_timer, spawn_soft_drop_timer, FallTiming, TimerHandle};
use crate::types::GameAction;

/// A running game: one state holder, the dispatcher and both timers
///
/// Timers are tokio tasks, so every method that may start one must be called
/// from within a tokio runtime.
#[derive(Debug)]
pub struct GameSession {
    dispatcher: Dispatcher,
    timing: FallTiming,
    soft_drop_interval: Duration,
    fall_timer: Option<TimerHandle>,
    soft_drop_timer: Option<TimerHandle>,
}

impl GameSession {
    /// Build an idle session; call [`start_new_game`](Self::start_new_game) to play
    ///
    /// Fails when `config` does not pass [`SessionConfig::validate`].
    pub fn new(config: &SessionConfig) -> Result<Self> {
        config.validate()?;
        let state = GameState::with_size(
            config.board_width,
            config.board_height,
            config.seed_or_clock(),
        );
        Ok(Self {
            dispatcher: Dispatcher::new(StateHolder::new(state)),
            timing: FallTiming {
                initial_delay_ms: config.initial_fall_delay_ms,
                speed_multiplier: config.level_speed_multiplier,
            },
            soft_drop_interval: Duration::from_millis(config.soft_drop_interval_ms),
            fall_timer: None,
            soft_drop_timer: None,
        })
    }

    /// Cancel timers, reset, spawn the first piece and start gravity
    pub fn start_new_game(&mut self) -> GameState {
        self.cancel_timers();
        self.dispatcher.dispatch(Command::ResetGame);
        let state = self.dispatcher.spawn();

        if !state.game_over {
            self.fall_timer = Some(spawn_fall_timer(self.dispatcher.clone(), self.timing));
        }
        info!(
            "new game on {}x{} board",
            state.board_width(),
            state.board_height()
        );
        state
    }

    /// Route one user action
    pub fn handle_action(&mut self, action: GameAction) -> GameState {
        if self.is_game_over() && !action.restarts() {
            if action == GameAction::SoftDropStop {
                self.stop_soft_drop_timer();
            }
            return self.state();
        }

        match action {
            GameAction::StartGame | GameAction::ResetGame => self.start_new_game(),
            GameAction::SoftDropStart => {
                let state = self.dispatcher.dispatch(Command::SoftDropStart);
                self.stop_soft_drop_timer();
                if !state.game_over {
                    self.soft_drop_timer = Some(spawn_soft_drop_timer(
                        self.dispatcher.clone(),
                        self.soft_drop_interval,
                    ));
                }
                state
            }
            GameAction::SoftDropStop => {
                let state = self.dispatcher.dispatch(Command::SoftDropStop);
                self.stop_soft_drop_timer();
                state
            }
            other => self.dispatcher.dispatch(Command::from(other)),
        }
    }

    pub fn state(&self) -> GameState {
        self.dispatcher.holder().latest()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.dispatcher.holder().snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.dispatcher.holder().subscribe()
    }

    pub fn is_game_over(&self) -> bool {
        self.dispatcher.holder().read(|s| s.game_over)
    }

    /// Stop both timers; the game state stays as it is
    pub fn shutdown(&mut self) {
        self.cancel_timers();
        info!("session shut down, final score {}", self.state().score);
    }

    fn stop_soft_drop_timer(&mut self) {
        if let Some(timer) = self.soft_drop_timer.take() {
            timer.cancel();
        }
    }

    fn cancel_timers(&mut self) {
        if let Some(timer) = self.fall_timer.take() {
            timer.cancel();
        }
        self.stop_soft_drop_timer();
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}
