//! Fall and soft-drop timers.
//!
//! Each timer is a tokio task that sleeps, then dispatches through the same
//! [`Dispatcher`] as user input. A timer owns a [`CancelToken`]; the token is
//! checked inside the state holder's critical section, so once
//! [`TimerHandle::cancel`] returns no further command from that timer lands.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::core::{fall_delay_ms, GameState};
use crate::dispatcher::Dispatcher;
use crate::engine::Command;

/// Shared cancellation flag
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fall timer pacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallTiming {
    pub initial_delay_ms: u64,
    pub speed_multiplier: f64,
}

impl FallTiming {
    pub fn delay_for(&self, score: u32) -> Duration {
        Duration::from_millis(fall_delay_ms(
            score,
            self.initial_delay_ms,
            self.speed_multiplier,
        ))
    }
}

/// A running timer task; dropping the handle cancels it
#[derive(Debug)]
pub struct TimerHandle {
    name: &'static str,
    token: CancelToken,
    dispatcher: Dispatcher,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Stop the timer; safe to call any number of times
    ///
    /// Blocks only for as long as an in-flight command holds the state lock.
    pub fn cancel(&self) {
        if self.token.is_cancelled() {
            return;
        }
        self.token.cancel();
        self.dispatcher.holder().barrier();
        self.task.abort();
        debug!("{} timer cancelled", self.name);
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the task has exited (game over, released soft drop, or cancel)
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start gravity: `Tick` after a delay recomputed from the latest score
///
/// Must be called from within a tokio runtime.
pub fn spawn_fall_timer(dispatcher: Dispatcher, timing: FallTiming) -> TimerHandle {
    let token = CancelToken::new();
    let task = {
        let dispatcher = dispatcher.clone();
        let token = token.clone();
        tokio::spawn(async move {
            debug!("fall timer started");
            loop {
                let (score, over) = dispatcher.holder().read(|s| (s.score, s.game_over));
                if over || token.is_cancelled() {
                    break;
                }
                sleep(timing.delay_for(score)).await;

                match dispatcher.dispatch_guarded(Command::Tick, &token, |s| !s.game_over) {
                    Some(state) if !state.game_over => {}
                    _ => break,
                }
            }
            debug!("fall timer stopped");
        })
    };
    TimerHandle {
        name: "fall",
        token,
        dispatcher,
        task,
    }
}

/// Start soft drop: `MoveDown` every `interval` while soft drop is active
///
/// Must be called from within a tokio runtime.
pub fn spawn_soft_drop_timer(dispatcher: Dispatcher, interval: Duration) -> TimerHandle {
    let token = CancelToken::new();
    let task = {
        let dispatcher = dispatcher.clone();
        let token = token.clone();
        tokio::spawn(async move {
            debug!("soft drop timer started");
            loop {
                sleep(interval).await;

                let active = |s: &GameState| s.soft_drop_active && !s.game_over;
                match dispatcher.dispatch_guarded(Command::MoveDown, &token, active) {
                    Some(state) if active(&state) => {}
                    _ => break,
                }
            }
            debug!("soft drop timer stopped");
        })
    };
    TimerHandle {
        name: "soft drop",
        token,
        dispatcher,
        task,
    }
}
