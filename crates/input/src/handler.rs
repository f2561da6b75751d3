//! Soft-drop hold tracking for terminal environments.
//!
//! A held down key becomes one `SoftDropStart` and, on release, one
//! `SoftDropStop`. Terminals that never report key releases instead resend
//! presses while a key is held; when those stop for longer than the release
//! timeout the hold is considered over.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{GameAction, SOFT_DROP_GRACE_MS};

/// Actions produced by a single key event
pub type Actions = ArrayVec<GameAction, 2>;

#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    since_down_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            soft_drop_held: false,
            since_down_ms: 0,
            key_release_timeout_ms: SOFT_DROP_GRACE_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Translate one terminal key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Actions {
        match key.kind {
            KeyEventKind::Release => self.handle_key_release(key),
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key),
        }
    }

    pub fn handle_key_press(&mut self, key: KeyEvent) -> Actions {
        let mut actions = Actions::new();
        match handle_key_event(key) {
            Some(GameAction::SoftDropStart) => {
                self.since_down_ms = 0;
                if !self.soft_drop_held {
                    self.soft_drop_held = true;
                    actions.push(GameAction::SoftDropStart);
                }
            }
            Some(action) => {
                if action.restarts() && self.soft_drop_held {
                    self.soft_drop_held = false;
                    actions.push(GameAction::SoftDropStop);
                }
                actions.push(action);
            }
            None => {}
        }
        actions
    }

    pub fn handle_key_release(&mut self, key: KeyEvent) -> Actions {
        let mut actions = Actions::new();
        if handle_key_event(key) == Some(GameAction::SoftDropStart) {
            actions.extend(self.release());
        }
        actions
    }

    /// Advance the release timeout; returns `SoftDropStop` once it expires
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        if !self.soft_drop_held {
            return None;
        }
        self.since_down_ms = self.since_down_ms.saturating_add(elapsed_ms);
        if self.since_down_ms > self.key_release_timeout_ms {
            self.release()
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.soft_drop_held = false;
        self.since_down_ms = 0;
    }

    fn release(&mut self) -> Option<GameAction> {
        if self.soft_drop_held {
            self.reset();
            Some(GameAction::SoftDropStop)
        } else {
            None
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
