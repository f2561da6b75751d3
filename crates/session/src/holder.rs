//! The single authoritative game state, shared by every writer and reader.
//!
//! Backed by a `tokio::sync::watch` channel. Writers run their transition
//! inside `send_if_modified`, whose write lock makes every update a critical
//! section over the latest value. Readers borrow the current value or
//! subscribe for change notifications.

use std::sync::Arc;

use tokio::sync::watch;

use crate::core::{GameSnapshot, GameState};

#[derive(Debug, Clone)]
pub struct StateHolder {
    tx: Arc<watch::Sender<GameState>>,
}

impl StateHolder {
    pub fn new(initial: GameState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Clone of the current state
    pub fn latest(&self) -> GameState {
        self.tx.borrow().clone()
    }

    /// Run `f` against the current state without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.tx.borrow())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.read(GameState::snapshot)
    }

    /// Receiver notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.tx.subscribe()
    }

    /// Replace the state with `f(current)` under the write lock
    ///
    /// `f` returns `None` to leave the state alone. Subscribers are only
    /// notified when the new state differs. Returns the state after the
    /// update, or `None` when `f` declined.
    pub fn update<F>(&self, f: F) -> Option<GameState>
    where
        F: FnOnce(&GameState) -> Option<GameState>,
    {
        let mut result = None;
        self.tx.send_if_modified(|state| {
            let Some(next) = f(state) else {
                return false;
            };
            let changed = next != *state;
            if changed {
                *state = next;
            }
            result = Some(state.clone());
            changed
        });
        result
    }

    /// Wait until no update is in flight
    pub fn barrier(&self) {
        self.tx.send_if_modified(|_| false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_replaces_and_notifies() {
        let holder = StateHolder::new(GameState::new(1));
        let mut rx = holder.subscribe();
        rx.borrow_and_update();

        let after = holder.update(|s| {
            Some(GameState {
                score: s.score + 100,
                ..s.clone()
            })
        });
        assert_eq!(after.map(|s| s.score), Some(100));
        assert_eq!(holder.read(|s| s.score), 100);
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn declined_or_identical_update_does_not_notify() {
        let holder = StateHolder::new(GameState::new(1));
        let mut rx = holder.subscribe();
        rx.borrow_and_update();

        assert_eq!(holder.update(|_| None), None);
        let same = holder.update(|s| Some(s.clone()));
        assert_eq!(same, Some(holder.latest()));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn updates_from_many_threads_are_not_lost() {
        let holder = StateHolder::new(GameState::new(1));
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let holder = holder.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        holder.update(|s| {
                            Some(GameState {
                                score: s.score + 1,
                                ..s.clone()
                            })
                        });
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }
        assert_eq!(holder.read(|s| s.score), 800);
    }
}
