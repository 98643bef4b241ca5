//! Undo history stack.
//!
//! # Invariants
//! - The most recently added memento is always the first one retrieved.
//! - A retrieved memento is owned by the caller; history no longer tracks it.

use crate::history::memento::Memento;
use log::{debug, info, warn};

/// LIFO stack of canvas snapshots.
#[derive(Debug, Default)]
pub struct CareTaker {
    history: Vec<Memento>,
}

impl CareTaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `memento` onto the history.
    ///
    /// Returns `false` and leaves history untouched when `memento` is `None`.
    pub fn add_memento(&mut self, memento: Option<Memento>) -> bool {
        let Some(memento) = memento else {
            warn!("event=memento_push module=history status=skipped reason=absent_memento");
            return false;
        };

        let snapshot = memento.id();
        self.history.push(memento);
        debug!(
            "event=memento_push module=history status=ok snapshot={} depth={}",
            snapshot,
            self.history.len()
        );
        true
    }

    /// Pops the most recently pushed memento.
    ///
    /// Returns `None` on an empty history.
    pub fn get_last_memento(&mut self) -> Option<Memento> {
        match self.history.pop() {
            Some(memento) => {
                debug!(
                    "event=memento_pop module=history status=ok snapshot={} depth={}",
                    memento.id(),
                    self.history.len()
                );
                Some(memento)
            }
            None => {
                info!("event=memento_pop module=history status=empty");
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Drop for CareTaker {
    fn drop(&mut self) {
        if !self.history.is_empty() {
            debug!(
                "event=history_release module=history status=ok mementos={}",
                self.history.len()
            );
        }
    }
}
