//! Drawing session use-case service.
//!
//! # Responsibility
//! - Pair one canvas with its undo history behind checkpoint/undo entry points.
//!
//! # Invariants
//! - `undo()` consumes exactly one memento per successful call.
//! - The session never hands out history entries; they are consumed in place.

use crate::canvas::Canvas;
use crate::history::caretaker::CareTaker;
use log::debug;

/// Canvas plus the snapshot history used to undo edits on it.
#[derive(Debug, Default)]
pub struct DrawingSession {
    canvas: Canvas,
    history: CareTaker,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing canvas with an empty history.
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            history: CareTaker::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Snapshots the current canvas onto the history stack.
    pub fn checkpoint(&mut self) {
        let memento = self.canvas.capture_current();
        self.history.add_memento(Some(memento));
    }

    /// Restores the canvas to the most recent checkpoint.
    ///
    /// Returns `false` when no checkpoint is available; the canvas is left
    /// unchanged in that case.
    pub fn undo(&mut self) -> bool {
        let memento = self.history.get_last_memento();
        let restored = self.canvas.undo_action(memento.as_ref());
        debug!(
            "event=session_undo module=service restored={} remaining={}",
            restored,
            self.history.len()
        );
        restored
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
