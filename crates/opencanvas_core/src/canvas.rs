//! Drawing surface.
//!
//! # Responsibility
//! - Own the ordered shape collection being edited.
//! - Capture snapshots and restore from them.
//!
//! # Invariants
//! - The canvas exclusively owns its shapes; nothing is shared with mementos.
//! - Insertion order is preserved and duplicates by value are allowed.
//! - After `undo_action(Some(m))` the shapes are value-equal to
//!   `m.saved_state()` but storage-independent from it.

use crate::history::memento::Memento;
use crate::model::shape::Shape;
use log::{debug, info, warn};

/// Ordered, exclusively owned collection of shapes.
#[derive(Debug, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `shape` to the canvas.
    ///
    /// Returns `false` and leaves the canvas unchanged when `shape` is `None`.
    pub fn add_shape(&mut self, shape: Option<Shape>) -> bool {
        let Some(shape) = shape else {
            warn!("event=shape_add module=canvas status=skipped reason=absent_shape");
            return false;
        };

        self.shapes.push(shape);
        debug!(
            "event=shape_add module=canvas status=ok shapes={}",
            self.shapes.len()
        );
        true
    }

    /// Appends a shape that is known to be present.
    pub fn push_shape(&mut self, shape: impl Into<Shape>) {
        self.add_shape(Some(shape.into()));
    }

    /// Current shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Snapshots every current shape, in order. Works on an empty canvas.
    pub fn capture_current(&self) -> Memento {
        info!(
            "event=canvas_capture module=canvas status=start shapes={}",
            self.shapes.len()
        );
        Memento::capture(&self.shapes)
    }

    /// Replaces every live shape with fresh copies from `memento`.
    ///
    /// Returns `false` and leaves the canvas unchanged when `memento` is
    /// `None`.
    pub fn undo_action(&mut self, memento: Option<&Memento>) -> bool {
        let Some(memento) = memento else {
            warn!("event=canvas_restore module=canvas status=skipped reason=absent_memento");
            return false;
        };

        let discarded = self.shapes.len();
        self.shapes = memento.to_shapes();
        info!(
            "event=canvas_restore module=canvas status=ok snapshot={} discarded={} restored={}",
            memento.id(),
            discarded,
            self.shapes.len()
        );
        true
    }
}
