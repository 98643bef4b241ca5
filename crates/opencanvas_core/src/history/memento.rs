//! Frozen canvas snapshots.
//!
//! # Invariants
//! - A memento owns deep copies only; it never aliases live canvas shapes.
//! - The snapshot sequence is never mutated after construction.

use crate::model::shape::Shape;
use log::debug;
use uuid::Uuid;

/// Diagnostic identifier attached to every snapshot.
pub type SnapshotId = Uuid;

/// Immutable deep copy of a shape sequence at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    id: SnapshotId,
    shapes: Vec<Shape>,
}

impl Memento {
    /// Deep-copies `shapes` in order into a new snapshot.
    pub fn capture(shapes: &[Shape]) -> Self {
        let memento = Self {
            id: Uuid::new_v4(),
            shapes: shapes.to_vec(),
        };
        debug!(
            "event=memento_capture module=history status=ok snapshot={} shapes={}",
            memento.id,
            memento.shapes.len()
        );
        memento
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    /// Read-only view of the snapshot.
    ///
    /// Callers that want to mutate the result must copy it first, e.g. via
    /// [`Memento::to_shapes`].
    pub fn saved_state(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns fresh deep copies of every stored shape, in order.
    pub fn to_shapes(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Memento;
    use crate::model::shape::{Rectangle, Shape, Textbox};

    #[test]
    fn capture_copies_in_order_and_detaches_from_source() {
        let mut source: Vec<Shape> = vec![
            Rectangle::new(1, 2, "blue", 0, 0).into(),
            Textbox::new(3, 4, "green", 0, 0, "before").into(),
        ];
        let memento = Memento::capture(&source);

        source[1]
            .as_textbox_mut()
            .expect("second shape is a textbox")
            .set_text("after");

        assert_eq!(memento.len(), 2);
        assert_eq!(memento.saved_state()[0], source[0]);
        assert_eq!(
            memento.saved_state()[1].as_textbox().map(|t| t.text()),
            Some("before")
        );
    }

    #[test]
    fn repeated_reads_do_not_consume_snapshot() {
        let memento = Memento::capture(&[Rectangle::default().into()]);
        let first = memento.to_shapes();
        let second = memento.to_shapes();
        assert_eq!(first, second);
        assert_eq!(memento.len(), 1);
    }

    #[test]
    fn each_capture_gets_a_distinct_id() {
        let a = Memento::capture(&[]);
        let b = Memento::capture(&[]);
        assert!(a.is_empty());
        assert_ne!(a.id(), b.id());
    }
}
