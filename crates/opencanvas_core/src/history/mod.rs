//! Snapshot capture and undo history.
//!
//! # Responsibility
//! - Freeze canvas state into immutable mementos.
//! - Keep mementos in LIFO order for undo.
//!
//! # Invariants
//! - Every shape crossing the canvas/history boundary is deep-copied.

pub mod caretaker;
pub mod memento;
