//! Drawable shape model and factories.
//!
//! # Responsibility
//! - Define the closed set of shape variants a canvas can own.
//! - Provide default-constructing factories per variant.
//!
//! # Invariants
//! - Every variant can produce a storage-independent copy of itself.
//! - Shape attributes are never validated; any `i32` extent is accepted.

pub mod factory;
pub mod shape;
