//! Shape factories.
//!
//! Each factory produces a default-constructed shape of one variant. Canvas
//! code never depends on which factory produced a shape it holds.

use crate::model::shape::{Rectangle, Shape, ShapeKind, Square, Textbox};

/// Creates default-constructed shapes of a single variant.
pub trait ShapeFactory {
    fn create_shape(&self) -> Shape;

    /// Human-readable factory label.
    fn describe(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct SquareFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextboxFactory;

impl ShapeFactory for RectangleFactory {
    fn create_shape(&self) -> Shape {
        Rectangle::default().into()
    }

    fn describe(&self) -> &'static str {
        "Rectangle Factory"
    }
}

impl ShapeFactory for SquareFactory {
    fn create_shape(&self) -> Shape {
        Square::default().into()
    }

    fn describe(&self) -> &'static str {
        "Square Factory"
    }
}

impl ShapeFactory for TextboxFactory {
    fn create_shape(&self) -> Shape {
        Textbox::default().into()
    }

    fn describe(&self) -> &'static str {
        "Textbox Factory"
    }
}

/// Returns the factory responsible for `kind`.
pub fn factory_for(kind: ShapeKind) -> Box<dyn ShapeFactory> {
    match kind {
        ShapeKind::Rectangle => Box::new(RectangleFactory),
        ShapeKind::Square => Box::new(SquareFactory),
        ShapeKind::Textbox => Box::new(TextboxFactory),
    }
}
