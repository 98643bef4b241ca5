//! Shape domain model.
//!
//! # Responsibility
//! - Define the closed set of drawable variants stored on a canvas.
//! - Provide value-copy duplication for every variant.
//!
//! # Invariants
//! - `duplicate()` returns a value-equal shape that shares no storage with
//!   the receiver; mutating either side never affects the other.
//! - Attribute setters never validate. Negative or zero extents are allowed.
//! - `Square` couples length and width only in `Square::new`; later setter
//!   calls may leave them unequal.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Colour assigned by default constructors.
pub const DEFAULT_COLOUR: &str = "black";

/// Attributes shared by every shape variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeAttributes {
    pub length: i32,
    pub width: i32,
    pub colour: String,
    pub position_x: i32,
    pub position_y: i32,
}

impl ShapeAttributes {
    pub fn new(
        length: i32,
        width: i32,
        colour: impl Into<String>,
        position_x: i32,
        position_y: i32,
    ) -> Self {
        Self {
            length,
            width,
            colour: colour.into(),
            position_x,
            position_y,
        }
    }
}

impl Default for ShapeAttributes {
    /// Zero extents, origin position, `"black"`.
    fn default() -> Self {
        Self::new(0, 0, DEFAULT_COLOUR, 0, 0)
    }
}

/// Variant discriminator for [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Square,
    Textbox,
}

/// Stable string id for rectangle shapes.
pub const SHAPE_KIND_RECTANGLE: &str = "rectangle";
/// Stable string id for square shapes.
pub const SHAPE_KIND_SQUARE: &str = "square";
/// Stable string id for textbox shapes.
pub const SHAPE_KIND_TEXTBOX: &str = "textbox";

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => SHAPE_KIND_RECTANGLE,
            Self::Square => SHAPE_KIND_SQUARE,
            Self::Textbox => SHAPE_KIND_TEXTBOX,
        }
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a shape kind from its stable string id.
pub fn parse_shape_kind(value: &str) -> Result<ShapeKind, ShapeKindError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(ShapeKindError::Empty);
    }

    match normalized {
        SHAPE_KIND_RECTANGLE => Ok(ShapeKind::Rectangle),
        SHAPE_KIND_SQUARE => Ok(ShapeKind::Square),
        SHAPE_KIND_TEXTBOX => Ok(ShapeKind::Textbox),
        other => Err(ShapeKindError::Unsupported(other.to_string())),
    }
}

/// Shape kind parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKindError {
    Empty,
    Unsupported(String),
}

impl Display for ShapeKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "shape kind must not be empty"),
            Self::Unsupported(value) => write!(f, "shape kind is unsupported: {value}"),
        }
    }
}

impl Error for ShapeKindError {}

/// Capability shared by everything that can live on a canvas.
///
/// Implementors expose their attribute block; the accessors below are
/// provided on top of it so every variant reads and writes the same way.
pub trait Drawable {
    fn kind(&self) -> ShapeKind;
    fn attributes(&self) -> &ShapeAttributes;
    fn attributes_mut(&mut self) -> &mut ShapeAttributes;

    /// Returns an independently owned copy of `self` with identical values.
    fn duplicate(&self) -> Shape;

    fn length(&self) -> i32 {
        self.attributes().length
    }

    fn set_length(&mut self, length: i32) {
        self.attributes_mut().length = length;
    }

    fn width(&self) -> i32 {
        self.attributes().width
    }

    fn set_width(&mut self, width: i32) {
        self.attributes_mut().width = width;
    }

    fn colour(&self) -> &str {
        &self.attributes().colour
    }

    fn set_colour(&mut self, colour: &str) {
        self.attributes_mut().colour = colour.to_string();
    }

    fn position_x(&self) -> i32 {
        self.attributes().position_x
    }

    fn set_position_x(&mut self, x: i32) {
        self.attributes_mut().position_x = x;
    }

    fn position_y(&self) -> i32 {
        self.attributes().position_y
    }

    fn set_position_y(&mut self, y: i32) {
        self.attributes_mut().position_y = y;
    }
}

/// Axis-aligned rectangle with independent length and width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub attributes: ShapeAttributes,
}

impl Rectangle {
    pub fn new(length: i32, width: i32, colour: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            attributes: ShapeAttributes::new(length, width, colour, x, y),
        }
    }
}

/// Square whose sides are equal when constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub attributes: ShapeAttributes,
}

impl Square {
    /// Creates a square with `length == width == size`.
    ///
    /// The coupling is not maintained afterwards: `set_length`/`set_width`
    /// update one side only.
    pub fn new(size: i32, colour: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            attributes: ShapeAttributes::new(size, size, colour, x, y),
        }
    }
}

/// Rectangle-shaped box carrying a text string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Textbox {
    pub attributes: ShapeAttributes,
    pub text: String,
}

impl Textbox {
    pub fn new(
        length: i32,
        width: i32,
        colour: impl Into<String>,
        x: i32,
        y: i32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            attributes: ShapeAttributes::new(length, width, colour, x, y),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

macro_rules! impl_drawable {
    ($ty:ident) => {
        impl Drawable for $ty {
            fn kind(&self) -> ShapeKind {
                ShapeKind::$ty
            }

            fn attributes(&self) -> &ShapeAttributes {
                &self.attributes
            }

            fn attributes_mut(&mut self) -> &mut ShapeAttributes {
                &mut self.attributes
            }

            fn duplicate(&self) -> Shape {
                Shape::$ty(self.clone())
            }
        }

        impl From<$ty> for Shape {
            fn from(value: $ty) -> Self {
                Shape::$ty(value)
            }
        }
    };
}

impl_drawable!(Rectangle);
impl_drawable!(Square);
impl_drawable!(Textbox);

/// Closed set of shapes a canvas can own.
///
/// Serialized with an inline `kind` tag, e.g.
/// `{"kind":"square","attributes":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
    Textbox(Textbox),
}

impl Shape {
    pub fn as_textbox(&self) -> Option<&Textbox> {
        match self {
            Self::Textbox(textbox) => Some(textbox),
            _ => None,
        }
    }

    pub fn as_textbox_mut(&mut self) -> Option<&mut Textbox> {
        match self {
            Self::Textbox(textbox) => Some(textbox),
            _ => None,
        }
    }

    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Self::Rectangle(shape) => shape,
            Self::Square(shape) => shape,
            Self::Textbox(shape) => shape,
        }
    }

    fn as_drawable_mut(&mut self) -> &mut dyn Drawable {
        match self {
            Self::Rectangle(shape) => shape,
            Self::Square(shape) => shape,
            Self::Textbox(shape) => shape,
        }
    }
}

impl Drawable for Shape {
    fn kind(&self) -> ShapeKind {
        self.as_drawable().kind()
    }

    fn attributes(&self) -> &ShapeAttributes {
        self.as_drawable().attributes()
    }

    fn attributes_mut(&mut self) -> &mut ShapeAttributes {
        self.as_drawable_mut().attributes_mut()
    }

    fn duplicate(&self) -> Shape {
        self.as_drawable().duplicate()
    }
}
