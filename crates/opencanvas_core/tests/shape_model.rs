use opencanvas_core::{
    Drawable, Rectangle, RectangleFactory, Shape, ShapeFactory, ShapeKind, Square, SquareFactory,
    Textbox, TextboxFactory, DEFAULT_COLOUR,
};

#[test]
fn default_constructors_yield_zero_value_shapes() {
    let shapes: Vec<Shape> = vec![
        Rectangle::default().into(),
        Square::default().into(),
        Textbox::default().into(),
    ];

    for shape in &shapes {
        assert_eq!(shape.length(), 0);
        assert_eq!(shape.width(), 0);
        assert_eq!(shape.colour(), DEFAULT_COLOUR);
        assert_eq!(shape.position_x(), 0);
        assert_eq!(shape.position_y(), 0);
    }
    assert_eq!(shapes[2].as_textbox().map(Textbox::text), Some(""));
}

#[test]
fn square_constructor_couples_sides() {
    let square = Square::new(15, "red", 10, 10);
    assert_eq!(square.length(), 15);
    assert_eq!(square.width(), 15);
}

#[test]
fn square_sides_are_not_recoupled_after_construction() {
    let mut square = Square::new(15, "red", 10, 10);
    square.set_width(7);

    assert_eq!(square.length(), 15);
    assert_eq!(square.width(), 7);
}

#[test]
fn duplicate_is_value_equal_and_storage_independent() {
    let original: Shape = Textbox::new(30, 10, "green", 0, 0, "Hello World").into();
    let mut copy = original.duplicate();
    assert_eq!(copy, original);

    copy.set_length(100);
    copy.set_colour("purple");
    copy.as_textbox_mut()
        .expect("copy keeps textbox variant")
        .set_text("Modified text");

    assert_eq!(original.length(), 30);
    assert_eq!(original.colour(), "green");
    assert_eq!(original.as_textbox().map(Textbox::text), Some("Hello World"));
    assert_eq!(copy.kind(), ShapeKind::Textbox);
}

#[test]
fn mutating_original_does_not_touch_duplicate() {
    let mut original = Rectangle::new(10, 20, "blue", 5, 5);
    let copy = original.duplicate();

    original.set_position_x(-3);
    original.set_width(0);

    assert_eq!(copy.position_x(), 5);
    assert_eq!(copy.width(), 20);
}

#[test]
fn extreme_values_are_accepted_and_cloned() {
    let extreme = Rectangle::new(-10, 0, "", -100, -100);
    let copy = extreme.duplicate();

    assert_eq!(copy.length(), -10);
    assert_eq!(copy.width(), 0);
    assert_eq!(copy.colour(), "");
    assert_eq!((copy.position_x(), copy.position_y()), (-100, -100));
}

#[test]
fn factories_create_default_shapes_of_their_variant() {
    let factories: [(&dyn ShapeFactory, ShapeKind, &str); 3] = [
        (&RectangleFactory, ShapeKind::Rectangle, "Rectangle Factory"),
        (&SquareFactory, ShapeKind::Square, "Square Factory"),
        (&TextboxFactory, ShapeKind::Textbox, "Textbox Factory"),
    ];

    for (factory, kind, label) in factories {
        let shape = factory.create_shape();
        assert_eq!(shape.kind(), kind);
        assert_eq!(shape.length(), 0);
        assert_eq!(factory.describe(), label);
    }
}

#[test]
fn shape_serialization_uses_kind_tag() {
    let shape: Shape = Textbox::new(3, 4, "green", 1, 2, "note").into();

    let json = serde_json::to_value(&shape).unwrap();
    assert_eq!(json["kind"], "textbox");
    assert_eq!(json["attributes"]["length"], 3);
    assert_eq!(json["attributes"]["colour"], "green");
    assert_eq!(json["text"], "note");

    let decoded: Shape = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, shape);
}
