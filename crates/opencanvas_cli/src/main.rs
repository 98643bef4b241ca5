//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise canvas editing, undo and export end to end.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `opencanvas_cli [png|pdf]`. Logging is configured through
//! `OPENCANVAS_LOG` and `OPENCANVAS_LOG_DIR`.

use log::warn;
use opencanvas_core::{
    exporter_for, init_logging, parse_export_format, Drawable, DrawingSession, ExportCanvas,
    ExportFormat, LoggingConfig, Rectangle, RectangleFactory, Shape, ShapeFactory, Square,
    SquareFactory, Textbox, TextboxFactory,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging(&LoggingConfig::from_env()) {
        eprintln!("opencanvas: logging disabled: {err}");
    }

    let format = match std::env::args().nth(1) {
        Some(arg) => match parse_export_format(&arg) {
            Ok(format) => format,
            Err(err) => {
                eprintln!("opencanvas: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => ExportFormat::Png,
    };

    println!("opencanvas_core version={}", opencanvas_core::core_version());
    run_demo(format);
    ExitCode::SUCCESS
}

fn run_demo(format: ExportFormat) {
    let mut session = DrawingSession::new();

    let factories: [&dyn ShapeFactory; 3] = [&RectangleFactory, &SquareFactory, &TextboxFactory];
    for factory in factories {
        println!("factory={}", factory.describe());
        session.canvas_mut().push_shape(factory.create_shape());
    }
    session.checkpoint();
    print_canvas("factory defaults", &session);

    let canvas = session.canvas_mut();
    canvas.push_shape(Rectangle::new(10, 20, "blue", 0, 0));
    canvas.push_shape(Square::new(15, "red", 5, 5));
    canvas.push_shape(Textbox::new(30, 10, "green", 10, 10, "First text"));
    session.checkpoint();
    print_canvas("after edits", &session);

    if let Some(textbox) = session
        .canvas_mut()
        .shape_mut(5)
        .and_then(Shape::as_textbox_mut)
    {
        textbox.set_text("Updated text");
    }
    session
        .canvas_mut()
        .push_shape(Rectangle::new(50, 30, "yellow", 20, 20));
    print_canvas("after more edits", &session);

    match ExportCanvas::new(Some(session.canvas()), exporter_for(format)).export() {
        Ok(report) => {
            for step in &report.steps {
                println!("export {:?}: {}", step.stage, step.message);
            }
        }
        Err(err) => warn!("event=cli_export status=error error={err}"),
    }

    while session.undo() {
        print_canvas("undo", &session);
    }
}

fn print_canvas(label: &str, session: &DrawingSession) {
    println!(
        "{label}: shapes={} checkpoints={}",
        session.canvas().len(),
        session.history_len()
    );
    for (index, shape) in session.canvas().shapes().iter().enumerate() {
        let text = shape
            .as_textbox()
            .map(|textbox| format!(" text={:?}", textbox.text()))
            .unwrap_or_default();
        println!(
            "  [{index}] {} {}x{} colour={} at=({},{}){text}",
            shape.kind(),
            shape.length(),
            shape.width(),
            shape.colour(),
            shape.position_x(),
            shape.position_y()
        );
    }
}
