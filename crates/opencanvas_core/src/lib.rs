//! Core domain logic for OpenCanvas.
//! In-memory shapes, undoable canvas snapshots and format-agnostic export.

pub mod canvas;
pub mod export;
pub mod history;
pub mod logging;
pub mod model;
pub mod service;

pub use canvas::Canvas;
pub use export::{
    exporter_for, parse_export_format, ExportCanvas, ExportError, ExportFormat,
    ExportFormatError, ExportReport, ExportResult, ExportStage, ExportStepRecord, ExportSteps,
    PdfExporter, PngExporter,
};
pub use history::caretaker::CareTaker;
pub use history::memento::{Memento, SnapshotId};
pub use logging::{
    default_log_level, init_logging, logging_status, LogTarget, LoggingConfig, LoggingError,
};
pub use model::factory::{
    factory_for, RectangleFactory, ShapeFactory, SquareFactory, TextboxFactory,
};
pub use model::shape::{
    parse_shape_kind, Drawable, Rectangle, Shape, ShapeAttributes, ShapeKind, ShapeKindError,
    Square, Textbox, DEFAULT_COLOUR,
};
pub use service::drawing_service::DrawingSession;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
