//! Canvas export pipeline.
//!
//! # Responsibility
//! - Drive format-specific export steps in a fixed order.
//! - Keep format strategies read-only with respect to the canvas.
//!
//! # Invariants
//! - Steps always run as prepare, render, persist.
//! - A missing canvas runs no step at all.
//! - Exporters only read `Canvas::shapes()`.

pub mod exporter;
pub mod format;

pub use exporter::{
    ExportCanvas, ExportError, ExportReport, ExportResult, ExportStage, ExportStepRecord,
    ExportSteps, PdfExporter, PngExporter,
};
pub use format::{exporter_for, parse_export_format, ExportFormat, ExportFormatError};
