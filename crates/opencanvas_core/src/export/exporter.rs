//! Export driver and built-in format strategies.

use crate::canvas::Canvas;
use crate::export::format::ExportFormat;
use crate::model::shape::Shape;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ExportResult<T> = Result<T, ExportError>;

/// Export driver errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The exporter was constructed without a canvas.
    MissingCanvas { format: ExportFormat },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCanvas { format } => {
                write!(f, "no canvas to export as {format}")
            }
        }
    }
}

impl Error for ExportError {}

/// Pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExportStage {
    Prepare,
    Render,
    Persist,
}

/// Outcome of one executed stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStepRecord {
    pub stage: ExportStage,
    pub message: String,
}

/// Summary of a completed export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub format: ExportFormat,
    pub shape_count: usize,
    pub steps: Vec<ExportStepRecord>,
}

/// Format-specific export steps.
///
/// Implementors receive the canvas shapes read-only and return a short
/// message describing what the step did. Ordering is owned by
/// [`ExportCanvas::export`], not by implementors.
pub trait ExportSteps {
    fn format(&self) -> ExportFormat;
    fn prepare_canvas(&mut self, shapes: &[Shape]) -> String;
    fn render_elements(&mut self, shapes: &[Shape]) -> String;
    fn save_to_file(&mut self, shapes: &[Shape]) -> String;
}

impl<T: ExportSteps + ?Sized> ExportSteps for Box<T> {
    fn format(&self) -> ExportFormat {
        (**self).format()
    }

    fn prepare_canvas(&mut self, shapes: &[Shape]) -> String {
        (**self).prepare_canvas(shapes)
    }

    fn render_elements(&mut self, shapes: &[Shape]) -> String {
        (**self).render_elements(shapes)
    }

    fn save_to_file(&mut self, shapes: &[Shape]) -> String {
        (**self).save_to_file(shapes)
    }
}

impl<T: ExportSteps + ?Sized> ExportSteps for &mut T {
    fn format(&self) -> ExportFormat {
        (**self).format()
    }

    fn prepare_canvas(&mut self, shapes: &[Shape]) -> String {
        (**self).prepare_canvas(shapes)
    }

    fn render_elements(&mut self, shapes: &[Shape]) -> String {
        (**self).render_elements(shapes)
    }

    fn save_to_file(&mut self, shapes: &[Shape]) -> String {
        (**self).save_to_file(shapes)
    }
}

/// Simulated PNG output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngExporter;

/// Simulated PDF output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter;

impl ExportSteps for PngExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Png
    }

    fn prepare_canvas(&mut self, _shapes: &[Shape]) -> String {
        "PNG: Preparing canvas for PNG export".to_string()
    }

    fn render_elements(&mut self, shapes: &[Shape]) -> String {
        format!("PNG: Rendering {} elements for PNG format", shapes.len())
    }

    fn save_to_file(&mut self, _shapes: &[Shape]) -> String {
        "PNG: Saving file as PNG format".to_string()
    }
}

impl ExportSteps for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn prepare_canvas(&mut self, _shapes: &[Shape]) -> String {
        "PDF: Preparing canvas for PDF export".to_string()
    }

    fn render_elements(&mut self, shapes: &[Shape]) -> String {
        format!("PDF: Rendering {} elements for PDF format", shapes.len())
    }

    fn save_to_file(&mut self, _shapes: &[Shape]) -> String {
        "PDF: Saving file as PDF format".to_string()
    }
}

/// Runs an export strategy against the canvas it was built with.
pub struct ExportCanvas<'c, S: ExportSteps> {
    canvas: Option<&'c Canvas>,
    steps: S,
}

impl<'c, S: ExportSteps> ExportCanvas<'c, S> {
    pub fn new(canvas: Option<&'c Canvas>, steps: S) -> Self {
        debug!(
            "event=exporter_create module=export status=ok format={} shapes={}",
            steps.format(),
            canvas.map_or(0, Canvas::len)
        );
        Self { canvas, steps }
    }

    pub fn format(&self) -> ExportFormat {
        self.steps.format()
    }

    /// Runs prepare, render and persist in that order.
    ///
    /// # Errors
    /// - Returns `ExportError::MissingCanvas` without running any step when
    ///   no canvas was supplied.
    pub fn export(&mut self) -> ExportResult<ExportReport> {
        let format = self.steps.format();
        let Some(canvas) = self.canvas else {
            error!("event=export_run module=export status=error format={format} reason=missing_canvas");
            return Err(ExportError::MissingCanvas { format });
        };

        let shapes = canvas.shapes();
        info!(
            "event=export_run module=export status=start format={format} shapes={}",
            shapes.len()
        );

        let steps = vec![
            ExportStepRecord {
                stage: ExportStage::Prepare,
                message: self.steps.prepare_canvas(shapes),
            },
            ExportStepRecord {
                stage: ExportStage::Render,
                message: self.steps.render_elements(shapes),
            },
            ExportStepRecord {
                stage: ExportStage::Persist,
                message: self.steps.save_to_file(shapes),
            },
        ];

        info!("event=export_run module=export status=ok format={format}");
        Ok(ExportReport {
            format,
            shape_count: shapes.len(),
            steps,
        })
    }
}
