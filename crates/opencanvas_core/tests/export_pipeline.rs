use opencanvas_core::{
    exporter_for, Canvas, ExportCanvas, ExportError, ExportFormat, ExportStage, ExportSteps,
    PdfExporter, PngExporter, Rectangle, Shape, Square, Textbox,
};

fn export_canvas_fixture() -> Canvas {
    let mut canvas = Canvas::new();
    canvas.push_shape(Rectangle::new(10, 20, "blue", 0, 0));
    canvas.push_shape(Square::new(15, "red", 5, 5));
    canvas.push_shape(Textbox::new(30, 10, "green", 10, 10, "Export this"));
    canvas
}

/// Records call order so the driver's sequencing can be observed.
#[derive(Default)]
struct RecordingSteps {
    calls: Vec<&'static str>,
}

impl ExportSteps for RecordingSteps {
    fn format(&self) -> ExportFormat {
        ExportFormat::Png
    }

    fn prepare_canvas(&mut self, _shapes: &[Shape]) -> String {
        self.calls.push("prepare");
        "prepared".to_string()
    }

    fn render_elements(&mut self, _shapes: &[Shape]) -> String {
        self.calls.push("render");
        "rendered".to_string()
    }

    fn save_to_file(&mut self, _shapes: &[Shape]) -> String {
        self.calls.push("persist");
        "persisted".to_string()
    }
}

#[test]
fn png_export_reports_labelled_steps() {
    let canvas = export_canvas_fixture();
    let report = ExportCanvas::new(Some(&canvas), PngExporter)
        .export()
        .unwrap();

    assert_eq!(report.format, ExportFormat::Png);
    assert_eq!(report.shape_count, 3);
    let messages: Vec<&str> = report.steps.iter().map(|s| s.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "PNG: Preparing canvas for PNG export",
            "PNG: Rendering 3 elements for PNG format",
            "PNG: Saving file as PNG format",
        ]
    );
}

#[test]
fn pdf_export_runs_stages_in_order() {
    let canvas = export_canvas_fixture();
    let report = ExportCanvas::new(Some(&canvas), PdfExporter)
        .export()
        .unwrap();

    let stages: Vec<ExportStage> = report.steps.iter().map(|s| s.stage).collect();
    assert_eq!(
        stages,
        vec![ExportStage::Prepare, ExportStage::Render, ExportStage::Persist]
    );
    assert!(report.steps[2].message.starts_with("PDF:"));
}

#[test]
fn custom_strategy_is_driven_in_fixed_order() {
    let canvas = export_canvas_fixture();
    let mut exporter = ExportCanvas::new(Some(&canvas), RecordingSteps::default());
    exporter.export().unwrap();
    exporter.export().unwrap();

    let mut steps = RecordingSteps::default();
    ExportCanvas::new(Some(&canvas), &mut steps).export().unwrap();
    assert_eq!(steps.calls, vec!["prepare", "render", "persist"]);
}

#[test]
fn missing_canvas_skips_every_step() {
    let mut steps = RecordingSteps::default();
    let err = ExportCanvas::new(None, &mut steps).export().unwrap_err();

    assert_eq!(
        err,
        ExportError::MissingCanvas {
            format: ExportFormat::Png
        }
    );
    assert!(steps.calls.is_empty());
}

#[test]
fn export_never_mutates_canvas() {
    let canvas = export_canvas_fixture();
    let before = canvas.shapes().to_vec();

    for format in [ExportFormat::Png, ExportFormat::Pdf] {
        ExportCanvas::new(Some(&canvas), exporter_for(format))
            .export()
            .unwrap();
    }

    assert_eq!(canvas.shapes(), before.as_slice());
}
