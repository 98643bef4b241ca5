//! Export format identifiers.

use crate::export::exporter::{ExportSteps, PdfExporter, PngExporter};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Output format produced by an export strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Png,
    Pdf,
}

/// Stable string id for PNG export.
pub const EXPORT_FORMAT_PNG: &str = "png";
/// Stable string id for PDF export.
pub const EXPORT_FORMAT_PDF: &str = "pdf";

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => EXPORT_FORMAT_PNG,
            Self::Pdf => EXPORT_FORMAT_PDF,
        }
    }

    /// Upper-case label used as step message prefix.
    pub fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Pdf => "PDF",
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an export format id. Accepts any ASCII case.
pub fn parse_export_format(value: &str) -> Result<ExportFormat, ExportFormatError> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(ExportFormatError::Empty);
    }

    match normalized.as_str() {
        EXPORT_FORMAT_PNG => Ok(ExportFormat::Png),
        EXPORT_FORMAT_PDF => Ok(ExportFormat::Pdf),
        _ => Err(ExportFormatError::Unsupported(value.trim().to_string())),
    }
}

/// Returns the built-in export strategy for `format`.
pub fn exporter_for(format: ExportFormat) -> Box<dyn ExportSteps> {
    match format {
        ExportFormat::Png => Box::new(PngExporter),
        ExportFormat::Pdf => Box::new(PdfExporter),
    }
}

/// Export format parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportFormatError {
    Empty,
    Unsupported(String),
}

impl Display for ExportFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "export format must not be empty"),
            Self::Unsupported(value) => {
                write!(f, "export format is unsupported: {value}; expected png|pdf")
            }
        }
    }
}

impl Error for ExportFormatError {}

#[cfg(test)]
mod tests {
    use super::{exporter_for, parse_export_format, ExportFormat, ExportFormatError};

    #[test]
    fn parses_known_formats_case_insensitively() {
        assert_eq!(parse_export_format("png").expect("png"), ExportFormat::Png);
        assert_eq!(parse_export_format(" PDF ").expect("pdf"), ExportFormat::Pdf);
    }

    #[test]
    fn rejects_unknown_format() {
        assert_eq!(
            parse_export_format("svg").expect_err("svg is not supported"),
            ExportFormatError::Unsupported("svg".to_string())
        );
        assert_eq!(
            parse_export_format("").expect_err("empty must fail"),
            ExportFormatError::Empty
        );
    }

    #[test]
    fn exporter_for_reports_requested_format() {
        assert_eq!(exporter_for(ExportFormat::Png).format(), ExportFormat::Png);
        assert_eq!(exporter_for(ExportFormat::Pdf).format(), ExportFormat::Pdf);
    }
}
