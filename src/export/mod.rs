//! Document export for the currently visible rows.

pub mod pdf;

pub use pdf::PdfExporter;

use crate::core::{ExportError, Row};
use std::path::Path;

/// Default output file name for the exported table.
pub const DEFAULT_EXPORT_FILE: &str = "financial-data.pdf";

/// Document backend consuming the visible rows.
pub trait Exporter {
    fn export(&self, rows: &[Row], path: &Path) -> Result<(), ExportError>;
}
