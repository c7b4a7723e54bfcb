use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

use super::Exporter;
use crate::core::{ExportError, Row};

// A4 portrait, sizes in millimeters.
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 14.0;
const LINE_HEIGHT: f64 = 8.0;
const TITLE_SIZE: f64 = 16.0;
const BODY_SIZE: f64 = 11.0;
const VALUE_COLUMN: f64 = 90.0;
const CATEGORY_COLUMN: f64 = 150.0;

/// Writes the visible rows as a single-page tabular PDF document: a title
/// line, a Name/Value/Category header, and one line per row in view order.
pub struct PdfExporter;

impl Exporter for PdfExporter {
    fn export(&self, rows: &[Row], path: &Path) -> Result<(), ExportError> {
        if rows.is_empty() {
            return Err(ExportError::Empty);
        }

        let (doc, page, layer) = PdfDocument::new(
            "Financial Data",
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "table",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Render(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Render(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut y = PAGE_HEIGHT - MARGIN;
        layer.use_text("Financial Data", TITLE_SIZE, Mm(MARGIN), Mm(y), &bold);
        y -= 2.0 * LINE_HEIGHT;

        layer.use_text("Name", BODY_SIZE, Mm(MARGIN), Mm(y), &bold);
        layer.use_text("Value", BODY_SIZE, Mm(VALUE_COLUMN), Mm(y), &bold);
        layer.use_text("Category", BODY_SIZE, Mm(CATEGORY_COLUMN), Mm(y), &bold);
        y -= LINE_HEIGHT;

        for row in rows {
            layer.use_text(row.name.as_str(), BODY_SIZE, Mm(MARGIN), Mm(y), &font);
            layer.use_text(
                format!("{:.2}", row.value),
                BODY_SIZE,
                Mm(VALUE_COLUMN),
                Mm(y),
                &font,
            );
            layer.use_text(
                row.category.to_string(),
                BODY_SIZE,
                Mm(CATEGORY_COLUMN),
                Mm(y),
                &font,
            );
            y -= LINE_HEIGHT;
        }

        let file = File::create(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| ExportError::Render(e.to_string()))?;

        debug!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}
