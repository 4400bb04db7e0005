//! Minimal tabular PDF rendering shared by the server-side reports and the
//! dashboard's client-side export.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 10.0;
const ROW_HEIGHT_MM: f32 = 7.0;

/// A fixed-column table rendered as an A4 PDF document.
#[derive(Debug, Clone)]
pub struct TableReport {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableReport {
    pub fn new(title: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Renders the table to PDF bytes, paginating when a page fills up.
    pub fn render(&self) -> Result<Vec<u8>, printpdf::Error> {
        let (doc, page, layer) = PdfDocument::new(
            &self.title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "table",
        );
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        let column_width = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / self.headers.len().max(1) as f32;

        let mut current = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

        current.use_text(&self.title, TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &bold);
        y -= 2.0 * ROW_HEIGHT_MM;

        write_row(&current, &self.headers, &bold, column_width, y);
        y -= ROW_HEIGHT_MM;

        for row in &self.rows {
            if y < MARGIN_MM + ROW_HEIGHT_MM {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
                current = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
                write_row(&current, &self.headers, &bold, column_width, y);
                y -= ROW_HEIGHT_MM;
            }

            write_row(&current, row, &font, column_width, y);
            y -= ROW_HEIGHT_MM;
        }

        save_document(doc)
    }
}

fn write_row(
    layer: &printpdf::PdfLayerReference,
    cells: &[String],
    font: &IndirectFontRef,
    column_width: f32,
    y: f32,
) {
    for (i, cell) in cells.iter().enumerate() {
        let x = MARGIN_MM + i as f32 * column_width;
        layer.use_text(cell, BODY_SIZE, Mm(x), Mm(y), font);
    }
}

fn save_document(doc: PdfDocumentReference) -> Result<Vec<u8>, printpdf::Error> {
    doc.save_to_bytes()
}
