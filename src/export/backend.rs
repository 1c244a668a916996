//! File generation backends

use std::fs::File;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Rect, Rgb};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::warn;
use super::table::{ExportFormat, ExportTable};
use crate::config::ExportConfig;
use crate::utils::errors::{ExportError, ExportResult};

/// Turns an export table into file bytes
pub trait ExportBackend: Send + Sync {
    /// `.xlsx` workbook with one sheet
    fn spreadsheet(&self, sheet_name: &str, table: &ExportTable) -> ExportResult<Vec<u8>>;

    /// `.pdf` document with a title line above the table
    fn document(&self, title: &str, table: &ExportTable) -> ExportResult<Vec<u8>>;
}

/// Spreadsheets through `rust_xlsxwriter`, documents through `printpdf`.
///
/// Documents use the built-in Helvetica unless a TrueType font is set.
/// Helvetica only encodes Latin-1, so names in other scripts need one.
#[derive(Debug, Clone, Default)]
pub struct XlsxPdfBackend {
    pdf_font: Option<PathBuf>,
}

impl XlsxPdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed `path` into every generated PDF
    pub fn with_font(path: impl Into<PathBuf>) -> Self {
        Self { pdf_font: Some(path.into()) }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self { pdf_font: config.pdf_font_path.as_ref().map(PathBuf::from) }
    }

    pub fn pdf_font(&self) -> Option<&Path> {
        self.pdf_font.as_deref()
    }

    /// Regular and bold fonts for one document
    fn fonts(&self, doc: &PdfDocumentReference, title: &str, table: &ExportTable) -> ExportResult<(IndirectFontRef, IndirectFontRef)> {
        if let Some(path) = &self.pdf_font {
            let file = File::open(path)
                .map_err(|e| backend_error(ExportFormat::Pdf, format!("{}: {}", path.display(), e)))?;
            let font = doc.add_external_font(file).map_err(pdf_error)?;
            return Ok((font.clone(), font));
        }

        let texts = std::iter::once(title)
            .chain(table.headers.iter().map(String::as_str))
            .chain(table.rows.iter().flatten().map(String::as_str));
        let uncovered = texts.filter(|text| !builtin_font_covers(text)).count();
        if uncovered > 0 {
            warn!(
                cells = uncovered,
                "Built-in PDF font cannot render some characters; set export.pdf_font_path to a Unicode TrueType font"
            );
        }

        let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;
        Ok((font, bold))
    }
}

/// Whether every character fits the Latin-1 range Helvetica encodes
pub fn builtin_font_covers(text: &str) -> bool {
    text.chars().all(|c| u32::from(c) <= 0xFF)
}

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_X: f32 = 14.0;
const TITLE_Y: f32 = 15.0;
const TABLE_START_Y: f32 = 20.0;
const BOTTOM_MARGIN: f32 = 10.0;
const ROW_HEIGHT: f32 = 6.0;
const TITLE_SIZE: f32 = 14.0;
const CELL_SIZE: f32 = 8.0;

fn backend_error(format: ExportFormat, message: impl ToString) -> ExportError {
    ExportError::Backend {
        format: format.label().to_string(),
        message: message.to_string(),
    }
}

fn pdf_error(e: impl std::fmt::Debug) -> ExportError {
    backend_error(ExportFormat::Pdf, format!("{:?}", e))
}

fn xlsx_error(e: XlsxError) -> ExportError {
    backend_error(ExportFormat::Excel, e)
}

impl ExportBackend for XlsxPdfBackend {
    fn spreadsheet(&self, sheet_name: &str, table: &ExportTable) -> ExportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name).map_err(xlsx_error)?;

        for (col, label) in table.headers.iter().enumerate() {
            let col = u16::try_from(col).map_err(|e| backend_error(ExportFormat::Excel, e))?;
            worksheet
                .write_string_with_format(0, col, label.as_str(), &header)
                .map_err(xlsx_error)?;
        }

        for (row, cells) in table.rows.iter().enumerate() {
            let row = u32::try_from(row + 1).map_err(|e| backend_error(ExportFormat::Excel, e))?;
            for (col, cell) in cells.iter().enumerate() {
                let col = u16::try_from(col).map_err(|e| backend_error(ExportFormat::Excel, e))?;
                worksheet.write_string(row, col, cell.as_str()).map_err(xlsx_error)?;
            }
        }

        workbook.save_to_buffer().map_err(xlsx_error)
    }

    fn document(&self, title: &str, table: &ExportTable) -> ExportResult<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let (font, bold) = self.fonts(&doc, title, table)?;

        let column_width = (PAGE_WIDTH - 2.0 * MARGIN_X) / table.width().max(1) as f32;
        let mut current = doc.get_page(page).get_layer(layer);
        current.use_text(title, TITLE_SIZE, Mm(MARGIN_X), Mm(PAGE_HEIGHT - TITLE_Y), &font);

        let mut top = PAGE_HEIGHT - TABLE_START_Y;
        draw_header(&current, &table.headers, column_width, top, &bold);
        top -= ROW_HEIGHT;

        for cells in &table.rows {
            if top - ROW_HEIGHT < BOTTOM_MARGIN {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                current = doc.get_page(page).get_layer(layer);
                top = PAGE_HEIGHT - BOTTOM_MARGIN;
                draw_header(&current, &table.headers, column_width, top, &bold);
                top -= ROW_HEIGHT;
            }
            draw_row(&current, cells, column_width, top, &font);
            top -= ROW_HEIGHT;
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}

/// Header band filled in the dashboard accent blue with white labels
fn draw_header(layer: &PdfLayerReference, headers: &[String], column_width: f32, top: f32, font: &IndirectFontRef) {
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 170.0 / 255.0, 1.0, None)));
    layer.add_rect(Rect::new(
        Mm(MARGIN_X),
        Mm(top - ROW_HEIGHT),
        Mm(PAGE_WIDTH - MARGIN_X),
        Mm(top),
    ));
    layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
    draw_row(layer, headers, column_width, top, font);
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
}

fn draw_row(layer: &PdfLayerReference, cells: &[String], column_width: f32, top: f32, font: &IndirectFontRef) {
    let baseline = top - ROW_HEIGHT + 1.8;
    for (i, cell) in cells.iter().enumerate() {
        let x = MARGIN_X + 1.0 + i as f32 * column_width;
        layer.use_text(cell.as_str(), CELL_SIZE, Mm(x), Mm(baseline), font);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize) -> ExportTable {
        ExportTable {
            headers: vec!["ID".to_string(), "Email".to_string()],
            rows: (0..rows)
                .map(|i| vec![i.to_string(), format!("s{}@college.edu", i)])
                .collect(),
        }
    }

    #[test]
    fn test_spreadsheet_is_zip_container() {
        let bytes = XlsxPdfBackend::new().spreadsheet("Selected Student Data", &table(3)).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_document_spans_pages() {
        let bytes = XlsxPdfBackend::new().document("Custom Student Data - 2024-03-09", &table(120)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_invalid_sheet_name_is_backend_error() {
        let err = XlsxPdfBackend::new().spreadsheet("bad/name", &table(1)).unwrap_err();
        assert!(err.to_string().starts_with("Error exporting to Excel: "));
    }

    #[test]
    fn test_builtin_font_coverage() {
        assert!(builtin_font_covers("Ana Müller, São Paulo"));
        assert!(!builtin_font_covers("राहुल शर्मा"));
        assert!(!builtin_font_covers("王伟"));
    }

    #[test]
    fn test_uncovered_text_still_renders_with_builtin_font() {
        let mut t = table(1);
        t.rows[0][1] = "राहुल".to_string();
        let bytes = XlsxPdfBackend::new().document("Selected Student Data", &t).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_missing_font_is_backend_error() {
        let backend = XlsxPdfBackend::with_font("/nonexistent/NotoSans-Regular.ttf");
        let err = backend.document("Selected Student Data", &table(1)).unwrap_err();
        assert!(err.to_string().starts_with("Error exporting to PDF: "));
        assert!(err.to_string().contains("NotoSans-Regular.ttf"));
    }

    #[test]
    fn test_font_path_from_config() {
        let config = ExportConfig {
            output_dir: ".".to_string(),
            pdf_font_path: Some("fonts/NotoSans.ttf".to_string()),
        };
        let backend = XlsxPdfBackend::from_config(&config);
        assert_eq!(backend.pdf_font(), Some(Path::new("fonts/NotoSans.ttf")));
        assert_eq!(XlsxPdfBackend::new().pdf_font(), None);
    }
}
