//! Student roster export
//!
//! The column modal collects a selection; [`export_students`] turns the
//! loaded roster into a spreadsheet or document through an [`ExportBackend`].

pub mod backend;
pub mod columns;
pub mod modal;
pub mod table;

use std::path::{Path, PathBuf};
use chrono::NaiveDate;
use tracing::{error, info};
use crate::models::StudentProfile;
use crate::utils::errors::{ExportError, ExportResult};
use crate::utils::logging::log_export;

pub use backend::{ExportBackend, XlsxPdfBackend};
pub use columns::Column;
pub use modal::{ColumnModal, ExportRequest, ModalState};
pub use table::{ExportFormat, ExportTable, SHEET_NAME};

/// A generated export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the file into `dir`, returning its path
    pub async fn save(&self, dir: &Path) -> ExportResult<PathBuf> {
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;
        info!(path = %path.display(), bytes = self.bytes.len(), "Export saved");
        Ok(path)
    }
}

/// Document title for an export made on `date`
pub fn document_title(date: NaiveDate) -> String {
    format!("Custom Student Data - {}", date.format("%Y-%m-%d"))
}

/// Export `students` restricted to `columns`, in that order.
///
/// An empty selection or an empty roster fails before the backend runs.
pub fn export_students(
    format: ExportFormat,
    students: &[StudentProfile],
    columns: &[Column],
    date: NaiveDate,
    backend: &dyn ExportBackend,
) -> ExportResult<ExportArtifact> {
    if columns.is_empty() {
        return Err(ExportError::NoColumnsSelected);
    }
    if students.is_empty() {
        return Err(ExportError::NoData);
    }

    let table = ExportTable::for_format(format, students, columns);
    let result = match format {
        ExportFormat::Excel => backend.spreadsheet(SHEET_NAME, &table),
        ExportFormat::Pdf => backend.document(&document_title(date), &table),
    };

    let bytes = result.map_err(|e| {
        error!(format = %format, error = %e, "Export failed");
        e
    })?;

    let file_name = format.file_name(date);
    log_export(format.label(), &file_name, table.rows.len(), table.width());
    Ok(ExportArtifact {
        format,
        file_name,
        bytes,
    })
}

/// Run a confirmed modal request against the roster
pub fn export_request(
    request: &ExportRequest,
    students: &[StudentProfile],
    date: NaiveDate,
    backend: &dyn ExportBackend,
) -> ExportResult<ExportArtifact> {
    export_students(request.format, students, &request.columns, date, backend)
}
