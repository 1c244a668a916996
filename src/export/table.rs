//! Tabular export data

use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use super::columns::Column;
use crate::models::StudentProfile;
use crate::utils::errors::PortalError;
use crate::utils::helpers::truncate_text;

/// Longest cell text kept in documents
pub const DOCUMENT_CELL_LENGTH: usize = 20;

/// Spreadsheet sheet holding the export
pub const SHEET_NAME: &str = "Selected Student Data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    /// Name shown in messages, e.g. "Error exporting to Excel"
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }

    /// Download file name for an export made on `date`
    pub fn file_name(&self, date: NaiveDate) -> String {
        let date = date.format("%Y-%m-%d");
        match self {
            ExportFormat::Excel => format!("student_selected_data_{}.xlsx", date),
            ExportFormat::Pdf => format!("student_custom_data_{}.pdf", date),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(PortalError::InvalidInput(format!("Unknown export format: {}", other))),
        }
    }
}

/// Header row plus one row per student, restricted to the selected columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Spreadsheet layout: long labels, full cell values
    pub fn spreadsheet(students: &[StudentProfile], columns: &[Column]) -> Self {
        Self {
            headers: columns.iter().map(|c| c.spreadsheet_label().to_string()).collect(),
            rows: students
                .iter()
                .map(|s| columns.iter().map(|c| c.cell(s)).collect())
                .collect(),
        }
    }

    /// Document layout: short labels, cells truncated to fit the page
    pub fn document(students: &[StudentProfile], columns: &[Column]) -> Self {
        Self {
            headers: columns.iter().map(|c| c.document_label().to_string()).collect(),
            rows: students
                .iter()
                .map(|s| {
                    columns
                        .iter()
                        .map(|c| truncate_text(&c.cell(s), DOCUMENT_CELL_LENGTH))
                        .collect()
                })
                .collect(),
        }
    }

    pub fn for_format(format: ExportFormat, students: &[StudentProfile], columns: &[Column]) -> Self {
        match format {
            ExportFormat::Excel => Self::spreadsheet(students, columns),
            ExportFormat::Pdf => Self::document(students, columns),
        }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> StudentProfile {
        StudentProfile {
            student_id: Some(1),
            first_name: Some("Ravi".to_string()),
            academic_projects: Some("Distributed ledger for campus canteen payments".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_file_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(ExportFormat::Excel.file_name(date), "student_selected_data_2024-03-09.xlsx");
        assert_eq!(ExportFormat::Pdf.file_name(date), "student_custom_data_2024-03-09.pdf");
    }

    #[test]
    fn test_spreadsheet_keeps_full_values() {
        let table = ExportTable::spreadsheet(&[student()], &[Column::AcademicProjects, Column::StudentId]);
        assert_eq!(table.headers, vec!["Academic Projects", "Student ID"]);
        assert_eq!(table.rows[0][0], "Distributed ledger for campus canteen payments");
        assert_eq!(table.rows[0][1], "1");
    }

    #[test]
    fn test_document_truncates_cells() {
        let table = ExportTable::document(&[student()], &[Column::AcademicProjects, Column::ResumePath]);
        assert_eq!(table.headers, vec!["academic_projects", "Resume"]);
        assert!(table.rows[0][0].chars().count() <= DOCUMENT_CELL_LENGTH);
        assert_eq!(table.rows[0][1], "No");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("Excel".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("csv".parse::<ExportFormat>().is_err());
    }
}
