//! Column selection modal
//!
//! Tracks the export format picked when the modal was opened and the set of
//! checked columns until the user confirms or closes it.

use std::collections::BTreeSet;
use tracing::debug;
use super::columns::Column;
use super::table::ExportFormat;
use crate::utils::errors::{ExportError, ExportResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Selecting {
        format: ExportFormat,
        checked: BTreeSet<Column>,
    },
    Exporting {
        format: ExportFormat,
        columns: Vec<Column>,
    },
}

/// A confirmed selection, columns in modal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Default)]
pub struct ColumnModal {
    state: ModalState,
}

impl ColumnModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Selecting { .. })
    }

    /// Open for `format` with the default columns checked
    pub fn open(&mut self, format: ExportFormat) {
        debug!(format = %format, "Opening column modal");
        self.state = ModalState::Selecting {
            format,
            checked: Column::DEFAULT.into_iter().collect(),
        };
    }

    /// Flip one checkbox; returns whether it is now checked
    pub fn toggle(&mut self, column: Column) -> ExportResult<bool> {
        let checked = self.checked_mut()?;
        if checked.remove(&column) {
            Ok(false)
        } else {
            checked.insert(column);
            Ok(true)
        }
    }

    pub fn select_all(&mut self) -> ExportResult<()> {
        self.checked_mut()?.extend(Column::ALL);
        Ok(())
    }

    pub fn deselect_all(&mut self) -> ExportResult<()> {
        self.checked_mut()?.clear();
        Ok(())
    }

    /// Checked columns in modal order; empty unless selecting
    pub fn checked(&self) -> Vec<Column> {
        match &self.state {
            ModalState::Selecting { checked, .. } => Column::ALL
                .into_iter()
                .filter(|c| checked.contains(c))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Capture the selection and move to exporting.
    ///
    /// With nothing checked the modal stays open and no request is made.
    pub fn confirm(&mut self) -> ExportResult<ExportRequest> {
        let format = match &self.state {
            ModalState::Selecting { format, .. } => *format,
            _ => return Err(ExportError::ModalClosed),
        };
        let columns = self.checked();
        if columns.is_empty() {
            return Err(ExportError::NoColumnsSelected);
        }

        self.state = ModalState::Exporting {
            format,
            columns: columns.clone(),
        };
        Ok(ExportRequest { format, columns })
    }

    /// Export done or failed; back to closed
    pub fn finish(&mut self) {
        self.state = ModalState::Closed;
    }

    fn checked_mut(&mut self) -> ExportResult<&mut BTreeSet<Column>> {
        match &mut self.state {
            ModalState::Selecting { checked, .. } => Ok(checked),
            _ => Err(ExportError::ModalClosed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_open_prechecks_defaults() {
        let mut modal = ColumnModal::new();
        modal.open(ExportFormat::Excel);
        assert_eq!(
            modal.checked(),
            vec![
                Column::StudentId,
                Column::FirstName,
                Column::LastName,
                Column::Email,
                Column::Department,
                Column::Average,
            ]
        );
    }

    #[test]
    fn test_confirm_with_nothing_checked_stays_open() {
        let mut modal = ColumnModal::new();
        modal.open(ExportFormat::Pdf);
        modal.deselect_all().unwrap();

        assert_matches!(modal.confirm(), Err(ExportError::NoColumnsSelected));
        assert!(modal.is_open());
    }

    #[test]
    fn test_confirm_keeps_modal_order() {
        let mut modal = ColumnModal::new();
        modal.open(ExportFormat::Pdf);
        modal.deselect_all().unwrap();
        modal.toggle(Column::ResumePath).unwrap();
        modal.toggle(Column::Gender).unwrap();

        let request = modal.confirm().unwrap();
        assert_eq!(request.format, ExportFormat::Pdf);
        assert_eq!(request.columns, vec![Column::Gender, Column::ResumePath]);
        assert_matches!(modal.state(), ModalState::Exporting { .. });

        modal.finish();
        assert_eq!(modal.state(), &ModalState::Closed);
    }

    #[test]
    fn test_edits_require_open_modal() {
        let mut modal = ColumnModal::new();
        assert_matches!(modal.toggle(Column::Email), Err(ExportError::ModalClosed));
        assert_matches!(modal.confirm(), Err(ExportError::ModalClosed));

        modal.open(ExportFormat::Excel);
        modal.select_all().unwrap();
        assert_eq!(modal.checked().len(), Column::ALL.len());
        modal.close();
        assert!(!modal.is_open());
    }
}
