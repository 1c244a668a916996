//! Error handling for the placement portal client
//!
//! This module defines the error types used throughout the crate. Every
//! error is caught at the action or loader that triggered it and turned into
//! a user-facing message; nothing is retried.

use thiserror::Error;

/// Main error type for portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16, url: String },

    #[error("{0}")]
    Server(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Export flow specific errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Please select at least one column to export.")]
    NoColumnsSelected,

    #[error("No data available to export")]
    NoData,

    #[error("Export modal is not open")]
    ModalClosed,

    #[error("Unknown export column: {0}")]
    UnknownColumn(String),

    #[error("Error exporting to {format}: {message}")]
    Backend { format: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;

/// Result type alias for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;

impl PortalError {
    /// Check if retrying the triggering action by hand may succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            PortalError::Http(_) => true,
            PortalError::Status { status, .. } => *status >= 500,
            PortalError::Server(_) => true,
            PortalError::Serialization(_) => false,
            PortalError::Config(_) => false,
            PortalError::Io(_) => true,
            PortalError::UrlParse(_) => false,
            PortalError::InvalidInput(_) => false,
            PortalError::Export(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortalError::Config(_) => ErrorSeverity::Critical,
            PortalError::UrlParse(_) => ErrorSeverity::Critical,
            PortalError::InvalidInput(_) => ErrorSeverity::Info,
            PortalError::Export(ExportError::NoColumnsSelected) => ErrorSeverity::Info,
            PortalError::Export(ExportError::NoData) => ErrorSeverity::Warning,
            PortalError::Status { status, .. } if *status < 500 => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = PortalError::Status { status: 404, url: "/x".to_string() };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_export_messages() {
        assert_eq!(
            ExportError::NoColumnsSelected.to_string(),
            "Please select at least one column to export."
        );
        let backend = ExportError::Backend {
            format: "PDF".to_string(),
            message: "font missing".to_string(),
        };
        assert_eq!(backend.to_string(), "Error exporting to PDF: font missing");
    }
}
