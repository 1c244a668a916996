//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for requests, dashboard actions and exports.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{PortalError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer and must be held for the
/// lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| PortalError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;
    let stdout_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    let guard = match config.file_path.as_deref() {
        Some(dir) if !dir.is_empty() => {
            let file_appender = tracing_appender::rolling::daily(dir, "placement-portal.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
                .try_init()
                .map_err(|e| PortalError::Config(e.to_string()))?;
            Some(guard)
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .try_init()
                .map_err(|e| PortalError::Config(e.to_string()))?;
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a failed portal request
pub fn log_request_failure(url: &str, error: &PortalError) {
    error!(
        url = url,
        error = %error,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        "Fetch error"
    );
}

/// Log the result of a dashboard action
pub fn log_action(action: &str, success: bool, details: Option<&str>) {
    if success {
        info!(action = action, details = details, "Dashboard action completed");
    } else {
        warn!(action = action, details = details, "Dashboard action failed");
    }
}

/// Log a generated export file
pub fn log_export(format: &str, file_name: &str, rows: usize, columns: usize) {
    info!(
        format = format,
        file_name = file_name,
        rows = rows,
        columns = columns,
        "Export generated"
    );
}

/// Log a fragment assigned to a page container
pub fn log_render(container: &str, bytes: usize) {
    debug!(container = container, bytes = bytes, "Container re-rendered");
}
