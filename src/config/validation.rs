//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{PortalError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_dashboard_config(&settings.dashboard)?;
    validate_export_config(&settings.export)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(PortalError::Config(
            "Server base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)
        .map_err(|e| PortalError::Config(format!("Invalid server base URL {}: {}", config.base_url, e)))?;
    if url.cannot_be_a_base() {
        return Err(PortalError::Config(
            format!("Server base URL cannot be used as a base: {}", config.base_url)
        ));
    }

    if config.timeout_seconds == Some(0) {
        return Err(PortalError::Config(
            "Request timeout must be greater than 0 when set".to_string()
        ));
    }

    Ok(())
}

/// Validate dashboard configuration
fn validate_dashboard_config(config: &super::DashboardConfig) -> Result<()> {
    if config.carousel_interval_ms == 0 {
        return Err(PortalError::Config(
            "Carousel interval must be greater than 0".to_string()
        ));
    }

    if config.announcement_height_px < 0.0 {
        return Err(PortalError::Config(
            "Announcement height cannot be negative".to_string()
        ));
    }

    Ok(())
}

/// Validate export configuration
fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.output_dir.is_empty() {
        return Err(PortalError::Config(
            "Export output directory is required".to_string()
        ));
    }

    if let Some(font) = &config.pdf_font_path {
        if !std::path::Path::new(font).is_file() {
            return Err(PortalError::Config(
                format!("PDF font file not found: {}", font)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PortalError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PortalError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.server.base_url = "not a url".to_string();
        assert!(matches!(validate_settings(&settings), Err(PortalError::Config(_))));

        settings.server.base_url = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout_and_interval() {
        let mut settings = Settings::default();
        settings.server.timeout_seconds = Some(0);
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.dashboard.carousel_interval_ms = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_missing_pdf_font() {
        let mut settings = Settings::default();
        settings.export.pdf_font_path = Some("/nonexistent/NotoSans.ttf".to_string());
        assert!(matches!(validate_settings(&settings), Err(PortalError::Config(_))));
    }
}
