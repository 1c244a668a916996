//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::render::StudentView;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Portal server connection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: String,
    /// Unset means no timeout, matching the browser's fetch
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

/// Which dashboard is hosted and how it is laid out
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    pub role: Role,
    pub student_view: StudentView,
    pub announcements: Vec<String>,
    pub announcement_height_px: f32,
    pub carousel_interval_ms: u64,
}

/// Export output
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: String,
    /// TrueType font embedded in PDF exports; the built-in Helvetica only
    /// covers Latin-1 text
    pub pdf_font_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
}

/// Portal user role owning the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
    Tpo,
}

impl Role {
    /// Job listing endpoint for this role
    pub fn jobs_path(&self) -> &'static str {
        match self {
            Role::Student => "/student_jobs",
            Role::Recruiter => "/recruiter_jobs",
            Role::Tpo => "/tpo_jobs",
        }
    }

    /// Application listing endpoint for this role
    pub fn applications_path(&self) -> &'static str {
        match self {
            Role::Recruiter => "/recruiter_applicants",
            Role::Student | Role::Tpo => "/all_applications",
        }
    }

    /// Resource listing endpoint for this role
    pub fn resources_path(&self) -> &'static str {
        match self {
            Role::Tpo => "/all_resources",
            Role::Student | Role::Recruiter => "/prep_resources_student",
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PORTAL").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PortalError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: "http://localhost:5000".to_string(),
                timeout_seconds: None,
                user_agent: "placement-portal/0.1".to_string(),
            },
            dashboard: DashboardConfig {
                role: Role::Tpo,
                student_view: StudentView::Table,
                announcements: vec![],
                announcement_height_px: 24.0,
                carousel_interval_ms: 3000,
            },
            export: ExportConfig {
                output_dir: ".".to_string(),
                pdf_font_path: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
