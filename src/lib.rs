//! Placement Portal dashboard client
//!
//! A headless client for the campus placement portal dashboards. It loads
//! events, resources, jobs, applications and student profiles from the
//! portal server, renders them as HTML fragments, maps user actions onto the
//! portal's CRUD endpoints, rotates announcements and exports the student
//! roster to spreadsheets and documents.

pub mod carousel;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod handlers;
pub mod models;
pub mod render;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ExportError, PortalError, Result};

// Re-export main components for easy access
pub use dashboard::Dashboard;
pub use handlers::{ActionOutcome, Refresh, ResumeLink};
pub use services::PortalClient;
pub use state::{Container, Page, Prompt, View};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
