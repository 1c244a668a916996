//! Utility modules
//!
//! This module contains common utilities used throughout the crate,
//! including error handling, logging setup, and text helpers.

pub mod errors;
pub mod logging;
pub mod helpers;

pub use errors::{PortalError, ExportError, Result};
