//! Services module
//!
//! Network access to the placement portal server.

pub mod api;

pub use api::{Download, PortalClient, PortalRequest, RequestBody, SESSION_EXPIRED};
