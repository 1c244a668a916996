//! Page state module
//!
//! Headless stand-ins for the browser page: rendered containers and the
//! confirmation prompt.

pub mod page;
pub mod prompt;

pub use page::{Container, Page, View};
pub use prompt::{AlwaysConfirm, NeverConfirm, Prompt};
