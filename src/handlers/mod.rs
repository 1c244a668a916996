//! Dashboard action handlers module

pub mod actions;

pub use actions::{ActionOutcome, Refresh, ResumeLink};
