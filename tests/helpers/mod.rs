//! Test helpers module
//!
//! Mock portal server and generated test data shared by the integration tests.

#![allow(dead_code)]

pub mod portal_mock;
pub mod test_data;

pub use portal_mock::*;
pub use test_data::*;
