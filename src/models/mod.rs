//! Data models module
//!
//! Records exchanged with the placement portal server. Nothing here is
//! validated client-side; fields the server may omit are optional.

pub mod application;
pub mod event;
pub mod fields;
pub mod forms;
pub mod job;
pub mod resource;
pub mod student;

use serde::{Deserialize, Serialize};

// Re-export commonly used models
pub use application::{Application, ApplicationStatus};
pub use event::Event;
pub use forms::{FormData, FormValue, JobApplication, JobPosting, NewEvent, NewResource, NewStudent, ResumeUpload, Upload};
pub use job::Job;
pub use resource::Resource;
pub use student::StudentProfile;

/// Reply of the mutation endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload of a collection endpoint: either the records or an error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Records(Vec<T>),
    Failed { error: String },
}

impl<T> Listing<T> {
    pub fn records(&self) -> &[T] {
        match self {
            Listing::Records(records) => records,
            Listing::Failed { .. } => &[],
        }
    }

    pub fn into_records(self) -> Vec<T> {
        match self {
            Listing::Records(records) => records,
            Listing::Failed { .. } => Vec::new(),
        }
    }
}
