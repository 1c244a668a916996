//! Placement event model

use serde::{Deserialize, Serialize};
use super::fields;

/// An upcoming placement event from `/student_events`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub created_by_name: Option<String>,
}
