//! Preparation resource model

use serde::{Deserialize, Serialize};
use super::fields;

/// A downloadable preparation resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "fields::opt_id")]
    pub resource_id: Option<i64>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub created_by_name: Option<String>,
}
