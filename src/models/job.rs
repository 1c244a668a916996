//! Job posting model

use serde::{Deserialize, Serialize};
use super::fields;

/// A job posting. The eligibility flags are only sent by `/student_jobs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "fields::opt_id")]
    pub job_id: Option<i64>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub eligibility: Option<String>,
    #[serde(default, deserialize_with = "fields::string_list")]
    pub target_branches: Vec<String>,
    #[serde(default)]
    pub can_apply: Option<bool>,
    #[serde(default)]
    pub branch_eligible: Option<bool>,
    #[serde(default)]
    pub cgpa_eligible: Option<bool>,
}

impl Job {
    /// Reason a student cannot apply, if the listing says so
    pub fn ineligibility_reason(&self) -> Option<&'static str> {
        match (self.can_apply, self.branch_eligible, self.cgpa_eligible) {
            (Some(false), Some(false), _) => Some("Your branch is not eligible"),
            (Some(false), _, Some(false)) => Some("CGPA below requirement"),
            (Some(false), _, _) => Some("Not eligible"),
            _ => None,
        }
    }
}
