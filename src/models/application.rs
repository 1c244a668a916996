//! Job application model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use super::fields;
use crate::utils::errors::PortalError;

/// A job application as listed for recruiters and the TPO
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default, deserialize_with = "fields::opt_id")]
    pub application_id: Option<i64>,
    #[serde(default, deserialize_with = "fields::opt_id")]
    pub job_id: Option<i64>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_id")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub student_email: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub student_branch: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub student_cgpa: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub applied_date: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub status: Option<String>,
}

impl Application {
    /// Parsed status; `None` when missing or not one the portal knows
    pub fn status(&self) -> Option<ApplicationStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    /// Statuses offered as buttons: every known one except the current
    pub fn status_choices(&self) -> Vec<ApplicationStatus> {
        let current = self.status();
        ApplicationStatus::ALL
            .into_iter()
            .filter(|s| Some(*s) != current)
            .collect()
    }
}

/// Status values `/update_application` accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "shortlisted" => Ok(ApplicationStatus::Shortlisted),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(PortalError::InvalidInput(format!("Unknown application status: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("Shortlisted".parse::<ApplicationStatus>().unwrap(), ApplicationStatus::Shortlisted);
        assert!("hired".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_unknown_status_is_not_coerced() {
        let app = Application {
            status: Some("pending".to_string()),
            ..Default::default()
        };
        assert_eq!(app.status(), None);
        assert_eq!(app.status_choices(), ApplicationStatus::ALL.to_vec());
    }

    #[test]
    fn test_choices_exclude_only_current_status() {
        let accepted = Application {
            status: Some("accepted".to_string()),
            ..Default::default()
        };
        assert_eq!(
            accepted.status_choices(),
            vec![
                ApplicationStatus::Applied,
                ApplicationStatus::Shortlisted,
                ApplicationStatus::Rejected,
            ]
        );
    }
}
