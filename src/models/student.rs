//! Student profile model

use serde::{Deserialize, Serialize};
use super::fields;

/// A student profile as returned by `/all_student_profiles` and
/// `/get_student_profile/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default, deserialize_with = "fields::opt_id")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub roll_no: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub prn_no: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub engg_passing_year: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub average: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub live_backlogs: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub tenth_percentage: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub tenth_year: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub twelfth_percentage: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub twelfth_year: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub diploma_percentage: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub programming_languages: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub academic_projects: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub certificates: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_string")]
    pub resume_path: Option<String>,
    #[serde(default, deserialize_with = "fields::flag")]
    pub edited_by_student: bool,
}

impl StudentProfile {
    /// "First Last", skipping whichever half is missing
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether a resume file has been uploaded
    pub fn has_resume(&self) -> bool {
        self.resume_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserialization_mixed_types() {
        let json = r#"{
            "student_id": 12,
            "first_name": "Asha",
            "last_name": "Patil",
            "average": "81.25",
            "live_backlogs": 0,
            "resume_path": null,
            "edited_by_student": 1,
            "student_name": "ignored extra column"
        }"#;
        let profile: StudentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.student_id, Some(12));
        assert_eq!(profile.full_name(), "Asha Patil");
        assert_eq!(profile.average.as_deref(), Some("81.25"));
        assert_eq!(profile.live_backlogs.as_deref(), Some("0"));
        assert!(!profile.has_resume());
        assert!(profile.edited_by_student);
    }

    #[test]
    fn test_full_name_with_missing_half() {
        let profile = StudentProfile {
            last_name: Some("Kulkarni".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "Kulkarni");
    }
}
