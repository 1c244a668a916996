//! Form payloads submitted by the dashboard actions

use serde::{Deserialize, Serialize};

/// A file picked for upload
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(Upload),
}

/// Ordered field set of a submitted form. Repeated names are allowed
/// (multi-select fields such as `target_branches`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    pub fn file(mut self, name: &str, upload: Upload) -> Self {
        self.fields.push((name.to_string(), FormValue::File(upload)));
        self
    }

    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    pub fn has_files(&self) -> bool {
        self.fields.iter().any(|(_, value)| matches!(value, FormValue::File(_)))
    }

    /// Text fields only, in order, for url-encoded submission
    pub fn text_pairs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| match value {
                FormValue::Text(text) => Some((name.as_str(), text.as_str())),
                FormValue::File(_) => None,
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

/// Recruiter job posting form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: String,
    pub deadline: String,
    /// Minimum CGPA
    pub eligibility: String,
    pub target_branches: Vec<String>,
}

impl JobPosting {
    pub fn to_form(&self) -> FormData {
        let form = FormData::new()
            .text("title", &self.title)
            .text("description", &self.description)
            .text("location", &self.location)
            .text("salary", &self.salary)
            .text("deadline", &self.deadline)
            .text("eligibility", &self.eligibility);
        self.target_branches
            .iter()
            .fold(form, |form, branch| form.text("target_branches", branch))
    }
}

/// TPO "add student" form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub password: String,
    pub cgpa: String,
    pub passing_year: String,
    pub branch: String,
    pub phone: String,
}

impl NewStudent {
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .text("name", &self.name)
            .text("email", &self.email)
            .text("password", &self.password)
            .text("cgpa", &self.cgpa)
            .text("passing_year", &self.passing_year)
            .text("branch", &self.branch)
            .text("phone", &self.phone)
    }
}

/// TPO event form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl NewEvent {
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .text("title", &self.title)
            .text("description", &self.description)
            .text("date", &self.date)
    }
}

/// TPO resource upload form
#[derive(Debug, Clone)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub file: Upload,
}

impl NewResource {
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .text("title", &self.title)
            .text("description", &self.description)
            .file("file", self.file.clone())
    }
}

/// Student resume upload form
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub resume: Upload,
}

impl ResumeUpload {
    pub fn to_form(&self) -> FormData {
        FormData::new().file("resume", self.resume.clone())
    }
}

/// Student job application form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobApplication {
    pub job_id: i64,
    pub experience_years: u32,
    pub commitment_hours: u32,
}

impl JobApplication {
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .text("job_id", self.job_id.to_string())
            .text("experience_years", self.experience_years.to_string())
            .text("commitment_hours", self.commitment_hours.to_string())
    }
}
