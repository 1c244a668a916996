//! Dashboard action handlers
//!
//! Each handler sends one request for a user action and reports an
//! [`ActionOutcome`] naming what has to be re-rendered. Failures carry the
//! message to show the user and leave the page untouched. Destructive
//! actions ask the [`Prompt`] first and send nothing when declined.

use tracing::debug;
use url::Url;
use crate::models::{
    ApplicationStatus, JobApplication, JobPosting, NewEvent, NewResource, NewStudent, ResumeUpload,
    StudentProfile,
};
use crate::services::{Download, PortalClient, PortalRequest};
use crate::state::{Prompt, View};
use crate::utils::errors::Result;
use crate::utils::logging::log_action;

pub const CONFIRM_DELETE_STUDENT: &str =
    "Are you sure you want to delete this student and all their profile data?";
pub const CONFIRM_DELETE_RESOURCE: &str = "Are you sure you want to delete this resource?";
pub const CONFIRM_DELETE_JOB: &str =
    "Are you sure you want to delete this job posting? All applications for it will be removed.";
pub const CONFIRM_DELETE_RESUME: &str = "Are you sure you want to delete your resume?";
pub const NO_RESUME: &str = "No resume available for this student.";

/// What the dashboard must re-render after a successful action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Every view, like a page reload
    All,
    View(View),
}

/// Result of a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed { message: String, refresh: Refresh },
    Failed { message: String },
    /// The user declined the confirmation; nothing was sent
    Cancelled,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed { .. })
    }

    /// Text to show the user, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ActionOutcome::Completed { message, .. } | ActionOutcome::Failed { message } => Some(message),
            ActionOutcome::Cancelled => None,
        }
    }

    pub fn refresh(&self) -> Option<Refresh> {
        match self {
            ActionOutcome::Completed { refresh, .. } => Some(*refresh),
            _ => None,
        }
    }
}

/// Where the success message comes from
#[derive(Debug, Clone, Copy)]
enum SuccessMessage {
    Fixed(&'static str),
    /// The server's `message`, or the fallback when it sent none
    Server(&'static str),
}

/// Send one mutation and turn the reply into an outcome
async fn submit(
    client: &PortalClient,
    action: &'static str,
    request: PortalRequest,
    success: SuccessMessage,
    refresh: Refresh,
) -> ActionOutcome {
    debug!(action = action, path = %request.path, "Submitting dashboard action");

    match client.fetch_message(request).await {
        Ok(reply) => {
            let message = match success {
                SuccessMessage::Fixed(text) => text.to_string(),
                SuccessMessage::Server(fallback) => reply.message.unwrap_or_else(|| fallback.to_string()),
            };
            log_action(action, true, Some(&message));
            ActionOutcome::Completed { message, refresh }
        }
        Err(e) => {
            let message = format!("Failed to {}: {}", action, e);
            log_action(action, false, Some(&message));
            ActionOutcome::Failed { message }
        }
    }
}

/// `POST /upload_resume`
pub async fn upload_resume(client: &PortalClient, form: &ResumeUpload) -> ActionOutcome {
    submit(
        client,
        "upload resume",
        PortalRequest::post("/upload_resume").with_form(form.to_form()),
        SuccessMessage::Fixed("Resume uploaded successfully!"),
        Refresh::All,
    )
    .await
}

/// `POST /post_job`
pub async fn post_job(client: &PortalClient, form: &JobPosting) -> ActionOutcome {
    submit(
        client,
        "post job",
        PortalRequest::post("/post_job").with_form(form.to_form()),
        SuccessMessage::Fixed("Job posted successfully!"),
        Refresh::All,
    )
    .await
}

/// `POST /add_student`
pub async fn add_student(client: &PortalClient, form: &NewStudent) -> ActionOutcome {
    submit(
        client,
        "add student",
        PortalRequest::post("/add_student").with_form(form.to_form()),
        SuccessMessage::Fixed("Student added successfully!"),
        Refresh::All,
    )
    .await
}

/// `POST /add_event`
pub async fn post_event(client: &PortalClient, form: &NewEvent) -> ActionOutcome {
    submit(
        client,
        "post event",
        PortalRequest::post("/add_event").with_form(form.to_form()),
        SuccessMessage::Fixed("Event posted successfully!"),
        Refresh::All,
    )
    .await
}

/// `POST /add_resource`
pub async fn post_resource(client: &PortalClient, form: &NewResource) -> ActionOutcome {
    submit(
        client,
        "upload resource",
        PortalRequest::post("/add_resource").with_form(form.to_form()),
        SuccessMessage::Fixed("Resource uploaded successfully!"),
        Refresh::All,
    )
    .await
}

/// `POST /update_application`, form-encoded `application_id` and `status`
pub async fn update_status(
    client: &PortalClient,
    application_id: i64,
    status: ApplicationStatus,
) -> ActionOutcome {
    let request = PortalRequest::post("/update_application").with_urlencoded(vec![
        ("application_id".to_string(), application_id.to_string()),
        ("status".to_string(), status.to_string()),
    ]);
    submit(
        client,
        "update status",
        request,
        SuccessMessage::Server("Application updated successfully!"),
        Refresh::All,
    )
    .await
}

/// `POST /apply_job`
pub async fn apply_job(client: &PortalClient, form: &JobApplication) -> ActionOutcome {
    submit(
        client,
        "apply for job",
        PortalRequest::post("/apply_job").with_form(form.to_form()),
        SuccessMessage::Server("Application submitted successfully!"),
        Refresh::View(View::Jobs),
    )
    .await
}

/// `POST /delete_student/{id}` after confirmation
pub async fn delete_student(client: &PortalClient, prompt: &dyn Prompt, student_id: i64) -> ActionOutcome {
    if !prompt.confirm(CONFIRM_DELETE_STUDENT) {
        return ActionOutcome::Cancelled;
    }
    submit(
        client,
        "delete student",
        PortalRequest::post(format!("/delete_student/{}", student_id)),
        SuccessMessage::Server("Student deleted successfully."),
        Refresh::View(View::Students),
    )
    .await
}

/// `POST /delete_resource/{id}` after confirmation
pub async fn delete_resource(client: &PortalClient, prompt: &dyn Prompt, resource_id: i64) -> ActionOutcome {
    if !prompt.confirm(CONFIRM_DELETE_RESOURCE) {
        return ActionOutcome::Cancelled;
    }
    submit(
        client,
        "delete resource",
        PortalRequest::post(format!("/delete_resource/{}", resource_id)),
        SuccessMessage::Server("Resource deleted successfully"),
        Refresh::All,
    )
    .await
}

/// `POST /delete_job/{id}` after confirmation
pub async fn delete_job(client: &PortalClient, prompt: &dyn Prompt, job_id: i64) -> ActionOutcome {
    if !prompt.confirm(CONFIRM_DELETE_JOB) {
        return ActionOutcome::Cancelled;
    }
    submit(
        client,
        "delete job",
        PortalRequest::post(format!("/delete_job/{}", job_id)),
        SuccessMessage::Server("Job deleted successfully"),
        Refresh::All,
    )
    .await
}

/// `POST /delete_resume` (the signed-in student's own resume) after confirmation
pub async fn delete_resume(client: &PortalClient, prompt: &dyn Prompt) -> ActionOutcome {
    if !prompt.confirm(CONFIRM_DELETE_RESUME) {
        return ActionOutcome::Cancelled;
    }
    submit(
        client,
        "delete resume",
        PortalRequest::post("/delete_resume"),
        SuccessMessage::Fixed("Resume deleted successfully!"),
        Refresh::All,
    )
    .await
}

/// Result of pressing a "Resume" button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeLink {
    /// Open this URL in a new tab
    Open(Url),
    /// Show this notice instead
    Unavailable(&'static str),
}

/// Resolve a stored resume path to its download link.
///
/// Empty paths and the literal strings `undefined`/`null` left behind by
/// templated buttons count as missing.
pub fn view_resume(client: &PortalClient, resume_path: Option<&str>) -> Result<ResumeLink> {
    match resume_path.map(str::trim) {
        Some(path) if !path.is_empty() && path != "undefined" && path != "null" => {
            Ok(ResumeLink::Open(client.download_url(Download::Resume, path)?))
        }
        _ => Ok(ResumeLink::Unavailable(NO_RESUME)),
    }
}

/// `GET /get_student_profile/{id}`
pub async fn fetch_profile(client: &PortalClient, student_id: i64) -> Result<StudentProfile> {
    client
        .get_record(&format!("/get_student_profile/{}", student_id))
        .await
}
