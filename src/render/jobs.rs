//! Job openings list (`.jobs-list`)

use crate::config::Role;
use crate::models::{Job, Listing};
use crate::utils::helpers::{escape_html, format_event_date, format_value};
use super::error_item;

pub const EMPTY_JOBS: &str = "<li>No job openings available right now.</li>";
pub const JOBS_LOAD_FAILED: &str = "Failed to load jobs. Please try again.";

/// Render the job list for the given dashboard role.
///
/// Students get an apply button (or the reason they cannot apply), recruiters
/// a delete button, the TPO a read-only listing.
pub fn render_jobs(listing: &Listing<Job>, role: Role) -> String {
    match listing {
        Listing::Failed { error } => error_item(&format!("Error: {}", error)),
        Listing::Records(jobs) if jobs.is_empty() => EMPTY_JOBS.to_string(),
        Listing::Records(jobs) => jobs.iter().map(|job| job_item(job, role)).collect(),
    }
}

/// One `<li class="job-item">`
pub fn job_item(job: &Job, role: Role) -> String {
    let title = job.title.as_deref().unwrap_or("Untitled role");
    let company = job.company_name.as_deref().unwrap_or("Company");
    let deadline = job.deadline.as_deref().map(format_event_date);
    let branches = if job.target_branches.is_empty() {
        "all".to_string()
    } else {
        job.target_branches.join(", ")
    };

    let mut html = format!(
        "<li class=\"job-item\">\
<h4>{} <span class=\"company\">@ {}</span></h4>\
<p>{}</p>\
<p><strong>Location:</strong> {}</p>\
<p><strong>Salary:</strong> {}</p>\
<p><strong>Deadline:</strong> {}</p>\
<p><strong>Min CGPA:</strong> {}</p>\
<p><strong>Branches:</strong> {}</p>",
        escape_html(title),
        escape_html(company),
        escape_html(job.description.as_deref().unwrap_or("No description available.")),
        format_value(job.location.as_deref()),
        format_value(job.salary.as_deref()),
        format_value(deadline.as_deref()),
        format_value(job.eligibility.as_deref()),
        escape_html(&branches)
    );

    if let Some(id) = job.job_id {
        match role {
            Role::Student => match job.ineligibility_reason() {
                Some(reason) => html.push_str(&format!(
                    "<button class=\"apply-btn\" disabled title=\"{}\">Not Eligible</button>",
                    escape_html(reason)
                )),
                None => html.push_str(&format!(
                    "<button class=\"apply-btn\" data-action=\"apply-job\" data-id=\"{}\">Apply</button>",
                    id
                )),
            },
            Role::Recruiter => html.push_str(&format!(
                "<button class=\"delete-btn\" data-action=\"delete-job\" data-id=\"{}\">Delete</button>",
                id
            )),
            Role::Tpo => {}
        }
    }

    html.push_str("</li>");
    html
}

/// Fragment shown when the jobs request itself failed
pub fn render_jobs_failure() -> String {
    error_item(JOBS_LOAD_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64) -> Job {
        Job {
            job_id: Some(id),
            title: Some("Analyst".to_string()),
            company_name: Some("Initech".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_jobs() {
        assert_eq!(render_jobs(&Listing::Records(vec![]), Role::Student), EMPTY_JOBS);
    }

    #[test]
    fn test_student_apply_button() {
        let html = job_item(&job(4), Role::Student);
        assert!(html.contains("data-action=\"apply-job\" data-id=\"4\""));
        assert!(html.contains("<strong>Location:</strong> Not provided"));
        assert!(html.contains("<strong>Branches:</strong> all"));
    }

    #[test]
    fn test_ineligible_student_sees_reason() {
        let mut ineligible = job(4);
        ineligible.can_apply = Some(false);
        ineligible.branch_eligible = Some(false);
        let html = job_item(&ineligible, Role::Student);
        assert!(html.contains("disabled title=\"Your branch is not eligible\""));
        assert!(!html.contains("apply-job"));
    }

    #[test]
    fn test_role_specific_buttons() {
        assert!(job_item(&job(2), Role::Recruiter).contains("data-action=\"delete-job\""));
        let tpo = job_item(&job(2), Role::Tpo);
        assert!(!tpo.contains("data-action"));
    }
}
