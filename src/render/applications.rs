//! Applications table (`applicationsTableBody`)

use crate::config::Role;
use crate::models::{Application, Listing};
use crate::utils::helpers::{escape_html, format_event_date, format_value};
use super::message_row;

pub const APPLICATION_COLUMNS: usize = 8;
pub const NO_APPLICATIONS: &str = "No applications received yet.";

/// Render one row per application. Recruiters get status buttons.
pub fn render_applications(listing: &Listing<Application>, role: Role) -> String {
    match listing {
        Listing::Failed { error } => render_applications_failure(error),
        Listing::Records(apps) if apps.is_empty() => {
            message_row(APPLICATION_COLUMNS, NO_APPLICATIONS, false)
        }
        Listing::Records(apps) => apps.iter().map(|app| application_row(app, role)).collect(),
    }
}

pub fn application_row(app: &Application, role: Role) -> String {
    let status = app.status.as_deref().map(str::trim).unwrap_or_default().to_lowercase();
    let applied = app.applied_date.as_deref().map(format_event_date);

    let actions = match (role, app.application_id) {
        (Role::Recruiter, Some(id)) => app
            .status_choices()
            .iter()
            .map(|next| {
                format!(
                    "<button class=\"status-btn {status}\" data-action=\"update-status\" data-id=\"{id}\" data-status=\"{status}\">{label}</button>",
                    status = next.as_str(),
                    id = id,
                    label = capitalize(next.as_str())
                )
            })
            .collect::<String>(),
        _ => String::new(),
    };

    format!(
        "<tr>\
<td>{}</td>\
<td>{}</td>\
<td>{}</td>\
<td>{}</td>\
<td>{}</td>\
<td>{}</td>\
<td><span class=\"status-badge {}\">{}</span></td>\
<td>{}</td>\
</tr>",
        format_value(app.student_name.as_deref()),
        format_value(app.student_email.as_deref()),
        format_value(app.student_branch.as_deref()),
        format_value(app.student_cgpa.as_deref()),
        format_value(app.job_title.as_deref()),
        format_value(applied.as_deref()),
        escape_html(&status),
        escape_html(&capitalize(&status)),
        actions
    )
}

/// Row shown when the applications request failed
pub fn render_applications_failure(message: &str) -> String {
    message_row(
        APPLICATION_COLUMNS,
        &format!("Error loading applications: {}", message),
        true,
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
