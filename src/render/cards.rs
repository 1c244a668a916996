//! Student card and section builders

use crate::models::StudentProfile;
use crate::utils::helpers::{escape_html, NOT_PROVIDED};
use super::students::action_buttons;

/// Label/value row inside an info section
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: InfoValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InfoValue {
    /// Plain text, escaped on render; `None` renders the empty placeholder
    Text(Option<String>),
    /// Prebuilt markup inserted as-is
    Html(String),
}

impl InfoRow {
    pub fn text(label: &'static str, value: Option<String>) -> Self {
        Self { label, value: InfoValue::Text(value) }
    }

    pub fn html(label: &'static str, markup: String) -> Self {
        Self { label, value: InfoValue::Html(markup) }
    }
}

fn empty_data(text: &str) -> String {
    format!("<span class=\"empty-data\">{}</span>", text)
}

/// A titled `info-section` block
pub fn info_section(title: &str, rows: &[InfoRow]) -> String {
    let rows: String = rows
        .iter()
        .map(|row| {
            let value = match &row.value {
                InfoValue::Html(markup) => markup.clone(),
                InfoValue::Text(Some(text)) => escape_html(text),
                InfoValue::Text(None) => empty_data(NOT_PROVIDED),
            };
            format!(
                "<div class=\"info-row\"><div class=\"info-label\">{}</div><div class=\"info-value\">{}</div></div>",
                escape_html(row.label),
                value
            )
        })
        .collect();

    format!(
        "<div class=\"info-section\"><div class=\"section-title\">{}</div>{}</div>",
        escape_html(title),
        rows
    )
}

/// LinkedIn / GitHub links, each a link or a greyed-out label
pub fn social_links(linkedin_url: Option<&str>, github_url: Option<&str>) -> String {
    let link = |url: Option<&str>, label: &str| match url {
        Some(url) => format!("<a href=\"{}\" target=\"_blank\">{}</a>", escape_html(url), label),
        None => empty_data(label),
    };

    format!(
        "<div class=\"social-links\">{}{}</div>",
        link(linkedin_url, "LinkedIn"),
        link(github_url, "GitHub")
    )
}

fn percent(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| format!("{}%", v))
}

fn percent_with_year(value: &Option<String>, year: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| format!("{}% ({})", v, year.as_deref().unwrap_or_default()))
}

fn basic_section(student: &StudentProfile) -> String {
    info_section(
        "Basic Information",
        &[
            InfoRow::text("Roll No:", student.roll_no.clone()),
            InfoRow::text("Gender:", student.gender.clone()),
            InfoRow::text("DOB:", student.dob.clone()),
        ],
    )
}

fn contact_section(student: &StudentProfile) -> String {
    info_section(
        "Contact",
        &[
            InfoRow::text("Email:", student.email.clone()),
            InfoRow::text("Phone:", student.phone.clone()),
            InfoRow::html(
                "Social:",
                social_links(student.linkedin_url.as_deref(), student.github_url.as_deref()),
            ),
        ],
    )
}

fn academic_section(student: &StudentProfile) -> String {
    info_section(
        "Academic",
        &[
            InfoRow::text("10th:", percent_with_year(&student.tenth_percentage, &student.tenth_year)),
            InfoRow::text("12th:", percent_with_year(&student.twelfth_percentage, &student.twelfth_year)),
            InfoRow::text("Diploma:", percent(&student.diploma_percentage)),
        ],
    )
}

fn engineering_section(student: &StudentProfile) -> String {
    info_section(
        "Engineering",
        &[
            InfoRow::text("Department:", student.department.clone()),
            InfoRow::text("Passing Year:", student.engg_passing_year.clone()),
            InfoRow::text("Average:", percent(&student.average)),
            InfoRow::text(
                "Backlogs:",
                Some(student.live_backlogs.clone().unwrap_or_else(|| "0".to_string())),
            ),
        ],
    )
}

fn card_header(student: &StudentProfile) -> String {
    let edited_tag = if student.edited_by_student {
        "<span class=\"edited-tag\">✎ Edited</span>"
    } else {
        ""
    };

    format!(
        "<div class=\"student-card-header\">\
<div class=\"student-name\">{} {}</div>\
<div class=\"student-id\">PRN: {}</div>\
</div>",
        escape_html(&student.full_name()),
        edited_tag,
        escape_html(student.prn_no.as_deref().unwrap_or("N/A"))
    )
}

/// One student card for the card grid
pub fn student_card(student: &StudentProfile) -> String {
    let class = if student.edited_by_student {
        "student-card edited-card"
    } else {
        "student-card"
    };

    format!(
        "<div class=\"{}\">{}{}{}{}{}<div class=\"card-actions\">{}</div></div>",
        class,
        card_header(student),
        basic_section(student),
        contact_section(student),
        academic_section(student),
        engineering_section(student),
        action_buttons(student, "card-btn view", "card-btn resume", "card-btn delete", "Full View")
    )
}

/// Everything known about one student, for the "View" action
pub fn full_profile(student: &StudentProfile) -> String {
    let skills = info_section(
        "Skills & Achievements",
        &[
            InfoRow::text("Programming:", student.programming_languages.clone()),
            InfoRow::text("Projects:", student.academic_projects.clone()),
            InfoRow::text("Certificates:", student.certificates.clone()),
            InfoRow::text(
                "Resume:",
                Some(if student.has_resume() { "Uploaded" } else { "Not uploaded" }.to_string()),
            ),
        ],
    );

    format!(
        "<div class=\"student-profile-full\">{}{}{}{}{}{}</div>",
        card_header(student),
        basic_section(student),
        contact_section(student),
        academic_section(student),
        engineering_section(student),
        skills
    )
}

/// Detail pane content when the profile could not be loaded
pub fn profile_failure(message: &str) -> String {
    format!(
        "<div class=\"student-profile-full error\">Failed to load student profile: {}</div>",
        escape_html(message)
    )
}
