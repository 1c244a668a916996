//! Student profile views
//!
//! One renderer for the student roster, parameterized by the view mode the
//! host page selects: a table body (`studentTableBody`) or a card grid
//! (`studentCardsContainer`).

use serde::{Deserialize, Serialize};
use crate::models::{Listing, StudentProfile};
use crate::utils::helpers::{escape_html, format_value};
use super::cards::student_card;
use super::message_row;

pub const STUDENT_TABLE_COLUMNS: usize = 11;
pub const NO_STUDENT_RECORDS: &str = "No student records found in database.";
pub const NO_STUDENT_PROFILES: &str = "No student profiles found.";
pub const STUDENT_PROFILES_LOAD_FAILED: &str = "Failed to load student profiles.";

/// How the student roster is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentView {
    #[default]
    Table,
    Cards,
}

/// Render the roster in the requested view
pub fn render_students(listing: &Listing<StudentProfile>, view: StudentView) -> String {
    let students = match listing {
        Listing::Failed { error } => return render_students_failure(view, error),
        Listing::Records(students) => students,
    };

    if students.is_empty() {
        return match view {
            StudentView::Table => message_row(STUDENT_TABLE_COLUMNS, NO_STUDENT_RECORDS, false),
            StudentView::Cards => placeholder(NO_STUDENT_PROFILES),
        };
    }

    match view {
        StudentView::Table => students.iter().map(student_row).collect(),
        StudentView::Cards => students.iter().map(student_card).collect(),
    }
}

/// Fragment shown when the roster request failed
pub fn render_students_failure(view: StudentView, message: &str) -> String {
    match view {
        StudentView::Table => message_row(
            STUDENT_TABLE_COLUMNS,
            &format!("Error loading student records: {}", message),
            true,
        ),
        StudentView::Cards => placeholder(STUDENT_PROFILES_LOAD_FAILED),
    }
}

/// One table row
pub fn student_row(student: &StudentProfile) -> String {
    let id = student.student_id.map(|id| id.to_string());
    let resume_icon = if student.has_resume() { "✅" } else { "❌" };

    format!(
        "<tr>\
<td>{}</td>\
<td>{} {}</td>\
<td>{}</td>\
<td>{}</td>\
<td>{}</td>\
<td>{}</td>\
<td>{}</td>\
<td>{}%</td>\
<td>{}</td>\
<td>{}</td>\
<td>{}</td>\
</tr>",
        format_value(id.as_deref()),
        format_value(student.first_name.as_deref()),
        format_value(student.last_name.as_deref()),
        format_value(student.roll_no.as_deref()),
        format_value(student.prn_no.as_deref()),
        format_value(student.email.as_deref()),
        format_value(student.phone.as_deref()),
        format_value(student.department.as_deref()),
        format_value(student.average.as_deref()),
        format_value(student.live_backlogs.as_deref()),
        resume_icon,
        action_buttons(student, "view-btn", "view-btn", "delete-btn", "View")
    )
}

/// View / Resume / Delete buttons shared by the table and the cards.
///
/// The Resume button always renders; with no resume on file its action
/// reports that instead of opening a link.
pub(crate) fn action_buttons(
    student: &StudentProfile,
    view_class: &str,
    resume_class: &str,
    delete_class: &str,
    view_label: &str,
) -> String {
    let id = student.student_id.map(|id| id.to_string()).unwrap_or_default();
    let resume = student.resume_path.as_deref().unwrap_or_default();

    format!(
        "<button class=\"{view_class}\" data-action=\"view-profile\" data-id=\"{id}\">{view_label}</button>\
<button class=\"{resume_class}\" data-action=\"view-resume\" data-resume=\"{resume}\">Resume</button>\
<button class=\"{delete_class}\" data-action=\"delete-student\" data-id=\"{id}\">Delete</button>",
        view_class = view_class,
        resume_class = resume_class,
        delete_class = delete_class,
        view_label = view_label,
        id = id,
        resume = escape_html(resume)
    )
}

fn placeholder(message: &str) -> String {
    format!("<div class=\"student-card-placeholder\">{}</div>", escape_html(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: i64, first: &str) -> StudentProfile {
        StudentProfile {
            student_id: Some(id),
            first_name: Some(first.to_string()),
            last_name: Some("Shah".to_string()),
            average: Some("72.4".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_table_and_cards() {
        let empty = Listing::Records(vec![]);
        let table = render_students(&empty, StudentView::Table);
        assert!(table.contains("colspan=\"11\""));
        assert!(table.contains(NO_STUDENT_RECORDS));

        let cards = render_students(&empty, StudentView::Cards);
        assert_eq!(cards, "<div class=\"student-card-placeholder\">No student profiles found.</div>");
    }

    #[test]
    fn test_missing_resume_row() {
        let html = student_row(&student(3, "Neha"));
        assert!(html.contains("<td>❌</td>"));
        assert!(html.contains("data-action=\"view-resume\" data-resume=\"\">Resume</button>"));
        assert!(html.contains("<td>72.4%</td>"));
        assert!(html.contains("<td>Not provided</td>"));
    }

    #[test]
    fn test_resume_present_row() {
        let mut s = student(3, "Neha");
        s.resume_path = Some("3_cv.pdf".to_string());
        let html = student_row(&s);
        assert!(html.contains("<td>✅</td>"));
        assert!(html.contains("data-resume=\"3_cv.pdf\""));
    }

    #[test]
    fn test_one_row_per_student_in_order() {
        let listing = Listing::Records(vec![student(1, "Ann"), student(2, "Bob")]);
        let html = render_students(&listing, StudentView::Table);
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.find("Ann").unwrap() < html.find("Bob").unwrap());

        let cards = render_students(&listing, StudentView::Cards);
        assert_eq!(cards.matches("class=\"student-card\"").count(), 2);
    }

    #[test]
    fn test_failure_per_view() {
        let table = render_students_failure(StudentView::Table, "HTTP error! status: 500");
        assert!(table.contains("Error loading student records: HTTP error! status: 500"));
        assert!(table.contains("color: red;"));
        assert!(render_students_failure(StudentView::Cards, "x").contains(STUDENT_PROFILES_LOAD_FAILED));
    }
}
