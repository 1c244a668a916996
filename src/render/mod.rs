//! HTML fragment renderers
//!
//! Pure functions turning decoded portal payloads into the markup assigned to
//! dashboard containers. Nothing here performs I/O. Interactive elements
//! carry `data-action` attributes (plus `data-id` and friends) which the host
//! page maps back onto [`crate::dashboard::Dashboard`] actions.

pub mod applications;
pub mod cards;
pub mod events;
pub mod jobs;
pub mod resources;
pub mod students;

pub use applications::render_applications;
pub use cards::{full_profile, info_section, profile_failure, social_links, student_card, InfoRow};
pub use events::render_events;
pub use jobs::render_jobs;
pub use resources::render_resources;
pub use students::{render_students, StudentView};

use crate::utils::helpers::escape_html;

/// `<li class="error">...</li>` for a failed or error payload
pub(crate) fn error_item(message: &str) -> String {
    format!("<li class=\"error\">{}</li>", escape_html(message))
}

/// A full-width table row used for empty and error states
pub(crate) fn message_row(colspan: usize, message: &str, error: bool) -> String {
    let color = if error { " color: red;" } else { "" };
    format!(
        "<tr><td colspan=\"{}\" style=\"text-align: center; padding: 20px;{}\">{}</td></tr>",
        colspan,
        color,
        escape_html(message)
    )
}
