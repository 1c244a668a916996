//! Upcoming events list (`.events-list`)

use crate::models::{Event, Listing};
use crate::utils::helpers::{escape_html, format_event_date};
use super::error_item;

pub const EMPTY_EVENTS: &str = "<li>No upcoming events scheduled.</li>";
pub const EVENTS_LOAD_FAILED: &str = "Failed to load events. Please try again.";

/// Render the events list
pub fn render_events(listing: &Listing<Event>) -> String {
    match listing {
        Listing::Failed { error } => error_item(&format!("Error: {}", error)),
        Listing::Records(events) if events.is_empty() => EMPTY_EVENTS.to_string(),
        Listing::Records(events) => events.iter().map(event_item).collect(),
    }
}

/// One `<li class="event-item">`
pub fn event_item(event: &Event) -> String {
    let title = event.title.as_deref().unwrap_or("Untitled event");
    let description = event.description.as_deref().unwrap_or("No description available.");
    let date = event.date.as_deref().map(format_event_date).unwrap_or_default();
    let posted_by = event.created_by_name.as_deref().unwrap_or("TPO");

    format!(
        "<li class=\"event-item\">\
<h4>{}</h4>\
<p>{}</p>\
<p><strong>Date:</strong> {}</p>\
<p><strong>Posted by:</strong> {}</p>\
</li>",
        escape_html(title),
        escape_html(description),
        escape_html(&date),
        escape_html(posted_by)
    )
}

/// Fragment shown when the events request itself failed
pub fn render_events_failure() -> String {
    error_item(EVENTS_LOAD_FAILED)
}
