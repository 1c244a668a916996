//! Preparation resources list (`.resource-list`)

use crate::models::{Listing, Resource};
use crate::utils::helpers::{encode_path_segment, escape_html};
use super::error_item;

pub const EMPTY_RESOURCES: &str = "<li>No resources available at the moment.</li>";
pub const RESOURCES_LOAD_FAILED: &str = "Failed to load resources. Please try again.";

/// Render the resources list. `manage` adds a delete button per resource (TPO view).
///
/// An error payload is treated like a failed load.
pub fn render_resources(listing: &Listing<Resource>, manage: bool) -> String {
    match listing {
        Listing::Failed { .. } => render_resources_failure(),
        Listing::Records(resources) if resources.is_empty() => EMPTY_RESOURCES.to_string(),
        Listing::Records(resources) => resources
            .iter()
            .map(|resource| resource_item(resource, manage))
            .collect(),
    }
}

/// One `<li class="resource-item">`
pub fn resource_item(resource: &Resource, manage: bool) -> String {
    let title = resource.title.as_deref().unwrap_or("No title");
    let description = resource.description.as_deref().unwrap_or("No description available");
    let href = format!(
        "/download_resource/{}",
        encode_path_segment(resource.file_path.as_deref().unwrap_or_default())
    );

    let delete = match (manage, resource.resource_id) {
        (true, Some(id)) => format!(
            "<button class=\"delete-btn\" data-action=\"delete-resource\" data-id=\"{}\">Delete</button>",
            id
        ),
        _ => String::new(),
    };

    format!(
        "<li class=\"resource-item\">\
<h4>{}</h4>\
<p>{}</p>\
<a href=\"{}\" target=\"_blank\">Download Resource</a>{}\
</li>",
        escape_html(title),
        escape_html(description),
        escape_html(&href),
        delete
    )
}

/// Fragment shown when the resources request itself failed
pub fn render_resources_failure() -> String {
    error_item(RESOURCES_LOAD_FAILED)
}
