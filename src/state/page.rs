//! Headless page model
//!
//! The dashboard markup is reduced to the containers the renderers write
//! into. Each container holds the last fragment assigned to it, replacing
//! whatever was there before.

use std::collections::BTreeMap;
use std::fmt;
use crate::render::StudentView;
use crate::utils::logging::log_render;

/// Dashboard containers, named after the host markup's ids and classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Container {
    EventsList,
    ResourceList,
    JobsList,
    ApplicationsTable,
    StudentTable,
    StudentCards,
    ProfileDetail,
}

impl Container {
    /// CSS selector of the container in the host markup
    pub fn selector(&self) -> &'static str {
        match self {
            Container::EventsList => ".events-list",
            Container::ResourceList => ".resource-list",
            Container::JobsList => ".jobs-list",
            Container::ApplicationsTable => "#applicationsTableBody",
            Container::StudentTable => "#studentTableBody",
            Container::StudentCards => "#studentCardsContainer",
            Container::ProfileDetail => "#studentProfileDetail",
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// A re-renderable section of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Events,
    Resources,
    Jobs,
    Applications,
    Students,
}

impl View {
    /// Container the view renders into
    pub fn container(&self, student_view: StudentView) -> Container {
        match self {
            View::Events => Container::EventsList,
            View::Resources => Container::ResourceList,
            View::Jobs => Container::JobsList,
            View::Applications => Container::ApplicationsTable,
            View::Students => match student_view {
                StudentView::Table => Container::StudentTable,
                StudentView::Cards => Container::StudentCards,
            },
        }
    }
}

/// Current content of every container that has been rendered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    fragments: BTreeMap<Container, String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a container's content
    pub fn set(&mut self, container: Container, fragment: String) {
        log_render(container.selector(), fragment.len());
        self.fragments.insert(container, fragment);
    }

    pub fn get(&self, container: Container) -> Option<&str> {
        self.fragments.get(&container).map(String::as_str)
    }

    /// Rendered containers in a stable order
    pub fn iter(&self) -> impl Iterator<Item = (Container, &str)> {
        self.fragments.iter().map(|(c, f)| (*c, f.as_str()))
    }
}
