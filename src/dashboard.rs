//! Dashboard wiring
//!
//! [`Dashboard`] owns the page, the loaded student roster and the export
//! modal. Loaders run concurrently and only borrow the client; their
//! fragments are assigned to the page once every request has settled.

use std::path::PathBuf;
use std::time::Duration;
use chrono::NaiveDate;
use tracing::{info, warn};
use crate::carousel::{Carousel, CarouselTicker};
use crate::config::{DashboardConfig, Role, Settings};
use crate::export::{self, ColumnModal, ExportArtifact, ExportBackend, ExportFormat};
use crate::handlers::actions::{self, ActionOutcome, Refresh, ResumeLink};
use crate::models::{
    Application, ApplicationStatus, Event, Job, JobApplication, JobPosting, Listing, NewEvent,
    NewResource, NewStudent, Resource, ResumeUpload, StudentProfile,
};
use crate::render::{self, StudentView};
use crate::services::PortalClient;
use crate::state::{Container, Page, Prompt, View};
use crate::utils::errors::{ExportResult, Result};

pub struct Dashboard {
    client: PortalClient,
    config: DashboardConfig,
    export_dir: PathBuf,
    page: Page,
    students: Vec<StudentProfile>,
    modal: ColumnModal,
    carousel: Option<CarouselTicker>,
}

impl Dashboard {
    /// Build a dashboard for the configured server and role
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = PortalClient::new(&settings.server)?;
        Ok(Self::with_client(client, settings.dashboard.clone(), PathBuf::from(&settings.export.output_dir)))
    }

    pub fn with_client(client: PortalClient, config: DashboardConfig, export_dir: PathBuf) -> Self {
        Self {
            client,
            config,
            export_dir,
            page: Page::new(),
            students: Vec::new(),
            modal: ColumnModal::new(),
            carousel: None,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn client(&self) -> &PortalClient {
        &self.client
    }

    pub fn role(&self) -> Role {
        self.config.role
    }

    /// Roster from the last student load, used for export
    pub fn students(&self) -> &[StudentProfile] {
        &self.students
    }

    pub fn modal(&self) -> &ColumnModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ColumnModal {
        &mut self.modal
    }

    pub fn carousel(&self) -> Option<&CarouselTicker> {
        self.carousel.as_ref()
    }

    /// Load every view and start the carousel
    pub async fn initialize(&mut self) {
        info!(role = ?self.config.role, view = ?self.config.student_view, "Initializing dashboard");
        self.refresh_all().await;
        self.start_carousel();
    }

    /// Reload every view concurrently
    pub async fn refresh_all(&mut self) {
        let role = self.config.role;
        let view = self.config.student_view;
        let (events, resources, jobs, applications, (students, roster)) = tokio::join!(
            load_events(&self.client),
            load_resources(&self.client, role),
            load_jobs(&self.client, role),
            load_applications(&self.client, role),
            load_students(&self.client, view),
        );

        self.page.set(Container::EventsList, events);
        self.page.set(Container::ResourceList, resources);
        self.page.set(Container::JobsList, jobs);
        self.page.set(Container::ApplicationsTable, applications);
        self.page.set(View::Students.container(view), students);
        self.students = roster;
    }

    /// Reload a single view
    pub async fn refresh(&mut self, view: View) {
        let role = self.config.role;
        let student_view = self.config.student_view;
        let fragment = match view {
            View::Events => load_events(&self.client).await,
            View::Resources => load_resources(&self.client, role).await,
            View::Jobs => load_jobs(&self.client, role).await,
            View::Applications => load_applications(&self.client, role).await,
            View::Students => {
                let (fragment, roster) = load_students(&self.client, student_view).await;
                self.students = roster;
                fragment
            }
        };
        self.page.set(view.container(student_view), fragment);
    }

    /// Perform the re-render an outcome asks for, then hand it back
    pub async fn apply(&mut self, outcome: ActionOutcome) -> ActionOutcome {
        match outcome.refresh() {
            Some(Refresh::All) => self.refresh_all().await,
            Some(Refresh::View(view)) => self.refresh(view).await,
            None => {}
        }
        outcome
    }

    /// Start rotating announcements when there are more than fit on screen
    pub fn start_carousel(&mut self) {
        if self.carousel.is_some() {
            warn!("Carousel is already running");
            return;
        }
        let count = self.config.announcements.len();
        if let Some(carousel) = Carousel::new(count, self.config.announcement_height_px) {
            let period = Duration::from_millis(self.config.carousel_interval_ms);
            self.carousel = Some(CarouselTicker::spawn(carousel, period));
        }
    }

    pub fn stop_carousel(&mut self) {
        self.carousel = None;
    }

    pub async fn upload_resume(&mut self, form: &ResumeUpload) -> ActionOutcome {
        let outcome = actions::upload_resume(&self.client, form).await;
        self.apply(outcome).await
    }

    pub async fn post_job(&mut self, form: &JobPosting) -> ActionOutcome {
        let outcome = actions::post_job(&self.client, form).await;
        self.apply(outcome).await
    }

    pub async fn add_student(&mut self, form: &NewStudent) -> ActionOutcome {
        let outcome = actions::add_student(&self.client, form).await;
        self.apply(outcome).await
    }

    pub async fn post_event(&mut self, form: &NewEvent) -> ActionOutcome {
        let outcome = actions::post_event(&self.client, form).await;
        self.apply(outcome).await
    }

    pub async fn post_resource(&mut self, form: &NewResource) -> ActionOutcome {
        let outcome = actions::post_resource(&self.client, form).await;
        self.apply(outcome).await
    }

    pub async fn update_status(&mut self, application_id: i64, status: ApplicationStatus) -> ActionOutcome {
        let outcome = actions::update_status(&self.client, application_id, status).await;
        self.apply(outcome).await
    }

    pub async fn apply_job(&mut self, form: &JobApplication) -> ActionOutcome {
        let outcome = actions::apply_job(&self.client, form).await;
        self.apply(outcome).await
    }

    pub async fn delete_student(&mut self, prompt: &dyn Prompt, student_id: i64) -> ActionOutcome {
        let outcome = actions::delete_student(&self.client, prompt, student_id).await;
        self.apply(outcome).await
    }

    pub async fn delete_resource(&mut self, prompt: &dyn Prompt, resource_id: i64) -> ActionOutcome {
        let outcome = actions::delete_resource(&self.client, prompt, resource_id).await;
        self.apply(outcome).await
    }

    pub async fn delete_job(&mut self, prompt: &dyn Prompt, job_id: i64) -> ActionOutcome {
        let outcome = actions::delete_job(&self.client, prompt, job_id).await;
        self.apply(outcome).await
    }

    pub async fn delete_resume(&mut self, prompt: &dyn Prompt) -> ActionOutcome {
        let outcome = actions::delete_resume(&self.client, prompt).await;
        self.apply(outcome).await
    }

    pub fn view_resume(&self, resume_path: Option<&str>) -> Result<ResumeLink> {
        actions::view_resume(&self.client, resume_path)
    }

    /// Fetch one profile and show it in the detail pane
    pub async fn view_full_profile(&mut self, student_id: i64) -> Result<()> {
        match actions::fetch_profile(&self.client, student_id).await {
            Ok(profile) => {
                self.page.set(Container::ProfileDetail, render::full_profile(&profile));
                Ok(())
            }
            Err(e) => {
                self.page.set(Container::ProfileDetail, render::profile_failure(&e.to_string()));
                Err(e)
            }
        }
    }

    /// Open the column modal for `format`
    pub fn open_export(&mut self, format: ExportFormat) {
        self.modal.open(format);
    }

    /// Confirm the modal and export the loaded roster.
    ///
    /// With no column checked the modal stays open and nothing is generated.
    /// Otherwise the modal closes whether or not the export succeeds.
    pub fn confirm_export(&mut self, backend: &dyn ExportBackend, date: NaiveDate) -> ExportResult<ExportArtifact> {
        let request = self.modal.confirm()?;
        let result = export::export_request(&request, &self.students, date, backend);
        self.modal.finish();
        result
    }

    /// Confirm the modal, export, and write the file into the output directory
    pub async fn confirm_export_to_disk(
        &mut self,
        backend: &dyn ExportBackend,
        date: NaiveDate,
    ) -> ExportResult<PathBuf> {
        let artifact = self.confirm_export(backend, date)?;
        artifact.save(&self.export_dir).await
    }
}

async fn load_events(client: &PortalClient) -> String {
    match client.get_json::<Listing<Event>>("/student_events").await {
        Ok(listing) => render::render_events(&listing),
        Err(_) => render::events::render_events_failure(),
    }
}

async fn load_resources(client: &PortalClient, role: Role) -> String {
    match client.get_json::<Listing<Resource>>(role.resources_path()).await {
        Ok(listing) => render::render_resources(&listing, role == Role::Tpo),
        Err(_) => render::resources::render_resources_failure(),
    }
}

async fn load_jobs(client: &PortalClient, role: Role) -> String {
    match client.get_json::<Listing<Job>>(role.jobs_path()).await {
        Ok(listing) => render::render_jobs(&listing, role),
        Err(_) => render::jobs::render_jobs_failure(),
    }
}

async fn load_applications(client: &PortalClient, role: Role) -> String {
    match client.get_json::<Listing<Application>>(role.applications_path()).await {
        Ok(listing) => render::render_applications(&listing, role),
        Err(e) => render::applications::render_applications_failure(&e.to_string()),
    }
}

/// Fragment for the selected view plus the roster kept for export
async fn load_students(client: &PortalClient, view: StudentView) -> (String, Vec<StudentProfile>) {
    match client.get_json::<Listing<StudentProfile>>("/all_student_profiles").await {
        Ok(listing) => {
            let fragment = render::render_students(&listing, view);
            (fragment, listing.into_records())
        }
        Err(e) => (render::students::render_students_failure(view, &e.to_string()), Vec::new()),
    }
}
