//! Mock placement portal server for testing
//!
//! Wraps a wiremock server with helpers for the portal endpoints.

use serde_json::{json, Value};
use std::path::PathBuf;
use wiremock::{
    matchers::{any, method, path},
    Mock, MockServer, ResponseTemplate,
};
use placement_portal::config::{DashboardConfig, ExportConfig, LoggingConfig, Role, ServerConfig, Settings};
use placement_portal::render::StudentView;
use placement_portal::{Dashboard, PortalClient};

/// Mock portal server
pub struct PortalMockServer {
    pub server: MockServer,
}

impl PortalMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn settings(&self) -> Settings {
        Settings {
            server: ServerConfig {
                base_url: self.uri(),
                timeout_seconds: Some(5),
                user_agent: "placement-portal-tests".to_string(),
            },
            dashboard: dashboard_config(Role::Tpo, StudentView::Table),
            export: ExportConfig {
                output_dir: ".".to_string(),
                pdf_font_path: None,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                file_path: None,
            },
        }
    }

    pub fn client(&self) -> PortalClient {
        PortalClient::new(&self.settings().server).expect("Failed to build portal client")
    }

    pub fn dashboard(&self, role: Role, view: StudentView, export_dir: PathBuf) -> Dashboard {
        Dashboard::with_client(self.client(), dashboard_config(role, view), export_dir)
    }

    /// `GET {route}` answering `status` with a JSON body
    pub async fn mock_get(&self, route: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// `POST {route}` answering `status` with a JSON body
    pub async fn mock_post(&self, route: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// `POST {route}` redirects to a login page served as HTML
    pub async fn mock_login_redirect(&self, route: &str) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/login"))
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><form>Login</form></html>"))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any request reaches the server
    pub async fn expect_no_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Every listing endpoint answers with an empty array
    pub async fn mock_empty_listings(&self) {
        for route in LISTING_ROUTES {
            self.mock_get(route, 200, json!([])).await;
        }
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    pub async fn reset(&self) {
        self.server.reset().await;
    }
}

pub const LISTING_ROUTES: [&str; 9] = [
    "/student_events",
    "/prep_resources_student",
    "/all_resources",
    "/student_jobs",
    "/recruiter_jobs",
    "/tpo_jobs",
    "/recruiter_applicants",
    "/all_applications",
    "/all_student_profiles",
];

pub fn dashboard_config(role: Role, view: StudentView) -> DashboardConfig {
    DashboardConfig {
        role,
        student_view: view,
        announcements: vec![],
        announcement_height_px: 24.0,
        carousel_interval_ms: 3000,
    }
}
