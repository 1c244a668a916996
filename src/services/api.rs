//! Portal HTTP client
//!
//! A thin wrapper over `reqwest` for the placement portal endpoints. Every
//! call is a single attempt: transport failures and non-2xx statuses are
//! logged and returned as errors, successful bodies are decoded as JSON.

use std::time::Duration;
use reqwest::{Client, Method, StatusCode};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use crate::config::ServerConfig;
use crate::models::{FormData, FormValue, ServerMessage};
use crate::utils::errors::{PortalError, Result};
use crate::utils::helpers::encode_path_segment;
use crate::utils::logging::log_request_failure;

/// Request body variants the portal endpoints accept
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Sent as `multipart/form-data`, like a browser `FormData`
    Multipart(FormData),
    /// Sent as `application/x-www-form-urlencoded`
    UrlEncoded(Vec<(String, String)>),
}

/// One portal request: method, path relative to the base URL, and body
#[derive(Debug, Clone, PartialEq)]
pub struct PortalRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl PortalRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn with_form(mut self, form: FormData) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn with_urlencoded(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = RequestBody::UrlEncoded(pairs);
        self
    }
}

/// Stored files the portal serves for download
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Download {
    Resource,
    Resume,
}

impl Download {
    fn prefix(&self) -> &'static str {
        match self {
            Download::Resource => "download_resource",
            Download::Resume => "download_resume",
        }
    }
}

/// HTTP client bound to one portal server
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: Client,
    base_url: Url,
}

impl PortalClient {
    /// Create a new client from server settings
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(PortalError::Http)?;

        Ok(Self {
            client,
            base_url: normalize_base(&config.base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL, keeping any base path prefix
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Link to a stored file, e.g. `/download_resume/{file}`
    pub fn download_url(&self, kind: Download, file: &str) -> Result<Url> {
        self.url(&format!("{}/{}", kind.prefix(), encode_path_segment(file)))
    }

    /// Perform a request and decode the JSON body.
    ///
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: PortalRequest) -> Result<T> {
        let url = self.url(&request.path)?;
        let result = self.fetch_json_inner(&url, &request).await;
        if let Err(ref e) = result {
            log_request_failure(url.as_str(), e);
        }
        result
    }

    /// GET a collection or record endpoint
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.fetch_json(PortalRequest::get(path)).await
    }

    /// GET a single record.
    ///
    /// Unlike [`get_json`](Self::get_json), a failing status reports the
    /// server's `error` text when the body carries one.
    pub async fn get_record<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        let result = self.fetch_record_inner(&url, &PortalRequest::get(path)).await;
        if let Err(ref e) = result {
            log_request_failure(url.as_str(), e);
        }
        result
    }

    /// Perform a mutation and read the server's `{message, error}` reply.
    ///
    /// A failing status prefers the server's `error` text over the generic
    /// status message. A successful reply that is not JSON (the server
    /// redirects after some form posts) yields an empty message, unless the
    /// redirect ended on the login page.
    pub async fn fetch_message(&self, request: PortalRequest) -> Result<ServerMessage> {
        let url = self.url(&request.path)?;
        let result = self.fetch_message_inner(&url, &request).await;
        if let Err(ref e) = result {
            log_request_failure(url.as_str(), e);
        }
        result
    }

    async fn fetch_json_inner<T: DeserializeOwned>(&self, url: &Url, request: &PortalRequest) -> Result<T> {
        let response = self.send(url, request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_record_inner<T: DeserializeOwned>(&self, url: &Url, request: &PortalRequest) -> Result<T> {
        let response = self.send(url, request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(reply_error(status, url, &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_message_inner(&self, url: &Url, request: &PortalRequest) -> Result<ServerMessage> {
        let response = self.send(url, request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(reply_error(status, url, &bytes));
        }

        Ok(serde_json::from_slice::<ServerMessage>(&bytes).unwrap_or_default())
    }

    async fn send(&self, url: &Url, request: &PortalRequest) -> Result<reqwest::Response> {
        debug!(method = %request.method, url = %url, "Sending portal request");

        let builder = self.client.request(request.method.clone(), url.clone());
        let builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Multipart(form) => builder.multipart(to_multipart(form)?),
            RequestBody::UrlEncoded(pairs) => builder.form(pairs),
        };

        let response = builder.send().await?;
        if is_login_redirect(url, response.url()) {
            return Err(PortalError::Server(SESSION_EXPIRED.to_string()));
        }
        Ok(response)
    }
}

/// The server's `error` text, or the generic status error
fn reply_error(status: StatusCode, url: &Url, body: &[u8]) -> PortalError {
    match serde_json::from_slice::<ServerMessage>(body).ok().and_then(|r| r.error) {
        Some(error) => PortalError::Server(error),
        None => PortalError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        },
    }
}

/// Reported when the server bounced the request to its login page
pub const SESSION_EXPIRED: &str = "Session expired, please log in again";

/// Whether redirects turned a request into a visit to the login page
fn is_login_redirect(requested: &Url, landed: &Url) -> bool {
    landed != requested
        && landed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            == Some("login")
}

/// Ensure the base URL ends with `/` so joins append instead of replacing
fn normalize_base(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn to_multipart(form: &FormData) -> Result<Form> {
    let mut multipart = Form::new();
    for (name, value) in form.fields() {
        multipart = match value {
            FormValue::Text(text) => multipart.text(name.clone(), text.clone()),
            FormValue::File(upload) => {
                let mut part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
                if let Some(mime) = &upload.mime {
                    part = part.mime_str(mime)?;
                }
                multipart.part(name.clone(), part)
            }
        };
    }
    Ok(multipart)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PortalClient {
        let config = ServerConfig {
            base_url: base.to_string(),
            timeout_seconds: None,
            user_agent: "test".to_string(),
        };
        PortalClient::new(&config).unwrap()
    }

    #[test]
    fn test_url_joins_under_base_prefix() {
        let portal = client("http://portal.test/erp");
        assert_eq!(portal.url("/student_events").unwrap().as_str(), "http://portal.test/erp/student_events");

        let portal = client("http://portal.test");
        assert_eq!(portal.url("delete_student/4").unwrap().as_str(), "http://portal.test/delete_student/4");
    }

    #[test]
    fn test_download_url_encodes_file_name() {
        let portal = client("http://portal.test");
        let url = portal.download_url(Download::Resume, "7_cv final.pdf").unwrap();
        assert_eq!(url.as_str(), "http://portal.test/download_resume/7_cv%20final.pdf");
    }

    #[test]
    fn test_login_redirect_detection() {
        let requested = Url::parse("http://portal.test/add_student").unwrap();
        let login = Url::parse("http://portal.test/login?next=%2Fadd_student").unwrap();
        let dashboard = Url::parse("http://portal.test/tpo_dashboard").unwrap();
        assert!(is_login_redirect(&requested, &login));
        assert!(!is_login_redirect(&requested, &dashboard));
        assert!(!is_login_redirect(&login, &login));
    }

    #[test]
    fn test_request_builders() {
        let request = PortalRequest::post("/update_application")
            .with_urlencoded(vec![("application_id".to_string(), "5".to_string())]);
        assert_eq!(request.method, Method::POST);
        assert!(matches!(request.body, RequestBody::UrlEncoded(ref pairs) if pairs.len() == 1));
    }
}
