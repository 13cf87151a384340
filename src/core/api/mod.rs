//! Typed HTTP client for the exam backend
//!
//! This module provides:
//! - Request description and execution seams ([`Transport`])
//! - Exam CRUD and statistics calls ([`ExamsApi`])
//! - Attachment upload and removal ([`AttachmentsApi`])
//! - Registration and password-grant login ([`AuthApi`])
//!
//! Every call returns the decoded response body or the [`ApiError`] that
//! stopped it. Nothing is cached, retried or deduplicated.

mod attachments;
mod auth;
mod error;
mod exams;
pub mod transport;

use serde::de::DeserializeOwned;

use crate::core::config::ApiConfig;

pub use attachments::{AttachmentsApi, UPLOAD_FIELD};
pub use auth::AuthApi;
pub use error::{ApiError, STATUS_UNAUTHORIZED};
pub use exams::ExamsApi;
pub use transport::{
    ApiRequest, ApiResponse, FORM_CONTENT_TYPE, FilePart, JSON_CONTENT_TYPE, Method,
    PlatformTransport, RequestBody, Transport,
};

/// Backend client bound to a transport, a base URL and an optional token
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
    access_token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            transport,
            config,
            access_token: None,
        }
    }

    /// Attach (or clear) the bearer token sent with every request
    pub fn with_token(mut self, access_token: Option<String>) -> Self {
        self.access_token = access_token;
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn exams(&self) -> ExamsApi<'_, T> {
        ExamsApi::new(self)
    }

    pub fn attachments(&self) -> AttachmentsApi<'_, T> {
        AttachmentsApi::new(self)
    }

    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi::new(self)
    }

    /// Describe a request to `path`, authorized if a token is present
    pub(crate) fn request(&self, method: Method, path: &str) -> ApiRequest {
        let request = ApiRequest::new(method, self.config.url(path));
        match &self.access_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Send a request and decode its body on success
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        self.transport
            .send(request)
            .await?
            .error_for_status()?
            .decode()
    }

    /// Send a request and hand back the raw body on success
    pub(crate) async fn fetch_bytes(&self, request: ApiRequest) -> Result<Vec<u8>, ApiError> {
        let response = self.transport.send(request).await?.error_for_status()?;
        Ok(response.body)
    }

    /// Send a request whose response body carries nothing of interest
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.transport.send(request).await?.error_for_status()?;
        Ok(())
    }
}

impl ApiClient<PlatformTransport> {
    /// Client for the running target with the build's default config
    pub fn platform(config: ApiConfig) -> Self {
        Self::new(PlatformTransport::default(), config)
    }
}
