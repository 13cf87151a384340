//! Attachment endpoints
//!
//! - POST /exams/{id}/resources - Upload a file (multipart, field `file`)
//! - DELETE /resources/{id} - Remove a file
//! - GET /resources/{id} - Download a file

use super::{ApiClient, ApiError, FilePart, Method, Transport};
use crate::core::models::{ExamId, Resource, ResourceId};

/// Multipart field name the backend reads uploads from
pub const UPLOAD_FIELD: &str = "file";

/// Attachment operations of an [`ApiClient`]
pub struct AttachmentsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AttachmentsApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Upload a file for an exam
    pub async fn upload(&self, exam_id: ExamId, mut file: FilePart) -> Result<Resource, ApiError> {
        file.field = UPLOAD_FIELD.to_string();
        let path = format!("/exams/{}/resources", exam_id);
        let request = self.client.request(Method::Post, &path).multipart(file);
        self.client.fetch(request).await
    }

    pub async fn remove(&self, id: ResourceId) -> Result<(), ApiError> {
        let path = format!("/resources/{}", id);
        self.client
            .execute(self.client.request(Method::Delete, &path))
            .await
    }

    /// Download a file's content.
    ///
    /// Fetched through the client rather than linked so the bearer token is sent.
    pub async fn download(&self, id: ResourceId) -> Result<Vec<u8>, ApiError> {
        let path = format!("/resources/{}", id);
        self.client
            .fetch_bytes(self.client.request(Method::Get, &path))
            .await
    }
}
