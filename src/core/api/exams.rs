//! Exam endpoints
//!
//! - GET /exams/?only_passed={bool} - List exams
//! - GET /exams/{id} - Exam details
//! - POST /exams - Create exam
//! - PUT /exams - Update exam (id in body)
//! - DELETE /exams/{id} - Delete exam
//! - GET /exams/average - Average grade
//! - GET /exams/total_ects - Total ECTS

use super::{ApiClient, ApiError, Method, Transport};
use crate::core::models::{Exam, ExamAverage, ExamId, ExamTotalEcts};

/// Exam operations of an [`ApiClient`]
pub struct ExamsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ExamsApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self, only_passed: bool) -> Result<Vec<Exam>, ApiError> {
        let path = format!("/exams/?only_passed={}", only_passed);
        self.client
            .fetch(self.client.request(Method::Get, &path))
            .await
    }

    pub async fn details(&self, id: ExamId) -> Result<Exam, ApiError> {
        let path = format!("/exams/{}", id);
        self.client
            .fetch(self.client.request(Method::Get, &path))
            .await
    }

    pub async fn create(&self, exam: &Exam) -> Result<Exam, ApiError> {
        let request = self.client.request(Method::Post, "/exams").json(exam)?;
        self.client.fetch(request).await
    }

    pub async fn update(&self, exam: &Exam) -> Result<Exam, ApiError> {
        let request = self.client.request(Method::Put, "/exams").json(exam)?;
        self.client.fetch(request).await
    }

    pub async fn delete(&self, id: ExamId) -> Result<(), ApiError> {
        let path = format!("/exams/{}", id);
        self.client
            .execute(self.client.request(Method::Delete, &path))
            .await
    }

    /// Average grade as computed by the backend
    pub async fn average(&self) -> Result<f64, ApiError> {
        let average: ExamAverage = self
            .client
            .fetch(self.client.request(Method::Get, "/exams/average"))
            .await?;
        Ok(average.average)
    }

    /// Total ECTS as computed by the backend
    pub async fn total_ects(&self) -> Result<u32, ApiError> {
        let total: ExamTotalEcts = self
            .client
            .fetch(self.client.request(Method::Get, "/exams/total_ects"))
            .await?;
        Ok(total.total_ects)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::api::mock::{MockTransport, client};
    use crate::core::api::{Method, RequestBody};
    use crate::core::models::Exam;

    #[tokio::test]
    async fn test_list_sends_filter() {
        let transport = MockTransport::new();
        transport.respond(200, r#"[{"id": 1, "name": "Math", "ects": 5, "passed": true}]"#);
        let api = client(&transport);

        let exams = api.exams().list(true).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://localhost:8000/exams/?only_passed=true");
        assert_eq!(exams.len(), 1);
        assert!(exams[0].passed);
    }

    #[tokio::test]
    async fn test_details() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id": 7, "name": "Physics", "ects": 6}"#);
        let api = client(&transport);

        let exam = api.exams().details(7).await.unwrap();

        assert_eq!(transport.last_request().path(), "/exams/7");
        assert_eq!(exam.name, "Physics");
    }

    #[tokio::test]
    async fn test_create_posts_json() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id": 2, "name": "Math", "ects": 5}"#);
        let api = client(&transport);

        let created = api.exams().create(&Exam::new("Math", 5)).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path(), "/exams");
        match request.body {
            RequestBody::Json(body) => {
                assert_eq!(body["name"], "Math");
                assert!(body.get("id").is_none());
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
        assert_eq!(created.id, Some(2));
    }

    #[tokio::test]
    async fn test_update_puts_id_in_body() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id": 4, "name": "Math", "ects": 5, "passed": true}"#);
        let api = client(&transport);

        api.exams()
            .update(&Exam::new("Math", 5).with_id(4).passed())
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path(), "/exams");
        match request.body {
            RequestBody::Json(body) => assert_eq!(body["id"], 4),
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"ok": true}"#);
        let api = client(&transport);

        api.exams().delete(5).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.path(), "/exams/5");
        assert_eq!(request.body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn test_statistics_unwrap_payloads() {
        let transport = MockTransport::new();
        transport
            .respond(200, r#"{"average": 2.15}"#)
            .respond(200, r#"{"total_ects": 30}"#);
        let api = client(&transport);

        assert_eq!(api.exams().average().await.unwrap(), 2.15);
        assert_eq!(api.exams().total_ects().await.unwrap(), 30);

        let paths: Vec<_> = transport
            .requests()
            .iter()
            .map(|r| r.path().to_string())
            .collect();
        assert_eq!(paths, vec!["/exams/average", "/exams/total_ects"]);
    }
}
