#[cfg(test)]
mod tests {
    use crate::core::api::mock::{MockTransport, client};
    use crate::core::api::{ApiClient, ApiError, Method, RequestBody};
    use crate::core::loader::LoadPhase;
    use crate::core::page::{Dialog, ExamPageState, ExamSnapshot, fetch_snapshot};
    use crate::core::{Exam, stats::ExamSummary};

    const EMPTY_LIST: &str = "[]";
    const ZERO_AVERAGE: &str = r#"{"average": 0}"#;
    const ZERO_ECTS: &str = r#"{"total_ects": 0}"#;

    /// Queue one full snapshot worth of responses
    fn queue_snapshot(transport: &MockTransport, list: &str, average: &str, total: &str) {
        transport
            .respond(200, list)
            .respond(200, average)
            .respond(200, total);
    }

    /// Run a pending reload the way the page's load service does
    async fn reload(page: &mut ExamPageState, api: &ApiClient<MockTransport>) -> bool {
        match page.begin_load() {
            Some(generation) => {
                let result = fetch_snapshot(api).await;
                page.finish_load(generation, result)
            }
            None => false,
        }
    }

    fn snapshot_paths(transport: &MockTransport) -> Vec<String> {
        let mut paths: Vec<_> = transport
            .requests()
            .iter()
            .filter(|r| r.method == Method::Get)
            .map(|r| r.path().to_string())
            .collect();
        paths.sort();
        paths
    }

    fn all_sources() -> Vec<String> {
        vec![
            "/exams/?only_passed=false".to_string(),
            "/exams/average".to_string(),
            "/exams/total_ects".to_string(),
        ]
    }

    #[tokio::test]
    async fn test_initial_load_with_no_exams() {
        let transport = MockTransport::new();
        queue_snapshot(&transport, EMPTY_LIST, ZERO_AVERAGE, ZERO_ECTS);
        let api = client(&transport);
        let mut page = ExamPageState::new();

        assert!(page.is_loading());
        assert!(reload(&mut page, &api).await);

        assert!(!page.is_loading());
        assert_eq!(page.data.value(), &ExamSnapshot::default());
        assert_eq!(
            ExamSummary::from_exams(&page.data.value().exams),
            ExamSummary::default()
        );
        assert_eq!(snapshot_paths(&transport), all_sources());
    }

    #[tokio::test]
    async fn test_delete_then_reload() {
        let transport = MockTransport::new();
        queue_snapshot(
            &transport,
            r#"[{"id": 5, "name": "Math", "ects": 5}]"#,
            r#"{"average": 0}"#,
            r#"{"total_ects": 5}"#,
        );
        let api = client(&transport);
        let mut page = ExamPageState::new();
        reload(&mut page, &api).await;
        transport.clear();

        let selected = page.data.value().exams[0].clone();
        page.open(Dialog::Delete(selected.clone()));

        // Submit: remote call, close, mark dirty
        let origin = page.dialog.origin();
        transport.respond(200, "");
        let result = api.exams().delete(selected.id.unwrap()).await;
        assert!(page.settle(origin, result).is_ok());

        let delete = transport.last_request();
        assert_eq!(delete.method, Method::Delete);
        assert_eq!(delete.path(), "/exams/5");
        assert_eq!(page.dialog, Dialog::Closed);
        assert!(page.data.is_dirty());

        transport.clear();
        queue_snapshot(&transport, EMPTY_LIST, ZERO_AVERAGE, ZERO_ECTS);
        assert!(reload(&mut page, &api).await);

        assert_eq!(snapshot_paths(&transport), all_sources());
        assert!(page.data.value().exams.is_empty());
        assert!(!page.data.is_dirty());
    }

    #[tokio::test]
    async fn test_every_mutation_leaves_data_dirty() {
        let transport = MockTransport::new();
        let api = client(&transport);
        let mut page = ExamPageState::new();
        queue_snapshot(&transport, EMPTY_LIST, ZERO_AVERAGE, ZERO_ECTS);
        reload(&mut page, &api).await;

        let exam = Exam::new("Math", 5).with_id(1);

        page.open(Dialog::Add);
        transport.respond(200, r#"{"id": 1, "name": "Math", "ects": 5}"#);
        api.exams().create(&Exam::new("Math", 5)).await.unwrap();
        page.committed();
        assert!(page.data.is_dirty());
        assert_eq!(page.dialog, Dialog::Closed);

        queue_snapshot(&transport, EMPTY_LIST, ZERO_AVERAGE, ZERO_ECTS);
        reload(&mut page, &api).await;

        page.open(Dialog::Edit(exam.clone()));
        transport.respond(200, r#"{"id": 1, "name": "Math", "ects": 6}"#);
        api.exams().update(&exam).await.unwrap();
        page.committed();
        assert!(page.data.is_dirty());
        assert!(page.dialog.selected().is_none());

        queue_snapshot(&transport, EMPTY_LIST, ZERO_AVERAGE, ZERO_ECTS);
        reload(&mut page, &api).await;

        page.open(Dialog::StateChange {
            exam: exam.clone(),
            passed: true,
        });
        transport.respond(200, r#"{"id": 1, "name": "Math", "ects": 5, "passed": true}"#);
        api.exams()
            .update(&exam.with_outcome(true, Some(1.3)))
            .await
            .unwrap();
        page.committed();
        assert!(page.data.is_dirty());

        match &transport.last_request().body {
            RequestBody::Json(body) => {
                assert_eq!(body["passed"], true);
                assert_eq!(body["grade"], 1.3);
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_dialog_open() {
        let transport = MockTransport::new();
        let api = client(&transport);
        let mut page = ExamPageState::new();
        queue_snapshot(&transport, EMPTY_LIST, ZERO_AVERAGE, ZERO_ECTS);
        reload(&mut page, &api).await;

        let exam = Exam::new("Math", 5).with_id(3);
        page.open(Dialog::Delete(exam.clone()));

        let origin = page.dialog.origin();
        transport.respond(404, r#"{"detail": "Exam not found"}"#);
        let result = api.exams().delete(3).await;
        let err = page.settle(origin, result).unwrap_err();

        assert_eq!(err.message(), "Exam not found");
        assert_eq!(page.dialog, Dialog::Delete(exam));
        assert!(!page.data.is_dirty());
    }

    #[tokio::test]
    async fn test_late_mutation_does_not_close_newer_dialog() {
        let transport = MockTransport::new();
        let api = client(&transport);
        let mut page = ExamPageState::new();
        queue_snapshot(&transport, EMPTY_LIST, ZERO_AVERAGE, ZERO_ECTS);
        reload(&mut page, &api).await;

        page.open(Dialog::Delete(Exam::new("Math", 5).with_id(5)));
        let origin = page.dialog.origin();
        transport.respond(200, "");
        let exams = api.exams();
        let pending = exams.delete(5);

        // User dismisses the dialog and edits another exam before the reply
        page.close();
        let other = Exam::new("Physics", 6).with_id(6);
        page.open(Dialog::Edit(other.clone()));

        let result = pending.await;
        assert!(page.settle(origin, result).is_ok());

        assert_eq!(page.dialog, Dialog::Edit(other));
        assert!(page.data.is_dirty());
        assert_eq!(transport.last_request().path(), "/exams/5");
    }

    #[tokio::test]
    async fn test_duplicate_reload_request_starts_one_fetch() {
        let transport = MockTransport::new();
        let api = client(&transport);
        let mut page = ExamPageState::new();

        let generation = page.begin_load().unwrap();
        assert!(page.begin_load().is_none());

        queue_snapshot(&transport, EMPTY_LIST, ZERO_AVERAGE, ZERO_ECTS);
        let result = fetch_snapshot(&api).await;
        assert!(page.finish_load(generation, result));
        assert_eq!(transport.requests().len(), 3);
        assert!(!page.data.is_dirty());
    }

    #[tokio::test]
    async fn test_failed_load_is_reported_and_retryable() {
        let transport = MockTransport::new();
        transport.respond(200, EMPTY_LIST).respond(500, "");
        let api = client(&transport);
        let mut page = ExamPageState::new();

        assert!(reload(&mut page, &api).await);
        assert_eq!(
            page.data.phase(),
            &LoadPhase::Failed("Request failed with status 500".to_string())
        );
        assert!(page.begin_load().is_none());

        page.refresh();
        queue_snapshot(&transport, EMPTY_LIST, ZERO_AVERAGE, ZERO_ECTS);
        assert!(reload(&mut page, &api).await);
        assert_eq!(page.data.phase(), &LoadPhase::Ready);
    }

    #[tokio::test]
    async fn test_superseded_reload_cannot_overwrite_newer_data() {
        let transport = MockTransport::new();
        let api = client(&transport);
        let mut page = ExamPageState::new();

        let first = page.begin_load().unwrap();
        page.refresh();
        let second = page.begin_load().unwrap();

        queue_snapshot(&transport, r#"[{"name": "New", "ects": 1}]"#, ZERO_AVERAGE, ZERO_ECTS);
        let fresh = fetch_snapshot(&api).await;
        queue_snapshot(&transport, r#"[{"name": "Old", "ects": 1}]"#, ZERO_AVERAGE, ZERO_ECTS);
        let stale = fetch_snapshot(&api).await;

        assert!(page.finish_load(second, fresh));
        assert!(!page.finish_load(first, stale));
        assert_eq!(page.data.value().exams[0].name, "New");
    }

    #[tokio::test]
    async fn test_network_failure_during_snapshot() {
        let transport = MockTransport::new();
        transport.fail(ApiError::Network("connection refused".to_string()));
        let api = client(&transport);

        let result = fetch_snapshot(&api).await;

        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
