#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use taskman::api::envelope::{Envelope, Outcome};
    use taskman::api::router;
    use taskman::db::db::Db;
    use taskman::db::tasks::Tasks;
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct ApiFixture {
        _temp_dir: TempDir,
        app: Router,
    }

    impl ApiFixture {
        fn new() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::at(temp_dir.path().join("tasks.db"));
            db.start_database().unwrap();
            ApiFixture {
                app: router(Tasks::new(db)),
                _temp_dir: temp_dir,
            }
        }

        /// Router over a database file whose tasks table was never created.
        fn without_table() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::at(temp_dir.path().join("tasks.db"));
            ApiFixture {
                app: router(Tasks::new(db)),
                _temp_dir: temp_dir,
            }
        }

        async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let builder = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(body) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.app.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, value)
        }

        async fn create(&self, title: &str, due_date: &str) -> i64 {
            let (status, body) = self
                .send(
                    Method::POST,
                    "/tasks",
                    Some(json!({"title": title, "description": "", "due_date": due_date})),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
            body["result"].as_i64().unwrap()
        }
    }

    #[tokio::test]
    async fn test_create_task_returns_id() {
        let api = ApiFixture::new();

        let (status, body) = api
            .send(
                Method::POST,
                "/tasks",
                Some(json!({"title": "Buy milk", "description": "2 liters", "due_date": "2024-06-01"})),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "result": 1}));
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let api = ApiFixture::new();
        api.create("First", "2024-06-01").await;
        api.create("Second", "2024-06-02").await;

        let (status, body) = api.send(Method::GET, "/tasks", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(
            body["result"],
            json!([
                {"id": 1, "title": "First", "description": "", "due_date": "2024-06-01", "done": false},
                {"id": 2, "title": "Second", "description": "", "due_date": "2024-06-02", "done": false}
            ])
        );
    }

    #[tokio::test]
    async fn test_list_empty() {
        let api = ApiFixture::new();

        let (_, body) = api.send(Method::GET, "/tasks", None).await;
        assert_eq!(body, json!({"success": true, "result": []}));
    }

    #[tokio::test]
    async fn test_complete_task() {
        let api = ApiFixture::new();
        let id = api.create("Task", "2024-06-01").await;

        let (status, body) = api.send(Method::PUT, &format!("/tasks/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "result": 1}));

        let (_, list) = api.send(Method::GET, "/tasks", None).await;
        assert_eq!(list["result"][0]["done"], json!(true));
    }

    #[tokio::test]
    async fn test_complete_unknown_task_reports_zero() {
        let api = ApiFixture::new();

        let (status, body) = api.send(Method::PUT, "/tasks/99", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "result": 0}));
    }

    #[tokio::test]
    async fn test_delete_task() {
        let api = ApiFixture::new();
        let id = api.create("Task", "2024-06-01").await;

        let (_, body) = api.send(Method::DELETE, &format!("/tasks/{}", id), None).await;
        assert_eq!(body, json!({"success": true, "result": 1}));

        let (_, again) = api.send(Method::DELETE, &format!("/tasks/{}", id), None).await;
        assert_eq!(again, json!({"success": true, "result": 0}));

        let (_, list) = api.send(Method::GET, "/tasks", None).await;
        assert_eq!(list["result"], json!([]));
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported_in_envelope() {
        let api = ApiFixture::without_table();

        let (status, body) = api.send(Method::GET, "/tasks", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(false));
        let message = body["result"].as_str().unwrap();
        assert!(message.starts_with("The following sqlite error occurred while performing a select operation: "));
    }

    #[tokio::test]
    async fn test_invalid_due_date_is_rejected() {
        let api = ApiFixture::new();

        let (status, _) = api
            .send(
                Method::POST,
                "/tasks",
                Some(json!({"title": "Task", "description": "", "due_date": "31/12/2000"})),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, list) = api.send(Method::GET, "/tasks", None).await;
        assert_eq!(list["result"], json!([]));
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected() {
        let api = ApiFixture::new();

        let (status, _) = api
            .send(Method::POST, "/tasks", Some(json!({"title": "Task", "description": ""})))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let api = ApiFixture::new();

        let (status, _) = api.send(Method::PUT, "/tasks/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let api = ApiFixture::new();

        let (status, _) = api.send(Method::PATCH, "/tasks/1", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_envelope_serialization() {
        let ok = serde_json::to_value(Envelope::ok(7_i64)).unwrap();
        assert_eq!(ok, json!({"success": true, "result": 7}));

        let err = serde_json::to_value(Envelope::<i64>::err("boom")).unwrap();
        assert_eq!(err, json!({"success": false, "result": "boom"}));
    }

    #[test]
    fn test_envelope_into_result() {
        let ok: Envelope<usize> = serde_json::from_value(json!({"success": true, "result": 1})).unwrap();
        assert_eq!(ok.into_result(), Ok(1));

        let failed: Envelope<usize> = serde_json::from_value(json!({"success": false, "result": "disk full"})).unwrap();
        assert_eq!(failed.result, Outcome::Error("disk full".to_string()));
        assert_eq!(failed.into_result(), Err("disk full".to_string()));

        let inconsistent = Envelope {
            success: false,
            result: Outcome::Value(3_usize),
        };
        assert!(inconsistent.into_result().is_err());
    }

    #[test]
    fn test_envelope_from_result() {
        let envelope: Envelope<i64> = Envelope::from(Err::<i64, _>("no such table: tasks"));
        assert!(!envelope.success);
        assert_eq!(envelope.result, Outcome::Error("no such table: tasks".to_string()));
    }
}
