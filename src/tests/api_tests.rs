#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt; // for .collect()
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::tests::support::{register_and_login, send_json, setup_app};

    #[tokio::test]
    async fn test_healthz_endpoint() {
        let (app, _state, _db) = setup_app().await;

        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readyz_endpoint() {
        let (app, _state, _db) = setup_app().await;

        let response = app
            .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_version_endpoint() {
        let (app, _state, _db) = setup_app().await;

        let (status, body) = send_json(&app, "GET", "/version", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "lesezeichen");
    }

    #[tokio::test]
    async fn test_metrics_count_operations() {
        let (app, _state, _db) = setup_app().await;
        let token = register_and_login(&app, "Ada", "ada@example.com").await;

        let (status, _) = send_json(
            &app,
            "POST",
            "/api/books",
            Some(&token),
            Some(json!({ "title": "Dune", "author": "Frank Herbert", "total_pages": 412 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send_json(&app, "GET", "/metrics", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["registrations"], 1);
        assert_eq!(body["logins"], 1);
        assert_eq!(body["books_created"], 1);
    }

    #[tokio::test]
    async fn test_prometheus_metrics_exposition() {
        let (app, _state, _db) = setup_app().await;

        let response = app
            .oneshot(Request::builder().uri("/metrics/prometheus").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("lesezeichen_registrations 0"));
        assert!(text.contains("lesezeichen_uptime_seconds"));
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let (app, _state, _db) = setup_app().await;

        let (status, body) = send_json(&app, "GET", "/api/books", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"]["code"].is_string());
        assert!(body["error"]["message"].is_string());
        assert_eq!(body["status"], 401);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_full_user_journey() {
        let (app, _state, _db) = setup_app().await;
        let token = register_and_login(&app, "Ada", "ada@example.com").await;

        let (status, book): (StatusCode, Value) = send_json(
            &app,
            "POST",
            "/api/books",
            Some(&token),
            Some(json!({ "title": "Dune", "author": "Frank Herbert", "total_pages": 412 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = book["id"].as_i64().unwrap();

        let (status, _) = send_json(
            &app,
            "PUT",
            &format!("/api/books/{}/progress", id),
            Some(&token),
            Some(json!({ "current_page": 412, "status": "Currently Reading" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, list) = send_json(&app, "GET", "/api/books", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["data"][0]["progress"]["status"], "Finished");
    }
}
