//! Shared helpers for the test modules: a tempfile-backed SQLite pool, a
//! fully wired router and small JSON request utilities.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt; // for .collect()
use serde_json::{json, Value};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::NamedTempFile;
use tower::ServiceExt;

use crate::config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};
use crate::routes;
use crate::state::AppState;

pub const TEST_JWT_SECRET: &str = "unit-test-secret-0123456789-0123456789";

pub fn test_config(db_url: String) -> AppConfig {
    AppConfig {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 8087 },
        database: DatabaseConfig { url: db_url },
        auth: AuthConfig { jwt_secret: TEST_JWT_SECRET.to_string(), token_ttl_hours: 2 },
        security: None,
    }
}

/// Fresh state over a temporary database. The `NamedTempFile` must be kept
/// alive for as long as the pool is used.
pub async fn setup_state() -> (AppState, NamedTempFile) {
    let temp_db = NamedTempFile::new().unwrap();
    let db_url = format!("sqlite:{}", temp_db.path().display());

    sqlx::Sqlite::create_database(&db_url).await.unwrap();

    let pool = SqlitePoolOptions::new().max_connections(1).connect(&db_url).await.unwrap();
    crate::db::init_db(&pool).await.unwrap();

    let state = AppState::new(pool, test_config(db_url));
    (state, temp_db)
}

pub async fn setup_app() -> (Router, AppState, NamedTempFile) {
    let (state, temp_db) = setup_state().await;
    let app = routes::router(state.clone());
    (app, state, temp_db)
}

/// Sends a JSON request (optionally authenticated) and returns status plus
/// the parsed body, `Value::Null` when the body is empty or not JSON.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or("")
}

pub async fn register_and_login(app: &Router, name: &str, email: &str) -> String {
    let (status, _) = send_json(
        app,
        "POST",
        "/api/register",
        None,
        Some(json!({ "name": name, "email": email, "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(
        app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "email": email, "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

/// Creates a book through the API and returns its id.
pub async fn create_book(
    app: &Router,
    token: &str,
    title: &str,
    author: &str,
    isbn: &str,
    total_pages: i64,
) -> i64 {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/books",
        Some(token),
        Some(json!({
            "title": title,
            "author": author,
            "isbn": isbn,
            "genre": "Fiction",
            "publication_year": 1990,
            "total_pages": total_pages,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create_book failed: {}", body);
    body["id"].as_i64().unwrap()
}

pub async fn set_progress(
    app: &Router,
    token: &str,
    book_id: i64,
    page: i64,
    status_str: &str,
) -> (StatusCode, Value) {
    send_json(
        app,
        "PUT",
        &format!("/api/books/{}/progress", book_id),
        Some(token),
        Some(json!({ "current_page": page, "status": status_str })),
    )
    .await
}

/// Rewrites a progress row's timestamp so year/month aggregation can be
/// tested against fixed periods.
pub async fn backdate_progress(state: &AppState, book_id: i64, timestamp: &str) {
    sqlx::query("UPDATE reading_progress SET last_updated = ?1 WHERE book_id = ?2")
        .bind(timestamp)
        .bind(book_id)
        .execute(&state.db)
        .await
        .unwrap();
}
