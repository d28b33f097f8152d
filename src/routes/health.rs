use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Health check endpoint - lightweight, no auth
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness probe: checks DB connectivity with timeout protection
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let query = sqlx::query("SELECT 1").fetch_one(&state.db);
    match tokio::time::timeout(std::time::Duration::from_secs(5), query).await {
        Ok(Ok(_)) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();
    Json(snapshot)
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP lesezeichen_registrations Total user registrations\n# TYPE lesezeichen_registrations counter\nlesezeichen_registrations {}\n\
# HELP lesezeichen_logins Total successful logins\n# TYPE lesezeichen_logins counter\nlesezeichen_logins {}\n\
# HELP lesezeichen_books_created Books created\n# TYPE lesezeichen_books_created counter\nlesezeichen_books_created {}\n\
# HELP lesezeichen_books_deleted Books deleted\n# TYPE lesezeichen_books_deleted counter\nlesezeichen_books_deleted {}\n\
# HELP lesezeichen_progress_updates Progress updates\n# TYPE lesezeichen_progress_updates counter\nlesezeichen_progress_updates {}\n\
# HELP lesezeichen_reviews_added Reviews added\n# TYPE lesezeichen_reviews_added counter\nlesezeichen_reviews_added {}\n\
# HELP lesezeichen_goals_set Goals set\n# TYPE lesezeichen_goals_set counter\nlesezeichen_goals_set {}\n\
# HELP lesezeichen_uptime_seconds Uptime seconds\n# TYPE lesezeichen_uptime_seconds gauge\nlesezeichen_uptime_seconds {}\n",
        m.registrations,
        m.logins,
        m.books_created,
        m.books_deleted,
        m.progress_updates,
        m.reviews_added,
        m.goals_set,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
