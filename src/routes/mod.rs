//! HTTP API endpoint handlers.
//!
//! Handlers validate the request shape, pull the verified caller identity
//! from the [`crate::middleware::AuthUser`] extension and delegate to the
//! service layer. Routes under `/api` are JSON in/out; register and login
//! are public, everything else sits behind the bearer-token middleware.

use axum::middleware::from_fn_with_state;
use axum::{
    routing::{get, post},
    Router,
};

use crate::middleware;
use crate::state::AppState;

pub mod auth;
pub mod books;
pub mod goals;
pub mod health;
pub mod progress;
pub mod reviews;

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/books", post(books::create_book).get(books::list_books))
        .route("/books/search", get(books::search_books))
        .route(
            "/books/{id}",
            get(books::get_book).put(books::update_book).delete(books::delete_book),
        )
        .route(
            "/books/{id}/progress",
            get(progress::get_progress).put(progress::update_progress),
        )
        .route("/books/{id}/reviews", get(reviews::list_reviews).post(reviews::add_review))
        .route("/dashboard", get(books::dashboard))
        .route("/goals", post(goals::set_goal))
        .route("/goals/{year}/{month}", get(goals::goal_progress))
        .route_layer(from_fn_with_state(state.clone(), middleware::auth::require_auth));

    let api = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .merge(protected);

    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .route("/version", get(health::version))
        .nest("/api", api)
        .with_state(state)
}
