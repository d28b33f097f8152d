use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;

use crate::error::{validation, AppResult};
use crate::middleware::AuthUser;
use crate::repo::OwnerId;
use crate::service;
use crate::state::AppState;
use crate::types::CreateReviewRequest;

pub async fn add_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<Response> {
    validation::validate_range(req.rating, 1, 5, "rating")?;

    service::reviews::add_review(&state.db, OwnerId(user.user_id), id, &req).await?;
    state.metrics.inc_reviews_added();
    Ok((StatusCode::CREATED, Json(json!({ "message": "Review added" }))).into_response())
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let reviews = service::reviews::list_reviews(&state.db, OwnerId(user.user_id), id).await?;
    Ok(Json(json!({ "data": reviews })).into_response())
}
