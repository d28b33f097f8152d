use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::repo::OwnerId;
use crate::service;
use crate::state::AppState;
use crate::types::UpdateProgressRequest;

pub async fn get_progress(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let progress = service::progress::get_progress(&state.db, OwnerId(user.user_id), id).await?;
    Ok(Json(progress).into_response())
}

pub async fn update_progress(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProgressRequest>,
) -> AppResult<Response> {
    service::progress::update_progress(&state.db, OwnerId(user.user_id), id, &req).await?;
    state.metrics.inc_progress_updates();
    Ok(Json(json!({ "message": "Progress updated" })).into_response())
}
