use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;

use crate::error::{validation, AppError, AppResult};
use crate::middleware::AuthUser;
use crate::repo::OwnerId;
use crate::service;
use crate::state::AppState;
use crate::types::SetGoalRequest;

pub async fn set_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<SetGoalRequest>,
) -> AppResult<Response> {
    validation::validate_range(req.year, 2000, 2100, "year")?;
    validation::validate_range(req.month, 1, 12, "month")?;
    if req.target_books < 1 {
        return Err(AppError::ValidationError {
            field: "target_books".to_string(),
            message: "target must be at least 1 book".to_string(),
        });
    }

    service::goals::set_goal(&state.db, OwnerId(user.user_id), &req).await?;
    state.metrics.inc_goals_set();
    Ok(Json(json!({ "message": "Goal saved" })).into_response())
}

/// Month 0 means "whole year": the target becomes the sum of the year's
/// monthly goals.
pub async fn goal_progress(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((year, month)): Path<(i64, i64)>,
) -> AppResult<Response> {
    validation::validate_range(year, 2000, 2100, "year")?;
    validation::validate_range(month, 0, 12, "month")?;

    let progress = service::goals::goal_progress(&state.db, OwnerId(user.user_id), year, month).await?;
    Ok(Json(progress).into_response())
}
