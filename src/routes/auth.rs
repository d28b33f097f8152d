use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{validation, AppError, AppResult};
use crate::service;
use crate::state::AppState;
use crate::types::{LoginRequest, LoginResponse, RegisterRequest};

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Response> {
    validation::validate_non_empty(&req.name, "name")?;
    validation::validate_non_empty(&req.email, "email")?;
    if !req.email.contains('@') {
        return Err(AppError::ValidationError {
            field: "email".to_string(),
            message: "not a valid email address".to_string(),
        });
    }
    if req.password.len() < 6 {
        return Err(AppError::ValidationError {
            field: "password".to_string(),
            message: "password must be at least 6 characters".to_string(),
        });
    }

    let req = RegisterRequest { email: req.email.trim().to_string(), ..req };
    let user = service::credentials::register(&state.db, &req).await?;
    state.metrics.inc_registrations();
    Ok((StatusCode::CREATED, Json(user)).into_response())
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Response> {
    validation::validate_non_empty(&req.email, "email")?;
    validation::validate_non_empty(&req.password, "password")?;

    let req = LoginRequest { email: req.email.trim().to_string(), ..req };
    let token = service::credentials::login(&state.db, &state.config.auth, &req).await?;
    state.metrics.inc_logins();
    Ok(Json(LoginResponse { message: "login successful".to_string(), token }).into_response())
}
