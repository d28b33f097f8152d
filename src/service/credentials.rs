use sqlx::SqlitePool;

use crate::auth;
use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use crate::repo;
use crate::types::{LoginRequest, RegisterRequest, UserResponse};

/// Registers a new user, storing a salted irreversible hash of the password.
pub async fn register(pool: &SqlitePool, req: &RegisterRequest) -> AppResult<UserResponse> {
    if repo::users::find_by_email(pool, &req.email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = auth::hash_password(&req.password)?;
    let user = repo::users::insert(pool, &req.name, &req.email, &password_hash).await?;
    tracing::info!(user_id = user.id, "registered new user");
    Ok(user.into())
}

/// Authenticates a user and issues a time-bounded session token carrying the
/// user id as its sole claim. Unknown email and wrong password fail with one
/// indistinguishable error.
pub async fn login(pool: &SqlitePool, auth_cfg: &AuthConfig, req: &LoginRequest) -> AppResult<String> {
    let user = match repo::users::find_by_email(pool, &req.email).await? {
        Some(user) => user,
        None => return Err(AppError::InvalidCredentials),
    };

    if !auth::verify_password(&user.password_hash, &req.password) {
        return Err(AppError::InvalidCredentials);
    }

    auth::issue_token(auth_cfg, user.id)
}
