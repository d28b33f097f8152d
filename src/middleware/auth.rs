use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The verified caller identity, injected as a request extension for
/// handlers behind the authenticated route group.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Requires `Authorization: Bearer <token>` with a valid, unexpired session
/// token; on success the recovered user id travels with the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let header_val = req.headers().get(header::AUTHORIZATION).and_then(|h| h.to_str().ok());

    let token = match header_val {
        Some(v) => match v.strip_prefix("Bearer ") {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(AppError::Unauthorized(
                    "Invalid Authorization header format".to_string(),
                ))
            }
        },
        None => return Err(AppError::Unauthorized("Authorization header is required".to_string())),
    };

    let user_id = auth::verify_token(&state.config.auth, token)?;
    req.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(req).await)
}
