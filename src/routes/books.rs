use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::Datelike;
use serde::Deserialize;
use serde_json::json;

use crate::error::{validation, AppError, AppResult};
use crate::middleware::AuthUser;
use crate::repo::OwnerId;
use crate::service;
use crate::state::AppState;
use crate::types::{CreateBookRequest, UpdateBookRequest};

pub async fn create_book(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateBookRequest>,
) -> AppResult<Response> {
    validation::validate_non_empty(&req.title, "title")?;
    validation::validate_non_empty(&req.author, "author")?;
    validation::validate_non_negative(req.total_pages, "total_pages")?;
    if let Some(year) = req.publication_year {
        validation::validate_range(year, 0, 2100, "publication_year")?;
    }

    let book = service::catalog::create_book(&state.db, OwnerId(user.user_id), &req).await?;
    state.metrics.inc_books_created();
    Ok((StatusCode::CREATED, Json(book)).into_response())
}

pub async fn list_books(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> AppResult<Response> {
    let books = service::catalog::list_books(&state.db, OwnerId(user.user_id)).await?;
    Ok(Json(json!({ "data": books })).into_response())
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

pub async fn search_books(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Response> {
    let term = query.q.trim();
    if term.is_empty() {
        return Err(AppError::BadRequest("search query cannot be empty".to_string()));
    }
    if term.chars().count() > 200 {
        return Err(AppError::BadRequest("search query too long".to_string()));
    }

    let books = service::catalog::search_books(&state.db, OwnerId(user.user_id), term).await?;
    Ok(Json(json!({ "data": books })).into_response())
}

pub async fn get_book(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let book = service::catalog::get_book(&state.db, OwnerId(user.user_id), id).await?;
    Ok(Json(book).into_response())
}

pub async fn update_book(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBookRequest>,
) -> AppResult<Response> {
    if let Some(title) = &req.title {
        validation::validate_non_empty(title, "title")?;
    }
    if let Some(author) = &req.author {
        validation::validate_non_empty(author, "author")?;
    }
    if let Some(pages) = req.total_pages {
        validation::validate_non_negative(pages, "total_pages")?;
    }
    if let Some(year) = req.publication_year {
        validation::validate_range(year, 0, 2100, "publication_year")?;
    }

    service::catalog::update_book(&state.db, OwnerId(user.user_id), id, &req).await?;
    Ok(Json(json!({ "message": "Book updated" })).into_response())
}

pub async fn delete_book(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    service::catalog::delete_book(&state.db, OwnerId(user.user_id), id).await?;
    state.metrics.inc_books_deleted();
    Ok(Json(json!({ "message": "Book deleted" })).into_response())
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> AppResult<Response> {
    let now = chrono::Utc::now();
    let stats = service::catalog::dashboard_stats(
        &state.db,
        OwnerId(user.user_id),
        now.year() as i64,
        now.month() as i64,
    )
    .await?;
    Ok(Json(stats).into_response())
}
