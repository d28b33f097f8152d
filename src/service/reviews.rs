use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::repo::{self, OwnerId};
use crate::types::{CreateReviewRequest, Review};

/// Adds the owner's review for a book, at most one per book. Rating bounds
/// are enforced at the HTTP boundary before this runs.
pub async fn add_review(
    pool: &SqlitePool,
    owner: OwnerId,
    book_id: i64,
    req: &CreateReviewRequest,
) -> AppResult<Review> {
    if repo::books::get_owned(pool, owner, book_id).await?.is_none() {
        return Err(AppError::AccessDenied("access denied".to_string()));
    }

    if repo::reviews::exists_for_book(pool, book_id).await? {
        return Err(AppError::AlreadyReviewed);
    }

    repo::reviews::insert(pool, book_id, req.rating, &req.comment).await
}

/// Ownership-checked read of all reviews for the book, in insertion order.
pub async fn list_reviews(pool: &SqlitePool, owner: OwnerId, book_id: i64) -> AppResult<Vec<Review>> {
    if repo::books::get_owned(pool, owner, book_id).await?.is_none() {
        return Err(AppError::AccessDenied("access denied".to_string()));
    }

    repo::reviews::list_by_book(pool, book_id).await
}
