//! The reading-progress state machine.
//!
//! States: `Want to Read`, `Currently Reading`, `Finished`. Any status may be
//! requested directly; [`reconcile`] decides what actually gets stored, and
//! nothing is persisted when it rejects. For a book with `total_pages = T`:
//! a page beyond `T` is invalid, reaching page `T` (with `T > 0`) always
//! means `Finished`, and an explicit `Finished` below `T` is refused.

use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::repo::{self, OwnerId};
use crate::types::{ProgressView, ReadingStatus, UpdateProgressRequest};

/// Pure reconciliation of a requested (page, status) pair against the book's
/// page count. Returns the pair to store.
pub fn reconcile(
    total_pages: i64,
    requested_page: i64,
    requested_status: ReadingStatus,
) -> AppResult<(i64, ReadingStatus)> {
    // Reset semantics: going back to the pile zeroes the position
    let page = if requested_status == ReadingStatus::WantToRead { 0 } else { requested_page };
    let mut status = requested_status;

    if page < 0 {
        return Err(AppError::ValidationError {
            field: "current_page".to_string(),
            message: format!("page cannot be negative, got {}", page),
        });
    }

    if page > total_pages {
        return Err(AppError::InvalidPage(format!(
            "invalid page: this book only has {} pages",
            total_pages
        )));
    }

    // Reaching the last page always means the book is finished
    if page == total_pages && total_pages > 0 {
        status = ReadingStatus::Finished;
    }

    if status == ReadingStatus::Finished && page < total_pages {
        return Err(AppError::IncompletePages(format!(
            "to mark as Finished, you must reach the final page ({})",
            total_pages
        )));
    }

    Ok((page, status))
}

/// Validates and persists a page/status transition for an owned book,
/// creating the progress row on first write.
pub async fn update_progress(
    pool: &SqlitePool,
    owner: OwnerId,
    book_id: i64,
    req: &UpdateProgressRequest,
) -> AppResult<()> {
    let book = repo::books::get_owned(pool, owner, book_id)
        .await?
        .ok_or_else(|| AppError::AccessDenied("you do not own this book".to_string()))?;

    let (page, status) = reconcile(book.total_pages, req.current_page, req.status)?;

    repo::progress::upsert(pool, book_id, page, status).await?;
    tracing::debug!(book_id, page, status = %status, "progress updated");
    Ok(())
}

/// Ownership-checked read. A book with no explicit progress is implicitly
/// "not started": a virtual default is synthesized, no row is written.
pub async fn get_progress(pool: &SqlitePool, owner: OwnerId, book_id: i64) -> AppResult<ProgressView> {
    if repo::books::get_owned(pool, owner, book_id).await?.is_none() {
        return Err(AppError::AccessDenied("access denied".to_string()));
    }

    Ok(repo::progress::get_by_book(pool, book_id)
        .await?
        .unwrap_or_else(|| ProgressView::not_started(book_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_beyond_total_is_invalid() {
        let err = reconcile(300, 350, ReadingStatus::CurrentlyReading).unwrap_err();
        assert!(matches!(err, AppError::InvalidPage(_)));
    }

    #[test]
    fn negative_page_is_rejected() {
        let err = reconcile(300, -1, ReadingStatus::CurrentlyReading).unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
    }

    #[test]
    fn last_page_auto_promotes_to_finished() {
        for status in
            [ReadingStatus::CurrentlyReading, ReadingStatus::Finished]
        {
            let (page, stored) = reconcile(300, 300, status).unwrap();
            assert_eq!(page, 300);
            assert_eq!(stored, ReadingStatus::Finished);
        }
    }

    #[test]
    fn finished_below_last_page_is_incomplete() {
        let err = reconcile(300, 150, ReadingStatus::Finished).unwrap_err();
        assert!(matches!(err, AppError::IncompletePages(_)));
    }

    #[test]
    fn want_to_read_resets_page() {
        let (page, status) = reconcile(300, 275, ReadingStatus::WantToRead).unwrap();
        assert_eq!(page, 0);
        assert_eq!(status, ReadingStatus::WantToRead);
    }

    #[test]
    fn zero_page_book_allows_finished_at_zero() {
        // A book with unknown page count never auto-promotes, but an
        // explicit Finished at page 0 is not "incomplete" either.
        let (page, status) = reconcile(0, 0, ReadingStatus::Finished).unwrap();
        assert_eq!(page, 0);
        assert_eq!(status, ReadingStatus::Finished);
    }

    #[test]
    fn ordinary_progress_passes_through() {
        let (page, status) = reconcile(300, 150, ReadingStatus::CurrentlyReading).unwrap();
        assert_eq!(page, 150);
        assert_eq!(status, ReadingStatus::CurrentlyReading);
    }
}
