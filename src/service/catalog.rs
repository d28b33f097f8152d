use sqlx::SqlitePool;

use crate::error::{AppError, AppResult, OptionExt};
use crate::repo::{self, OwnerId};
use crate::types::{
    Book, BookWithProgress, CreateBookRequest, DashboardStats, ReadingStatus, UpdateBookRequest,
};

/// Creates a book after probing for duplicates in the owner's library.
///
/// A duplicate is a case-insensitive (title, author) match or, independently,
/// an exact match on a non-empty isbn. The error message differentiates the
/// two so the caller knows what collided.
pub async fn create_book(pool: &SqlitePool, owner: OwnerId, req: &CreateBookRequest) -> AppResult<Book> {
    if let Some(existing) =
        repo::books::find_duplicate(pool, owner, &req.title, &req.author, &req.isbn).await?
    {
        if !req.isbn.is_empty() && existing.isbn == req.isbn {
            return Err(AppError::DuplicateBook(
                "a book with this ISBN is already in your library".to_string(),
            ));
        }
        return Err(AppError::DuplicateBook(
            "this book title and author already exists in your library".to_string(),
        ));
    }

    let book = repo::books::insert(pool, owner, req).await?;
    tracing::info!(book_id = book.id, owner = owner.0, "created book");
    Ok(book)
}

pub async fn list_books(pool: &SqlitePool, owner: OwnerId) -> AppResult<Vec<BookWithProgress>> {
    repo::books::list(pool, owner).await
}

pub async fn search_books(
    pool: &SqlitePool,
    owner: OwnerId,
    term: &str,
) -> AppResult<Vec<BookWithProgress>> {
    repo::books::search(pool, owner, term).await
}

/// Ownership is part of the lookup predicate, so a foreign book and a
/// missing book both read as `NotFound`.
pub async fn get_book(pool: &SqlitePool, owner: OwnerId, book_id: i64) -> AppResult<Book> {
    repo::books::get_owned(pool, owner, book_id).await?.ok_or_not_found("book")
}

pub async fn update_book(
    pool: &SqlitePool,
    owner: OwnerId,
    book_id: i64,
    req: &UpdateBookRequest,
) -> AppResult<()> {
    let affected = repo::books::update(pool, owner, book_id, req).await?;
    if affected == 0 {
        return Err(AppError::NotFound("book not found".to_string()));
    }
    Ok(())
}

/// Removes the book and, first, its progress and review rows. The ordered
/// cascade runs inside one transaction; a miss on the book row rolls
/// everything back.
pub async fn delete_book(pool: &SqlitePool, owner: OwnerId, book_id: i64) -> AppResult<()> {
    repo::books::delete_cascade(pool, owner, book_id).await?;
    tracing::info!(book_id, owner = owner.0, "deleted book with progress and reviews");
    Ok(())
}

/// Computes the dashboard for the given calendar year and month. Every
/// number is derived per request; nothing here is stored.
pub async fn dashboard_stats(
    pool: &SqlitePool,
    owner: OwnerId,
    year: i64,
    month: i64,
) -> AppResult<DashboardStats> {
    let total_books = repo::books::count(pool, owner).await?;
    let currently_reading =
        repo::progress::count_by_status(pool, owner, ReadingStatus::CurrentlyReading).await?;
    let books_finished_year = repo::progress::count_finished_in(pool, owner, year, None).await?;
    let books_finished_month =
        repo::progress::count_finished_in(pool, owner, year, Some(month)).await?;
    let yearly_target = repo::goals::yearly_target_sum(pool, owner, year).await?;
    let monthly_target =
        repo::goals::get(pool, owner, year, month).await?.map(|g| g.target_books).unwrap_or(0);
    let goals_set_count = repo::goals::count_in_year(pool, owner, year).await?;

    Ok(DashboardStats {
        total_books,
        currently_reading,
        books_finished_year,
        books_finished_month,
        yearly_target,
        monthly_target,
        goals_set_count,
    })
}
