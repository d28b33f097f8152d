use std::str::FromStr;

use sqlx::{Row, SqlitePool};

use super::{escape_like_pattern, OwnerId};
use crate::error::{AppError, AppResult};
use crate::types::{Book, BookWithProgress, CreateBookRequest, ProgressView, ReadingStatus, UpdateBookRequest};

pub(crate) fn book_from_row(row: &sqlx::sqlite::SqliteRow) -> AppResult<Book> {
    Ok(Book {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        isbn: row.try_get("isbn")?,
        genre: row.try_get("genre")?,
        publication_year: row.try_get("publication_year")?,
        total_pages: row.try_get("total_pages")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

const BOOK_COLS: &str =
    "id, user_id, title, author, isbn, genre, publication_year, total_pages, created_at, updated_at";

pub async fn insert(pool: &SqlitePool, owner: OwnerId, req: &CreateBookRequest) -> AppResult<Book> {
    let row = sqlx::query(
        r#"INSERT INTO books (user_id, title, author, isbn, genre, publication_year, total_pages)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
           RETURNING id, user_id, title, author, isbn, genre, publication_year, total_pages, created_at, updated_at"#,
    )
    .bind(owner.0)
    .bind(&req.title)
    .bind(&req.author)
    .bind(&req.isbn)
    .bind(&req.genre)
    .bind(req.publication_year)
    .bind(req.total_pages)
    .fetch_one(pool)
    .await?;
    book_from_row(&row)
}

/// Duplicate probe scoped to the owner: case-insensitive (title, author)
/// match, or exact isbn match when the submitted isbn is non-empty.
pub async fn find_duplicate(
    pool: &SqlitePool,
    owner: OwnerId,
    title: &str,
    author: &str,
    isbn: &str,
) -> AppResult<Option<Book>> {
    let query = format!(
        "SELECT {BOOK_COLS} FROM books
         WHERE user_id = ?1
           AND ((LOWER(title) = LOWER(?2) AND LOWER(author) = LOWER(?3))
                OR (?4 != '' AND isbn = ?4))
         LIMIT 1"
    );
    let row = sqlx::query(&query)
        .bind(owner.0)
        .bind(title)
        .bind(author)
        .bind(isbn)
        .fetch_optional(pool)
        .await?;
    row.as_ref().map(book_from_row).transpose()
}

pub async fn get_owned(pool: &SqlitePool, owner: OwnerId, book_id: i64) -> AppResult<Option<Book>> {
    let query = format!("SELECT {BOOK_COLS} FROM books WHERE id = ?1 AND user_id = ?2");
    let row = sqlx::query(&query).bind(book_id).bind(owner.0).fetch_optional(pool).await?;
    row.as_ref().map(book_from_row).transpose()
}

fn with_progress_from_row(row: &sqlx::sqlite::SqliteRow) -> AppResult<BookWithProgress> {
    let book = book_from_row(row)?;
    let status: Option<String> = row.try_get("p_status")?;
    let progress = match status {
        Some(s) => Some(ProgressView {
            book_id: book.id,
            current_page: row.try_get("p_current_page")?,
            status: ReadingStatus::from_str(&s)?,
            last_updated: row.try_get("p_last_updated")?,
        }),
        None => None,
    };
    Ok(BookWithProgress { book, progress })
}

const BOOK_PROGRESS_SELECT: &str = "SELECT b.id, b.user_id, b.title, b.author, b.isbn, b.genre, \
     b.publication_year, b.total_pages, b.created_at, b.updated_at, \
     p.current_page AS p_current_page, p.status AS p_status, p.last_updated AS p_last_updated \
     FROM books b LEFT JOIN reading_progress p ON p.book_id = b.id";

pub async fn list(pool: &SqlitePool, owner: OwnerId) -> AppResult<Vec<BookWithProgress>> {
    let query = format!("{BOOK_PROGRESS_SELECT} WHERE b.user_id = ?1 ORDER BY b.id");
    let rows = sqlx::query(&query).bind(owner.0).fetch_all(pool).await?;
    rows.iter().map(with_progress_from_row).collect()
}

/// Case-insensitive title-substring search scoped to the owner.
pub async fn search(pool: &SqlitePool, owner: OwnerId, term: &str) -> AppResult<Vec<BookWithProgress>> {
    let pattern = format!("%{}%", escape_like_pattern(term));
    let query = format!(
        "{BOOK_PROGRESS_SELECT} WHERE b.user_id = ?1 AND b.title LIKE ?2 ESCAPE '!' ORDER BY b.id"
    );
    let rows = sqlx::query(&query).bind(owner.0).bind(pattern).fetch_all(pool).await?;
    rows.iter().map(with_progress_from_row).collect()
}

/// Partial update: absent fields keep their stored values. Returns the
/// number of rows affected; zero means the book does not exist for this owner.
///
/// Changing `total_pages` reconciles an existing progress row in the same
/// transaction: a position beyond the new length is clamped to it (which
/// lands on the final page and therefore reads as finished), and a
/// `Finished` row short of a raised length goes back to reading.
pub async fn update(
    pool: &SqlitePool,
    owner: OwnerId,
    book_id: i64,
    req: &UpdateBookRequest,
) -> AppResult<u64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"UPDATE books SET
               title = COALESCE(?1, title),
               author = COALESCE(?2, author),
               isbn = COALESCE(?3, isbn),
               genre = COALESCE(?4, genre),
               publication_year = COALESCE(?5, publication_year),
               total_pages = COALESCE(?6, total_pages),
               updated_at = strftime('%Y-%m-%dT%H:%M:%SZ','now')
           WHERE id = ?7 AND user_id = ?8"#,
    )
    .bind(&req.title)
    .bind(&req.author)
    .bind(&req.isbn)
    .bind(&req.genre)
    .bind(req.publication_year)
    .bind(req.total_pages)
    .bind(book_id)
    .bind(owner.0)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() > 0 {
        if let Some(total) = req.total_pages {
            let row = sqlx::query(
                "SELECT current_page, status FROM reading_progress WHERE book_id = ?1",
            )
            .bind(book_id)
            .fetch_optional(&mut *tx)
            .await?;

            if let Some(row) = row {
                let page: i64 = row.try_get("current_page")?;
                let status_raw: String = row.try_get("status")?;
                let status = ReadingStatus::from_str(&status_raw)?;

                let new_page = page.min(total);
                let new_status = if total > 0 && new_page == total {
                    ReadingStatus::Finished
                } else if status == ReadingStatus::Finished && new_page < total {
                    ReadingStatus::CurrentlyReading
                } else {
                    status
                };

                if new_page != page || new_status != status {
                    sqlx::query(
                        r#"UPDATE reading_progress SET
                               current_page = ?1,
                               status = ?2,
                               last_updated = strftime('%Y-%m-%dT%H:%M:%SZ','now')
                           WHERE book_id = ?3"#,
                    )
                    .bind(new_page)
                    .bind(new_status.as_str())
                    .bind(book_id)
                    .execute(&mut *tx)
                    .await?;
                }
            }
        }
    }

    tx.commit().await?;
    Ok(result.rows_affected())
}

/// Deletes a book together with its progress and review rows.
///
/// The child deletes run first inside one transaction; if the book row
/// itself is not found for this owner, the transaction is rolled back and
/// the children are untouched.
pub async fn delete_cascade(pool: &SqlitePool, owner: OwnerId, book_id: i64) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM reading_progress WHERE book_id = ?1")
        .bind(book_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM reviews WHERE book_id = ?1").bind(book_id).execute(&mut *tx).await?;

    let result = sqlx::query("DELETE FROM books WHERE id = ?1 AND user_id = ?2")
        .bind(book_id)
        .bind(owner.0)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(AppError::NotFound(
            "book not found or you don't have permission to delete it".to_string(),
        ));
    }

    tx.commit().await?;
    Ok(())
}

pub async fn count(pool: &SqlitePool, owner: OwnerId) -> AppResult<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS cnt FROM books WHERE user_id = ?1")
        .bind(owner.0)
        .fetch_one(pool)
        .await?;
    Ok(row.try_get("cnt")?)
}
