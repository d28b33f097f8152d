use std::str::FromStr;

use sqlx::{Row, SqlitePool};

use super::OwnerId;
use crate::error::AppResult;
use crate::types::{ProgressView, ReadingStatus};

pub async fn get_by_book(pool: &SqlitePool, book_id: i64) -> AppResult<Option<ProgressView>> {
    let row = sqlx::query(
        r#"SELECT book_id, current_page, status, last_updated
           FROM reading_progress WHERE book_id = ?1"#,
    )
    .bind(book_id)
    .fetch_optional(pool)
    .await?;
    match row {
        Some(row) => {
            let status: String = row.try_get("status")?;
            Ok(Some(ProgressView {
                book_id: row.try_get("book_id")?,
                current_page: row.try_get("current_page")?,
                status: ReadingStatus::from_str(&status)?,
                last_updated: Some(row.try_get("last_updated")?),
            }))
        }
        None => Ok(None),
    }
}

/// Overwrites page and status for the book's progress row, creating it on
/// first write. `last_updated` is stamped to now; racing updates resolve by
/// last-write-wins at the store.
pub async fn upsert(
    pool: &SqlitePool,
    book_id: i64,
    current_page: i64,
    status: ReadingStatus,
) -> AppResult<()> {
    sqlx::query(
        r#"INSERT INTO reading_progress (book_id, current_page, status, last_updated)
           VALUES (?1, ?2, ?3, strftime('%Y-%m-%dT%H:%M:%SZ','now'))
           ON CONFLICT(book_id) DO UPDATE SET
               current_page = excluded.current_page,
               status = excluded.status,
               last_updated = excluded.last_updated"#,
    )
    .bind(book_id)
    .bind(current_page)
    .bind(status.as_str())
    .execute(pool)
    .await?;
    Ok(())
}

/// Counts the owner's books with the given status, joined through `books`
/// for the ownership scope.
pub async fn count_by_status(
    pool: &SqlitePool,
    owner: OwnerId,
    status: ReadingStatus,
) -> AppResult<i64> {
    let row = sqlx::query(
        r#"SELECT COUNT(*) AS cnt FROM reading_progress p
           JOIN books b ON b.id = p.book_id
           WHERE b.user_id = ?1 AND p.status = ?2"#,
    )
    .bind(owner.0)
    .bind(status.as_str())
    .fetch_one(pool)
    .await?;
    Ok(row.try_get("cnt")?)
}

/// Counts the owner's finished books whose progress was last updated in the
/// given year, and month if one is supplied.
pub async fn count_finished_in(
    pool: &SqlitePool,
    owner: OwnerId,
    year: i64,
    month: Option<i64>,
) -> AppResult<i64> {
    let mut sql = String::from(
        "SELECT COUNT(*) AS cnt FROM reading_progress p \
         JOIN books b ON b.id = p.book_id \
         WHERE b.user_id = ?1 AND p.status = 'Finished' \
           AND CAST(strftime('%Y', p.last_updated) AS INTEGER) = ?2",
    );
    if month.is_some() {
        sql.push_str(" AND CAST(strftime('%m', p.last_updated) AS INTEGER) = ?3");
    }
    let mut query = sqlx::query(&sql).bind(owner.0).bind(year);
    if let Some(m) = month {
        query = query.bind(m);
    }
    let row = query.fetch_one(pool).await?;
    Ok(row.try_get("cnt")?)
}
