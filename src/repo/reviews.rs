use sqlx::{Row, SqlitePool};

use crate::error::AppResult;
use crate::types::Review;

fn review_from_row(row: &sqlx::sqlite::SqliteRow) -> AppResult<Review> {
    Ok(Review {
        id: row.try_get("id")?,
        book_id: row.try_get("book_id")?,
        rating: row.try_get("rating")?,
        comment: row.try_get("comment")?,
        created_at: row.try_get("created_at")?,
    })
}

pub async fn exists_for_book(pool: &SqlitePool, book_id: i64) -> AppResult<bool> {
    let row = sqlx::query("SELECT COUNT(*) AS cnt FROM reviews WHERE book_id = ?1")
        .bind(book_id)
        .fetch_one(pool)
        .await?;
    let cnt: i64 = row.try_get("cnt")?;
    Ok(cnt > 0)
}

pub async fn insert(pool: &SqlitePool, book_id: i64, rating: i64, comment: &str) -> AppResult<Review> {
    let row = sqlx::query(
        r#"INSERT INTO reviews (book_id, rating, comment) VALUES (?1, ?2, ?3)
           RETURNING id, book_id, rating, comment, created_at"#,
    )
    .bind(book_id)
    .bind(rating)
    .bind(comment)
    .fetch_one(pool)
    .await?;
    review_from_row(&row)
}

/// Reviews for one book in insertion order.
pub async fn list_by_book(pool: &SqlitePool, book_id: i64) -> AppResult<Vec<Review>> {
    let rows = sqlx::query(
        r#"SELECT id, book_id, rating, comment, created_at FROM reviews
           WHERE book_id = ?1 ORDER BY id"#,
    )
    .bind(book_id)
    .fetch_all(pool)
    .await?;
    rows.iter().map(review_from_row).collect()
}
