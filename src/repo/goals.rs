use sqlx::{Row, SqlitePool};

use super::OwnerId;
use crate::error::AppResult;
use crate::types::ReadingGoal;

fn goal_from_row(row: &sqlx::sqlite::SqliteRow) -> AppResult<ReadingGoal> {
    Ok(ReadingGoal {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        year: row.try_get("year")?,
        month: row.try_get("month")?,
        target_books: row.try_get("target_books")?,
    })
}

/// Insert-or-overwrite keyed on (owner, year, month): an existing goal for
/// the period gets its target replaced rather than duplicated.
pub async fn upsert(
    pool: &SqlitePool,
    owner: OwnerId,
    year: i64,
    month: i64,
    target_books: i64,
) -> AppResult<()> {
    sqlx::query(
        r#"INSERT INTO reading_goals (user_id, year, month, target_books)
           VALUES (?1, ?2, ?3, ?4)
           ON CONFLICT(user_id, year, month) DO UPDATE SET
               target_books = excluded.target_books,
               updated_at = strftime('%Y-%m-%dT%H:%M:%SZ','now')"#,
    )
    .bind(owner.0)
    .bind(year)
    .bind(month)
    .bind(target_books)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get(
    pool: &SqlitePool,
    owner: OwnerId,
    year: i64,
    month: i64,
) -> AppResult<Option<ReadingGoal>> {
    let row = sqlx::query(
        r#"SELECT id, user_id, year, month, target_books FROM reading_goals
           WHERE user_id = ?1 AND year = ?2 AND month = ?3"#,
    )
    .bind(owner.0)
    .bind(year)
    .bind(month)
    .fetch_optional(pool)
    .await?;
    row.as_ref().map(goal_from_row).transpose()
}

/// Sum of all monthly targets the owner set in the year; zero when none.
pub async fn yearly_target_sum(pool: &SqlitePool, owner: OwnerId, year: i64) -> AppResult<i64> {
    let row = sqlx::query(
        r#"SELECT COALESCE(SUM(target_books), 0) AS total FROM reading_goals
           WHERE user_id = ?1 AND year = ?2"#,
    )
    .bind(owner.0)
    .bind(year)
    .fetch_one(pool)
    .await?;
    Ok(row.try_get("total")?)
}

pub async fn count_in_year(pool: &SqlitePool, owner: OwnerId, year: i64) -> AppResult<i64> {
    let row = sqlx::query(
        r#"SELECT COUNT(*) AS cnt FROM reading_goals WHERE user_id = ?1 AND year = ?2"#,
    )
    .bind(owner.0)
    .bind(year)
    .fetch_one(pool)
    .await?;
    Ok(row.try_get("cnt")?)
}
