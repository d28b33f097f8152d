use sqlx::{Row, SqlitePool};

use crate::error::{AppError, AppResult};
use crate::types::User;

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: row.try_get("created_at")?,
    })
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> AppResult<Option<User>> {
    let row = sqlx::query(
        r#"SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?1"#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    row.as_ref().map(user_from_row).transpose()
}

/// Inserts a user. The unique email constraint backs the duplicate check:
/// a violation here (for example from a racing registration that slipped
/// past the pre-insert probe) still reports as a duplicate email.
pub async fn insert(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> AppResult<User> {
    let row = sqlx::query(
        r#"INSERT INTO users (name, email, password_hash) VALUES (?1, ?2, ?3)
           RETURNING id, name, email, password_hash, created_at"#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err)
            if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation =>
        {
            AppError::DuplicateEmail
        }
        _ => AppError::from(e),
    })?;
    user_from_row(&row)
}
