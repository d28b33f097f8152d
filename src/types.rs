use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Reading status of a book. Closed set; unknown strings fail request binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingStatus {
    #[serde(rename = "Want to Read")]
    WantToRead,
    #[serde(rename = "Currently Reading")]
    CurrentlyReading,
    #[serde(rename = "Finished")]
    Finished,
}

impl ReadingStatus {
    /// The canonical string stored in the database, identical to the JSON form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::WantToRead => "Want to Read",
            ReadingStatus::CurrentlyReading => "Currently Reading",
            ReadingStatus::Finished => "Finished",
        }
    }
}

impl std::str::FromStr for ReadingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Want to Read" => Ok(ReadingStatus::WantToRead),
            "Currently Reading" => Ok(ReadingStatus::CurrentlyReading),
            "Finished" => Ok(ReadingStatus::Finished),
            other => Err(AppError::Database(format!("unknown reading status: {}", other))),
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Domain records (persisted shapes)

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

/// A user as exposed over the API: never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self { id: u.id, name: u.name, email: u.email }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub publication_year: Option<i64>,
    pub total_pages: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Reading position and status for one book. `last_updated` is `None` for
/// the synthesized default of a book without a progress row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressView {
    pub book_id: i64,
    pub current_page: i64,
    pub status: ReadingStatus,
    pub last_updated: Option<String>,
}

impl ProgressView {
    /// The read-time fallback for a book that has never been updated.
    pub fn not_started(book_id: i64) -> Self {
        Self { book_id, current_page: 0, status: ReadingStatus::WantToRead, last_updated: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookWithProgress {
    #[serde(flatten)]
    pub book: Book,
    pub progress: Option<ProgressView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    pub rating: i64,
    pub comment: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingGoal {
    pub id: i64,
    pub user_id: i64,
    pub year: i64,
    pub month: i64,
    pub target_books: i64,
}

// Request DTOs

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub genre: String,
    pub publication_year: Option<i64>,
    #[serde(default)]
    pub total_pages: i64,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub publication_year: Option<i64>,
    pub total_pages: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProgressRequest {
    pub current_page: i64,
    pub status: ReadingStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetGoalRequest {
    pub year: i64,
    pub month: i64,
    pub target_books: i64,
}

// Response DTOs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Dashboard aggregation for the current calendar year/month. All counts
/// are derived per request, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_books: i64,
    pub currently_reading: i64,
    pub books_finished_year: i64,
    pub books_finished_month: i64,
    pub yearly_target: i64,
    pub monthly_target: i64,
    pub goals_set_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    pub year: i64,
    pub month: i64,
    pub target: i64,
    pub current: i64,
    pub is_completed: bool,
}
