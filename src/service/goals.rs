use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::repo::{self, OwnerId};
use crate::types::{GoalProgress, SetGoalRequest};

/// Upsert: setting a goal for an existing (year, month) period overwrites
/// its target rather than duplicating the row.
pub async fn set_goal(pool: &SqlitePool, owner: OwnerId, req: &SetGoalRequest) -> AppResult<()> {
    repo::goals::upsert(pool, owner, req.year, req.month, req.target_books).await?;
    tracing::debug!(owner = owner.0, year = req.year, month = req.month, "goal saved");
    Ok(())
}

/// Measures a goal period against finished books.
///
/// For months 1-12 the target is that month's goal; a month of 0 means
/// "whole year" and the target is the sum of the year's monthly goals.
/// `current` counts books whose progress is `Finished` with a last update in
/// the period. Completion is derived here, never stored.
pub async fn goal_progress(
    pool: &SqlitePool,
    owner: OwnerId,
    year: i64,
    month: i64,
) -> AppResult<GoalProgress> {
    let target = if month > 0 {
        match repo::goals::get(pool, owner, year, month).await? {
            Some(goal) => goal.target_books,
            None => return Err(AppError::NotFound("no goal found for this period".to_string())),
        }
    } else {
        if repo::goals::count_in_year(pool, owner, year).await? == 0 {
            return Err(AppError::NotFound("no goal found for this period".to_string()));
        }
        repo::goals::yearly_target_sum(pool, owner, year).await?
    };

    let month_filter = if month > 0 { Some(month) } else { None };
    let current = repo::progress::count_finished_in(pool, owner, year, month_filter).await?;

    Ok(GoalProgress { year, month, target, current, is_completed: current >= target })
}
