//! Exercise log retrieval: resolve the user, fetch their exercises, then
//! filter by date range, truncate to the limit and reshape for output.

use chrono::NaiveDate;

use crate::error::{AppError, Result, StoreContext, StoreOp};
use crate::models::date::{format_date, parse_date};
use crate::models::{Exercise, ExerciseLog, LogEntry, LogParams, User};
use crate::repositories::{ExerciseRepository, UserRepository};

/// Parsed log filters. Missing bounds are open; a missing or non-positive
/// limit keeps every entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl LogQuery {
    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| from <= date) && self.to.is_none_or(|to| date <= to)
    }

    fn take_count(&self) -> Option<usize> {
        self.limit
            .filter(|&limit| limit > 0)
            .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
    }
}

impl TryFrom<LogParams> for LogQuery {
    type Error = AppError;

    fn try_from(params: LogParams) -> Result<Self> {
        let date = |raw: Option<String>, name: &str| -> Result<Option<NaiveDate>> {
            raw.map(|raw| {
                parse_date(&raw)
                    .ok_or_else(|| AppError::Parse(format!("Invalid {} date: {}", name, raw)))
            })
            .transpose()
        };

        let limit = params
            .limit
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| AppError::Parse(format!("Invalid limit: {}", raw)))
            })
            .transpose()?;

        Ok(Self {
            from: date(params.from, "from")?,
            to: date(params.to, "to")?,
            limit,
        })
    }
}

/// Filter, truncate and reshape `exercises` into the log for `user`.
///
/// Store order is kept; nothing is sorted.
pub fn build_log(user: User, exercises: Vec<Exercise>, query: &LogQuery) -> ExerciseLog {
    let filtered = exercises.into_iter().filter(|e| query.contains(e.date));

    let log: Vec<LogEntry> = match query.take_count() {
        Some(n) => filtered.take(n).map(to_entry).collect(),
        None => filtered.map(to_entry).collect(),
    };

    ExerciseLog {
        username: user.username,
        count: log.len(),
        id: user.id,
        log,
    }
}

fn to_entry(exercise: Exercise) -> LogEntry {
    LogEntry {
        description: exercise.description,
        duration: exercise.duration,
        date: format_date(exercise.date),
    }
}

#[derive(Clone)]
pub struct LogService {
    user_repo: UserRepository,
    exercise_repo: ExerciseRepository,
}

impl LogService {
    pub fn new(user_repo: UserRepository, exercise_repo: ExerciseRepository) -> Self {
        Self {
            user_repo,
            exercise_repo,
        }
    }

    pub async fn get_logs(&self, user_id: &str, query: &LogQuery) -> Result<ExerciseLog> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .store_op(StoreOp::RetrieveUser)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let exercises = self
            .exercise_repo
            .find_by_user(&user.id)
            .await
            .store_op(StoreOp::RetrieveExercises)?;

        tracing::debug!(user_id, total = exercises.len(), ?query, "Building exercise log");
        Ok(build_log(user, exercises, query))
    }
}
