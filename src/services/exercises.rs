use chrono::{Local, NaiveDate};

use crate::error::{AppError, Result, StoreContext, StoreOp};
use crate::models::date::{format_date, parse_date};
use crate::models::{CreateExercise, ExerciseReceipt};
use crate::repositories::{ExerciseRepository, UserRepository};

#[derive(Clone)]
pub struct ExerciseService {
    user_repo: UserRepository,
    exercise_repo: ExerciseRepository,
}

fn parse_duration(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Parse(format!("Invalid duration: {}", raw)))
}

impl ExerciseService {
    pub fn new(user_repo: UserRepository, exercise_repo: ExerciseRepository) -> Self {
        Self {
            user_repo,
            exercise_repo,
        }
    }

    /// Record an exercise for `user_id` and describe it alongside the user.
    ///
    /// The exercise is written before the user is looked up, so an unknown
    /// user id fails with `NotFound` but leaves the exercise stored.
    pub async fn add_exercise(&self, user_id: &str, form: CreateExercise) -> Result<ExerciseReceipt> {
        let description = form
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::Validation("Description is required".to_string()))?;
        let duration = form
            .duration
            .as_deref()
            .ok_or_else(|| AppError::Validation("Duration is required".to_string()))
            .and_then(parse_duration)?;
        let date = match form.date.as_deref() {
            Some(raw) => parse_date(raw)
                .ok_or_else(|| AppError::Parse(format!("Invalid date: {}", raw)))?,
            None => today(),
        };

        let exercise = self
            .exercise_repo
            .create(user_id, description, duration, date)
            .await
            .store_op(StoreOp::SaveExercise)?;
        tracing::debug!(exercise_id = %exercise.id, user_id, "Saved exercise");

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .store_op(StoreOp::FindUser)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ExerciseReceipt {
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: format_date(exercise.date),
            id: user.id,
        })
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
