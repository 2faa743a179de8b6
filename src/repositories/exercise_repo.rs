use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{StoreError, StoreResult};
use crate::models::{Exercise, FromSqliteRow};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Exercises recorded against `user_id`, in insertion order.
    pub async fn find_by_user(&self, user_id: &str) -> StoreResult<Vec<Exercise>> {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM exercises WHERE user_id = ? ORDER BY rowid")?;
            let exercises = stmt
                .query_map([&user_id], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }

    /// Insert an exercise. The user id is stored as given and not checked.
    pub async fn create(
        &self,
        user_id: &str,
        description: &str,
        duration: i64,
        date: NaiveDate,
    ) -> StoreResult<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            description: description.to_string(),
            duration,
            date,
        };
        let exercise_clone = exercise.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> StoreResult<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO exercises (id, user_id, description, duration, date)
                 VALUES (?, ?, ?, ?, ?)",
                rusqlite::params![
                    exercise_clone.id,
                    exercise_clone.user_id,
                    exercise_clone.description,
                    exercise_clone.duration,
                    exercise_clone.date
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))??;

        Ok(exercise)
    }
}
