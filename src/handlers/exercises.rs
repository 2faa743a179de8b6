use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::Result;
use crate::middleware::Payload;
use crate::models::{CreateExercise, ExerciseLog, ExerciseReceipt, LogParams};
use crate::services::{ExerciseService, LogQuery, LogService};

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_service: ExerciseService,
    pub log_service: LogService,
}

pub async fn create(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    Payload(form): Payload<CreateExercise>,
) -> Result<Json<ExerciseReceipt>> {
    let receipt = state.exercise_service.add_exercise(&user_id, form).await?;
    Ok(Json(receipt))
}

pub async fn logs(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    Query(params): Query<LogParams>,
) -> Result<Json<ExerciseLog>> {
    let query = LogQuery::try_from(params)?;
    let log = state.log_service.get_logs(&user_id, &query).await?;
    Ok(Json(log))
}
