use axum::{extract::State, Json};

use crate::error::Result;
use crate::middleware::Payload;
use crate::models::{CreateUser, User};
use crate::services::UserService;

#[derive(Clone)]
pub struct UsersState {
    pub user_service: UserService,
}

pub async fn create(
    State(state): State<UsersState>,
    Payload(form): Payload<CreateUser>,
) -> Result<Json<User>> {
    let user = state
        .user_service
        .create_user(form.username.as_deref())
        .await?;
    Ok(Json(user))
}

pub async fn list(State(state): State<UsersState>) -> Result<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}
