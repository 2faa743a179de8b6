use crate::error::{AppError, Result, StoreContext, StoreOp};
use crate::models::User;
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    pub async fn create_user(&self, username: Option<&str>) -> Result<User> {
        let username = username.map(str::trim).unwrap_or_default();
        if username.is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }

        let user = self
            .user_repo
            .create(username)
            .await
            .store_op(StoreOp::SaveUser)?;

        tracing::info!(user_id = %user.id, "Created user {}", user.username);
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.user_repo
            .find_all()
            .await
            .store_op(StoreOp::FetchUsers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations;

    fn setup_service() -> UserService {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations(&pool).expect("Failed to run migrations");
        UserService::new(UserRepository::new(pool))
    }

    #[tokio::test]
    async fn test_create_user_trims_username() {
        let service = setup_service();

        let user = service.create_user(Some("  alice ")).await.unwrap();

        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_create_user_rejects_blank() {
        let service = setup_service();

        for username in [None, Some(""), Some("   ")] {
            let err = service.create_user(username).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_users_is_stable() {
        let service = setup_service();
        service.create_user(Some("alice")).await.unwrap();
        service.create_user(Some("bob")).await.unwrap();

        let first = service.list_users().await.unwrap();
        let second = service.list_users().await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_users_store_failure() {
        // No migrations: the users table is missing.
        let service = UserService::new(UserRepository::new(create_memory_pool().unwrap()));

        let err = service.list_users().await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Store {
                op: StoreOp::FetchUsers,
                ..
            }
        ));
    }
}
