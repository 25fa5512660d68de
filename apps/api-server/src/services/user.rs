use std::sync::Arc;

use board_core::DomainError;
use board_core::domain::NewUser;
use board_core::ports::{BaseRepository, UserRepository};
use board_shared::dto::UserResponse;

/// User use-cases.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Store a validated user.
    pub async fn create(&self, user: NewUser) -> Result<UserResponse, DomainError> {
        let saved = self.users.insert(user).await?;
        tracing::info!(user_id = saved.id, "User created");

        Ok(saved.into())
    }

    /// Every user, in store order. An empty list is not an error.
    pub async fn find_all(&self) -> Result<Vec<UserResponse>, DomainError> {
        let users = self.users.find_all().await?;

        Ok(users.into_iter().map(Into::into).collect())
    }
}
