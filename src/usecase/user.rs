use std::sync::Arc;

use crate::auth::hash_password;
use crate::error::{AppError, ErrorKind};
use crate::models::{NewUser, User};
use crate::repository::UserRepository;

pub struct UserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Hashes the password and stores a new user.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password).map_err(|err| {
            log::warn!("failed to hash password for username={}: {}", username, err);
            err
        })?;

        let user = self
            .repository
            .create(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;
        log::info!("user created id={} username={}", user.id, user.username);
        Ok(user)
    }

    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        self.repository.get_by_id(id).await.map_err(|err| {
            if err.is(ErrorKind::NotFound) {
                err
            } else {
                AppError::wrap(err, ErrorKind::Internal, "failed to fetch user")
            }
        })
    }
}
