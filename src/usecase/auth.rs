use std::sync::Arc;

use crate::auth::{verify_password, TokenIssuer};
use crate::error::{AppError, ErrorKind};
use crate::repository::UserRepository;

pub struct AuthUseCase {
    repository: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl AuthUseCase {
    pub fn new(repository: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { repository, tokens }
    }

    /// Signs a bearer token for `user_id` with the service's secret.
    /// `login` does not hand out tokens; this is for callers that do.
    pub fn issue_token(&self, user_id: i32) -> Result<String, AppError> {
        self.tokens.issue(user_id)
    }

    /// Checks `password` against the stored hash for `username`.
    ///
    /// Returns `Ok(false)` on a wrong password. An unknown username is
    /// propagated as the repository's `not_found` error so it can be told
    /// apart in logs; deciding what the client sees is the handler's job.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let user = match self.repository.get_by_username(username).await {
            Ok(user) => user,
            Err(err) if err.is(ErrorKind::NotFound) => {
                log::warn!("login for unknown username={}", username);
                return Err(err);
            }
            Err(err) => {
                log::error!("failed to fetch user username={}: {}", username, err);
                return Err(AppError::wrap(err, ErrorKind::Internal, "failed to fetch user"));
            }
        };

        let matches = verify_password(password, &user.password_hash).map_err(|err| {
            log::error!("failed to compare password hash for username={}: {}", username, err);
            err
        })?;
        if !matches {
            log::warn!("password mismatch for username={}", username);
        }
        Ok(matches)
    }
}
