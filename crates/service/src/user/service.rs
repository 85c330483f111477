use std::sync::Arc;

use tracing::debug;

use models::user;

use super::repository::UserRepository;
use crate::errors::ServiceError;

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self { Self { repo } }

    /// Resolve the user behind a token's `email` claim.
    pub async fn find_by_email(&self, email: &str) -> Result<user::Model, ServiceError> {
        let found = self.repo.find_by_email(email).await?;
        debug!(found = found.is_some(), "user lookup by email");
        found.ok_or_else(|| ServiceError::not_found("user"))
    }

    pub async fn create(&self, email: &str, name: &str) -> Result<user::Model, ServiceError> {
        self.repo.create(email, name).await
    }
}
