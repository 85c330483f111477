use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::user;

use crate::errors::ServiceError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError>;
    async fn create(&self, email: &str, name: &str) -> Result<user::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::find_by_email(&self.db, email).await?)
    }

    async fn create(&self, email: &str, name: &str) -> Result<user::Model, ServiceError> {
        Ok(user::create(&self.db, email, name).await?)
    }
}

/// In-memory repository for tests and local runs without a database
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<HashMap<String, user::Model>>, // key: email
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
            Ok(self.users.lock().await.get(email.trim()).cloned())
        }

        async fn create(&self, email: &str, name: &str) -> Result<user::Model, ServiceError> {
            user::validate_email(email)?;
            user::validate_name(name)?;
            let mut users = self.users.lock().await;
            let key = email.trim().to_string();
            if users.contains_key(&key) {
                return Err(ServiceError::Conflict("user already exists".into()));
            }
            let id = users.len() as i32 + 1;
            let model = user::Model { id, email: key.clone(), name: name.trim().to_string(), created_at: Utc::now().into() };
            users.insert(key, model.clone());
            Ok(model)
        }
    }
}
