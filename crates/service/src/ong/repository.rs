use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use models::ong::{self, NewOng};

use crate::errors::ServiceError;

#[async_trait]
pub trait OngRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ong::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<ong::Model>, ServiceError>;
    async fn create(&self, new: NewOng) -> Result<ong::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmOngRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl OngRepository for SeaOrmOngRepository {
    async fn list(&self) -> Result<Vec<ong::Model>, ServiceError> {
        Ok(ong::Entity::find().order_by_asc(ong::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<ong::Model>, ServiceError> {
        Ok(ong::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, new: NewOng) -> Result<ong::Model, ServiceError> {
        Ok(ong::create(&self.db, new).await?)
    }
}

/// In-memory repository for tests and local runs without a database
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryOngRepository {
        rows: Mutex<BTreeMap<i32, ong::Model>>,
    }

    impl InMemoryOngRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl OngRepository for InMemoryOngRepository {
        async fn list(&self) -> Result<Vec<ong::Model>, ServiceError> {
            Ok(self.rows.lock().await.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<ong::Model>, ServiceError> {
            Ok(self.rows.lock().await.get(&id).cloned())
        }

        async fn create(&self, new: NewOng) -> Result<ong::Model, ServiceError> {
            let mut rows = self.rows.lock().await;
            if rows.values().any(|o| o.email == new.email.trim()) {
                return Err(ServiceError::Conflict("ong email already registered".into()));
            }
            let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
            let model = ong::Model {
                id,
                name: new.name.trim().to_string(),
                email: new.email.trim().to_string(),
                description: new.description,
                phone: new.phone,
                created_at: Utc::now().into(),
            };
            rows.insert(id, model.clone());
            Ok(model)
        }
    }
}
