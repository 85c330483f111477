use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::Value as Json;

use models::activity::{self, ActivityStatus, NewActivity};

use super::domain::ActivityPatch;
use crate::errors::ServiceError;

/// Persistence operations behind [`super::ActivityService`].
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<activity::Model>, ServiceError>;
    async fn create(&self, new: NewActivity) -> Result<activity::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<activity::Model>, ServiceError>;
    /// Apply `patch` to the row with `id`; returns the number of rows touched.
    async fn update(&self, id: i32, patch: &ActivityPatch) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn set_assignee(&self, id: i32, user_id: i32) -> Result<activity::Model, ServiceError>;
    async fn set_completed(&self, id: i32, realization: Option<Json>) -> Result<activity::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmActivityRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmActivityRepository {
    async fn load(&self, id: i32) -> Result<activity::ActiveModel, ServiceError> {
        let found = activity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("activity"))?;
        Ok(found.into())
    }
}

#[async_trait]
impl ActivityRepository for SeaOrmActivityRepository {
    async fn list(&self) -> Result<Vec<activity::Model>, ServiceError> {
        Ok(activity::list_all(&self.db).await?)
    }

    async fn create(&self, new: NewActivity) -> Result<activity::Model, ServiceError> {
        Ok(activity::create(&self.db, new).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<activity::Model>, ServiceError> {
        Ok(activity::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn update(&self, id: i32, patch: &ActivityPatch) -> Result<u64, ServiceError> {
        let mut am = activity::ActiveModel { updated_at: Set(Utc::now().into()), ..Default::default() };
        if let Some(v) = &patch.name { am.name = Set(v.trim().to_string()); }
        if let Some(v) = patch.points { am.points = Set(v); }
        if let Some(v) = &patch.description { am.description = Set(v.clone()); }
        if let Some(v) = &patch.main_img { am.main_img = Set(v.clone()); }
        if let Some(v) = patch.status { am.status = Set(v); }
        if let Some(v) = patch.ong_id { am.ong_id = Set(v); }
        let res = activity::Entity::update_many()
            .set(am)
            .filter(activity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = activity::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn set_assignee(&self, id: i32, user_id: i32) -> Result<activity::Model, ServiceError> {
        let mut am = self.load(id).await?;
        am.user_id = Set(Some(user_id));
        am.status = Set(ActivityStatus::InProgress);
        am.updated_at = Set(Utc::now().into());
        Ok(am.update(&self.db).await?)
    }

    async fn set_completed(&self, id: i32, realization: Option<Json>) -> Result<activity::Model, ServiceError> {
        let mut am = self.load(id).await?;
        am.realization_field = Set(realization);
        am.status = Set(ActivityStatus::Done);
        am.updated_at = Set(Utc::now().into());
        Ok(am.update(&self.db).await?)
    }
}

/// In-memory repository for tests and local runs without a database
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Table {
        next_id: i32,
        rows: BTreeMap<i32, activity::Model>,
    }

    #[derive(Default)]
    pub struct InMemoryActivityRepository {
        table: Mutex<Table>,
    }

    impl InMemoryActivityRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl ActivityRepository for InMemoryActivityRepository {
        async fn list(&self) -> Result<Vec<activity::Model>, ServiceError> {
            Ok(self.table.lock().await.rows.values().cloned().collect())
        }

        async fn create(&self, new: NewActivity) -> Result<activity::Model, ServiceError> {
            new.validate()?;
            let mut table = self.table.lock().await;
            table.next_id += 1;
            let now = Utc::now().into();
            let model = activity::Model {
                id: table.next_id,
                name: new.name.trim().to_string(),
                points: new.points,
                description: new.description,
                main_img: new.main_img,
                status: new.status,
                ong_id: new.ong_id,
                user_id: new.user_id,
                realization_field: None,
                created_at: now,
                updated_at: now,
            };
            table.rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn get(&self, id: i32) -> Result<Option<activity::Model>, ServiceError> {
            Ok(self.table.lock().await.rows.get(&id).cloned())
        }

        async fn update(&self, id: i32, patch: &ActivityPatch) -> Result<u64, ServiceError> {
            let mut table = self.table.lock().await;
            let Some(row) = table.rows.get_mut(&id) else { return Ok(0) };
            if let Some(v) = &patch.name { row.name = v.trim().to_string(); }
            if let Some(v) = patch.points { row.points = v; }
            if let Some(v) = &patch.description { row.description = v.clone(); }
            if let Some(v) = &patch.main_img { row.main_img = v.clone(); }
            if let Some(v) = patch.status { row.status = v; }
            if let Some(v) = patch.ong_id { row.ong_id = v; }
            row.updated_at = Utc::now().into();
            Ok(1)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.table.lock().await.rows.remove(&id).is_some())
        }

        async fn set_assignee(&self, id: i32, user_id: i32) -> Result<activity::Model, ServiceError> {
            let mut table = self.table.lock().await;
            let row = table.rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("activity"))?;
            row.user_id = Some(user_id);
            row.status = ActivityStatus::InProgress;
            row.updated_at = Utc::now().into();
            Ok(row.clone())
        }

        async fn set_completed(&self, id: i32, realization: Option<Json>) -> Result<activity::Model, ServiceError> {
            let mut table = self.table.lock().await;
            let row = table.rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("activity"))?;
            row.realization_field = realization;
            row.status = ActivityStatus::Done;
            row.updated_at = Utc::now().into();
            Ok(row.clone())
        }
    }
}
