use std::sync::Arc;

use serde_json::Value as Json;
use tracing::{info, instrument};

use models::activity::{self, ActivityStatus};

use super::domain::{ActivityPatch, CreateActivityInput};
use super::repository::ActivityRepository;
use crate::errors::ServiceError;
use crate::validation::Validate;

/// Application service for activities.
///
/// Assignment and completion are read-check-write sequences with no locking;
/// two callers racing on the same activity are not coordinated.
pub struct ActivityService {
    repo: Arc<dyn ActivityRepository>,
}

impl ActivityService {
    pub fn new(repo: Arc<dyn ActivityRepository>) -> Self { Self { repo } }

    pub async fn find_all(&self) -> Result<Vec<activity::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<activity::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("activity"))
    }

    /// Validate and persist a new activity.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::activity::{ActivityService, domain::CreateActivityInput, repository::mock::InMemoryActivityRepository};
    /// let svc = ActivityService::new(Arc::new(InMemoryActivityRepository::new()));
    /// let input: CreateActivityInput = serde_json::from_value(serde_json::json!({
    ///     "name": "Campanha do agasalho", "points": 20, "mainImg": "agasalho.png", "ongId": 1
    /// })).unwrap();
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name, ong_id = input.ong_id))]
    pub async fn create(&self, input: CreateActivityInput) -> Result<activity::Model, ServiceError> {
        input.validate()?;
        let created = self.repo.create(input.into()).await?;
        info!(activity_id = created.id, "activity_created");
        Ok(created)
    }

    /// Overwrite the fields present in `patch`. Does not check that the
    /// activity exists; the returned count is 0 when it does not.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: &ActivityPatch) -> Result<u64, ServiceError> {
        patch.validate()?;
        let touched = self.repo.update(id, patch).await?;
        info!(activity_id = id, rows = touched, "activity_updated");
        Ok(touched)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("activity"));
        }
        info!(activity_id = id, "activity_deleted");
        Ok(())
    }

    /// Assign the activity to `user_id`. Re-assigning to the same user is a no-op
    /// beyond refreshing the status.
    #[instrument(skip(self))]
    pub async fn assign(&self, id: i32, user_id: i32) -> Result<activity::Model, ServiceError> {
        let current = self.find_by_id(id).await?;
        if current.status == ActivityStatus::Done {
            return Err(ServiceError::Conflict("activity already done".into()));
        }
        if let Some(other) = current.user_id.filter(|u| *u != user_id) {
            return Err(ServiceError::Conflict(format!("activity already assigned to user {}", other)));
        }
        let updated = self.repo.set_assignee(id, user_id).await?;
        info!(activity_id = id, user_id, "activity_assigned");
        Ok(updated)
    }

    /// Mark the activity done by its assignee, storing the realization payload.
    #[instrument(skip(self, realization))]
    pub async fn complete(&self, id: i32, user_id: i32, realization: Option<Json>) -> Result<activity::Model, ServiceError> {
        let current = self.find_by_id(id).await?;
        match current.user_id {
            Some(assignee) if assignee == user_id => {}
            Some(_) => return Err(ServiceError::Conflict("activity assigned to another user".into())),
            None => return Err(ServiceError::Validation("activity must be assigned before completion".into())),
        }
        if current.status == ActivityStatus::Done {
            return Err(ServiceError::Conflict("activity already done".into()));
        }
        let updated = self.repo.set_completed(id, realization).await?;
        info!(activity_id = id, user_id, "activity_done");
        Ok(updated)
    }
}
