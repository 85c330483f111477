use std::sync::Arc;

use tracing::{info, instrument};

use models::ong;

use super::domain::CreateOngInput;
use super::repository::OngRepository;
use crate::errors::ServiceError;
use crate::validation::Validate;

pub struct OngService {
    repo: Arc<dyn OngRepository>,
}

impl OngService {
    pub fn new(repo: Arc<dyn OngRepository>) -> Self { Self { repo } }

    pub async fn find_all(&self) -> Result<Vec<ong::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<ong::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("ong"))
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateOngInput) -> Result<ong::Model, ServiceError> {
        input.validate()?;
        let created = self.repo.create(input.into()).await?;
        info!(ong_id = created.id, "ong_created");
        Ok(created)
    }
}
