use serde::{Deserialize, Serialize};

use models::ong::{self, NewOng};

use crate::errors::ServiceError;
use crate::validation::Validate;

/// Body of `POST /ongs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOngInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<CreateOngInput> for NewOng {
    fn from(i: CreateOngInput) -> Self {
        NewOng { name: i.name, email: i.email, description: i.description, phone: i.phone }
    }
}

impl Validate for CreateOngInput {
    fn validate(&self) -> Result<(), ServiceError> {
        ong::validate_name(&self.name)?;
        ong::validate_email(&self.email)?;
        if let Some(phone) = &self.phone {
            if phone.len() > 32 {
                return Err(ServiceError::Validation("phone too long (<=32)".into()));
            }
        }
        Ok(())
    }
}
