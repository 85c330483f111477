use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ong")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub phone: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Activity,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Activity => Entity::has_many(crate::activity::Entity).into() }
    }
}

impl Related<crate::activity::Entity> for Entity {
    fn to() -> RelationDef { Relation::Activity.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if trimmed.chars().count() > 128 { return Err(errors::ModelError::Validation("name too long (<=128)".into())); }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    crate::user::validate_email(email)
}

/// Fields for a new organization.
#[derive(Debug, Clone)]
pub struct NewOng {
    pub name: String,
    pub email: String,
    pub description: String,
    pub phone: Option<String>,
}

pub async fn create(db: &DatabaseConnection, new: NewOng) -> Result<Model, errors::ModelError> {
    validate_name(&new.name)?;
    validate_email(&new.email)?;
    let am = ActiveModel {
        name: Set(new.name.trim().to_string()),
        email: Set(new.email.trim().to_string()),
        description: Set(new.description),
        phone: Set(new.phone),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert!(validate_name("Amigos do Bairro").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(129)).is_err());
    }
}
