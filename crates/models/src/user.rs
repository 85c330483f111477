use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
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

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    let e = email.trim();
    match e.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(errors::ModelError::Validation("invalid email".into())),
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, email: &str, name: &str) -> Result<Model, errors::ModelError> {
    validate_email(email)?;
    validate_name(name)?;
    let am = ActiveModel {
        email: Set(email.trim().to_string()),
        name: Set(name.trim().to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email.trim()))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
