use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryOrder};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, ong, user};

/// Lifecycle of an activity: published, taken by a user, completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    #[default]
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "done")]
    Done,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activity")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub points: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub main_img: String,
    pub status: ActivityStatus,
    pub ong_id: i32,
    pub user_id: Option<i32>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub realization_field: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Ong,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Ong => Entity::belongs_to(ong::Entity)
                .from(Column::OngId)
                .to(ong::Column::Id)
                .into(),
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<ong::Entity> for Entity {
    fn to() -> RelationDef { Relation::Ong.def() }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if trimmed.chars().count() > 128 { return Err(errors::ModelError::Validation("name too long (<=128)".into())); }
    Ok(())
}

pub fn validate_points(points: i32) -> Result<(), errors::ModelError> {
    if points < 0 { return Err(errors::ModelError::Validation("points must be >= 0".into())); }
    Ok(())
}

pub fn validate_main_img(main_img: &str) -> Result<(), errors::ModelError> {
    if main_img.trim().is_empty() { return Err(errors::ModelError::Validation("mainImg required".into())); }
    if main_img.len() > 512 { return Err(errors::ModelError::Validation("mainImg too long (<=512)".into())); }
    Ok(())
}

/// Fields for a new activity; `status` defaults to [`ActivityStatus::Open`].
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub name: String,
    pub points: i32,
    pub description: String,
    pub main_img: String,
    pub status: ActivityStatus,
    pub ong_id: i32,
    pub user_id: Option<i32>,
}

impl NewActivity {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_name(&self.name)?;
        validate_points(self.points)?;
        validate_main_img(&self.main_img)
    }
}

pub async fn create(db: &DatabaseConnection, new: NewActivity) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(new.name.trim().to_string()),
        points: Set(new.points),
        description: Set(new.description),
        main_img: Set(new.main_img),
        status: Set(new.status),
        ong_id: Set(new.ong_id),
        user_id: Set(new.user_id),
        realization_field: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
