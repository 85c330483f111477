use serde::{Deserialize, Serialize};

use models::activity::{self, ActivityStatus, NewActivity};

use crate::errors::ServiceError;
use crate::validation::Validate;

/// Body of `POST /activities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityInput {
    pub name: String,
    pub points: i32,
    #[serde(default)]
    pub description: String,
    pub main_img: String,
    #[serde(default)]
    pub status: ActivityStatus,
    pub ong_id: i32,
    #[serde(default)]
    pub user_id: Option<i32>,
}

impl From<CreateActivityInput> for NewActivity {
    fn from(i: CreateActivityInput) -> Self {
        NewActivity {
            name: i.name,
            points: i.points,
            description: i.description,
            main_img: i.main_img,
            status: i.status,
            ong_id: i.ong_id,
            user_id: i.user_id,
        }
    }
}

impl Validate for CreateActivityInput {
    fn validate(&self) -> Result<(), ServiceError> {
        activity::validate_name(&self.name)?;
        activity::validate_points(self.points)?;
        activity::validate_main_img(&self.main_img)?;
        if self.ong_id <= 0 {
            return Err(ServiceError::Validation("ongId must be a positive id".into()));
        }
        Ok(())
    }
}

/// Subset of activity fields a client may overwrite. Absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub main_img: Option<String>,
    #[serde(default)]
    pub status: Option<ActivityStatus>,
    #[serde(default)]
    pub ong_id: Option<i32>,
}

impl ActivityPatch {
    pub fn is_empty(&self) -> bool { *self == ActivityPatch::default() }
}

impl Validate for ActivityPatch {
    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(name) = &self.name { activity::validate_name(name)?; }
        if let Some(points) = self.points { activity::validate_points(points)?; }
        if let Some(img) = &self.main_img { activity::validate_main_img(img)?; }
        Ok(())
    }
}

/// Body of `PUT /activities`: the target id travels in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityInput {
    pub activity_id: i32,
    #[serde(default)]
    pub activity: ActivityPatch,
}

/// Body of `POST /activities/:id/do`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoActivityInput {
    #[serde(default)]
    pub realization_field: Option<serde_json::Value>,
}
