use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateActivityDoc {
    pub name: String,
    pub points: i32,
    pub description: Option<String>,
    pub main_img: String,
    /// One of `open`, `in_progress`, `done`
    pub status: Option<String>,
    pub ong_id: i32,
    pub user_id: Option<i32>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ActivityPatchDoc {
    pub name: Option<String>,
    pub points: Option<i32>,
    pub description: Option<String>,
    pub main_img: Option<String>,
    pub status: Option<String>,
    pub ong_id: Option<i32>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateActivityDoc {
    pub activity_id: i32,
    pub activity: ActivityPatchDoc,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct DoActivityDoc {
    /// Free-form completion payload
    #[schema(value_type = Object)]
    pub realization_field: Option<serde_json::Value>,
}

#[derive(ToSchema)]
pub struct CreateOngDoc {
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorEnvelopeDoc { pub erro: bool, pub message: String }

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::activities::list,
        crate::routes::activities::update,
        crate::routes::activities::create,
        crate::routes::activities::find,
        crate::routes::activities::remove,
        crate::routes::activities::assign,
        crate::routes::activities::complete,
        crate::routes::ongs::list,
        crate::routes::ongs::find,
        crate::routes::ongs::create,
    ),
    components(
        schemas(
            HealthResponse,
            CreateActivityDoc,
            ActivityPatchDoc,
            UpdateActivityDoc,
            DoActivityDoc,
            CreateOngDoc,
            ErrorEnvelopeDoc,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "activities"),
        (name = "ongs")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/activities", "/activities/{id}", "/activities/{id}/assign", "/activities/{id}/do", "/ongs", "/ongs/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let schemes = doc.components.as_ref().map(|c| c.security_schemes.contains_key("bearer"));
        assert_eq!(schemes, Some(true));
    }
}
