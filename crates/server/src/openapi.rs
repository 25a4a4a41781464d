use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct UserDoc { pub id: Uuid, pub name: String, pub emoji: String }

/// All fields optional; `id` is only read on create.
#[derive(ToSchema)]
pub struct UserWriteDoc {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub emoji: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::create_user,
        crate::routes::users::update_user,
    ),
    components(schemas(HealthResponse, UserDoc, UserWriteDoc)),
    tags((name = "health"), (name = "users"))
)]
pub struct ApiDoc;
