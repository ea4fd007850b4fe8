use utoipa::OpenApi;
use utoipa::ToSchema;

use service::isme::IsMe;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::isme::that_is_me,
        crate::routes::isme::is_me,
        crate::routes::isme::is_not_me,
        crate::routes::isme::all_of_me,
    ),
    components(
        schemas(
            HealthResponse,
            IsMe,
        )
    ),
    tags(
        (name = "health"),
        (name = "isme")
    )
)]
pub struct ApiDoc;
