use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::jobs::list_jobs,
        api::jobs::get_job,
        api::jobs::create_job,
        api::jobs::update_job,
        api::jobs::delete_job,
        // Add other endpoints here as we document them
    ),
    components(
        schemas(
            crate::models::Job,
            crate::models::JobType,
        )
    ),
    tags(
        (name = "barakjobs", description = "Barak Job Portal API")
    )
)]
pub struct ApiDoc;
