use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::video::handler::generate_video,
        crate::modules::health::handler::health,
    ),
    components(
        schemas(
            crate::modules::video::dto::GenerateVideoRequest,
            crate::common::response::ErrorResponse,
            crate::common::response::GenerationFailure,
            crate::modules::health::dto::HealthResponse,
            crate::modules::health::dto::EnvironmentInfo,
            crate::modules::health::dto::EndpointMap,
        )
    ),
    tags(
        (name = "Video", description = "Video generation"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
