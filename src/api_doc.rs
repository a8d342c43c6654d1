use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-gke",
        version = "0.1.0",
        description = "Plaintext greeting service with a liveness probe"
    ),
    paths(
        handlers::health::health_handler,
        handlers::root::root_handler
    ),
    components(
        schemas(ErrorResponse)
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "greeting", description = "Greeting endpoint")
    )
)]
pub struct ApiDoc;
