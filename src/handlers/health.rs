use crate::routes;

pub const HEALTH_BODY: &str = "ok";

/// GET /healthz handler - Liveness probe
///
/// Answers as long as the process can serve HTTP. Touches no state.
#[utoipa::path(
    get,
    path = routes::HEALTHZ,
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler() -> &'static str {
    HEALTH_BODY
}
