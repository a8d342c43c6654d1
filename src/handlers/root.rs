use crate::routes;

pub const GREETING: &str = "Hello World from FastAPI on GKE + Helm!";

/// GET / handler - Fixed greeting
///
/// Logs one line per hit. The log line never influences the response.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn root_handler() -> &'static str {
    tracing::info!("Hello endpoint hit");
    GREETING
}
