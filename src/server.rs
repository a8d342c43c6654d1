//! Explicit server instance.
//!
//! Routes are registered when the router is built, so any number of
//! instances can live in one process without sharing state.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Request,
    http::Method,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::error::{method_not_allowed_fallback, not_found_fallback, ApiError};
use crate::handlers::{health_handler, root_handler};
use crate::routes;

#[derive(Clone)]
pub struct Server {
    config: Arc<Config>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Server {
            config: Arc::new(config),
        }
    }

    /// Build the application router.
    pub fn router(&self) -> Router {
        let mut router = Router::new()
            .route(routes::ROOT, get(root_handler))
            .route(routes::HEALTHZ, get(health_handler))
            .route_layer(middleware::from_fn(get_only));

        if self.config.docs_enabled {
            router = router.merge(
                SwaggerUi::new(routes::DOCS).url(routes::OPENAPI_JSON, ApiDoc::openapi()),
            );
        }

        router
            .method_not_allowed_fallback(method_not_allowed_fallback)
            .fallback(not_found_fallback)
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured address and serve until SIGINT or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let host = self.config.service_host.clone();
        let port = self.config.service_port;

        let listener = TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("Failed to bind TCP listener to {}:{}", host, port))?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener
            .local_addr()
            .context("Failed to read listener address")?;
        tracing::info!("Server listening on http://{}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server error")?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// axum routes `HEAD` to `GET` handlers; the service routes are `GET` only.
async fn get_only(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return ApiError::MethodNotAllowed.into_response();
    }
    next.run(request).await
}

/// Resolves on Ctrl+C or SIGTERM. A handler that fails to install is logged
/// and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
