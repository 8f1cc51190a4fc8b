//! REST API server module
//!
//! Exposes the single method-multiplexed `/download` endpoint plus OpenAPI
//! metadata, and owns the HTTP concerns: CORS, request tracing, and the
//! bind/serve lifecycle.

use crate::{Config, Result, VideoDownloader};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

/// Create the API router with all route definitions
///
/// # Routes
///
/// - `OPTIONS /download` - CORS preflight (always succeeds, empty body)
/// - `GET /download` - Health check
/// - `POST /download` - Download a video, stream the bytes back
/// - `GET /openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive documentation (if enabled)
///
/// Any other method on `/download` is answered with 405 by axum's method
/// router.
pub fn create_router(downloader: Arc<VideoDownloader>, config: Arc<Config>) -> Router {
    let state = AppState::new(downloader, config.clone());

    let router = Router::new()
        .route(
            "/download",
            get(routes::health_check)
                .post(routes::download_video)
                .options(routes::preflight),
        )
        .route("/openapi.json", get(routes::openapi_spec));

    // Merge Swagger UI routes if enabled in config (before applying state)
    let router = if config.server.swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    let router = router
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Apply CORS middleware if enabled in config (outermost, so every
    // response — success, error, and preflight — carries the headers)
    if config.server.cors_enabled {
        router.layer(build_cors_layer(&config.server.cors_origins))
    } else {
        router
    }
}

/// Build a CORS layer based on configured origins
///
/// Allows the methods and header the browser frontend needs (GET, POST,
/// OPTIONS; Content-Type) for the specified origins; "*" allows any origin.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_any = origins.iter().any(|o| o == "*");

    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if allow_any || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    }
}

/// Start the API server on the configured bind address.
///
/// Binds a TCP listener and serves the router until shutdown. Runs until a
/// termination signal arrives (see [`crate::shutdown_signal`]) or the server
/// errors out.
///
/// # Example
///
/// ```no_run
/// use yoink_dl::{Config, VideoDownloader};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(Config::default());
/// let downloader = Arc::new(VideoDownloader::new((*config).clone())?);
///
/// // Start API server (blocks until shutdown)
/// yoink_dl::api::start_api_server(downloader, config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(
    downloader: Arc<VideoDownloader>,
    config: Arc<Config>,
) -> Result<()> {
    let bind_address = config.server.bind_address;
    let router = create_router(downloader, config);

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(|e| crate::Error::Internal(format!("failed to bind {bind_address}: {e}")))?;

    tracing::info!(%bind_address, "API server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(crate::shutdown_signal())
        .await
        .map_err(|e| crate::Error::Internal(format!("API server error: {e}")))
}
