//! OpenAPI documentation and schema generation
//!
//! Compile-time OpenAPI spec for the yoink-dl REST API via utoipa. Served at
//! `/openapi.json`, with optional Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

/// OpenAPI documentation for the yoink-dl REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "yoink-dl REST API",
        version = "0.1.0",
        description = "Video download proxy: POST a {url, platform} pair and receive the video bytes",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    paths(
        crate::api::routes::preflight,
        crate::api::routes::health_check,
        crate::api::routes::download_video,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        crate::types::DownloadRequestBody,
        crate::types::Platform,
        crate::error::ApiError,
        crate::config::Config,
        crate::config::ServerConfig,
        crate::config::DownloadConfig,
    )),
    tags(
        (name = "download", description = "Video download endpoint"),
        (name = "system", description = "Service metadata")
    )
)]
pub struct ApiDoc;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_includes_download_path() {
        let spec = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(spec["paths"]["/download"]["post"].is_object());
        assert!(spec["paths"]["/download"]["get"].is_object());
        assert!(spec["paths"]["/download"]["options"].is_object());
    }
}
