//! Download endpoint handlers: preflight, health, download, OpenAPI.

use crate::api::AppState;
use crate::error::Error;
use crate::types::DownloadRequestBody;
use axum::{
    Json,
    body::{Body, Bytes},
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// OPTIONS /download - CORS preflight
///
/// Always succeeds with an empty body regardless of payload. Preflights with
/// an `Access-Control-Request-Method` header are answered by the CORS layer
/// before reaching this handler; plain OPTIONS requests land here.
#[utoipa::path(
    options,
    path = "/download",
    tag = "download",
    responses(
        (status = 204, description = "Preflight accepted, empty body")
    )
)]
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// GET /download - Health check
#[utoipa::path(
    get,
    path = "/download",
    tag = "download",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "yoink-dl API is running! Use POST to download videos."
    }))
}

/// POST /download - Download a video and stream it back
///
/// The body is read raw and parsed manually so parse failures produce the
/// fixed `{"error": "Invalid JSON in request body"}` rather than axum's
/// rejection text, and so missing fields are reported as validation errors.
/// Validation happens before the downloader is touched, so invalid requests
/// allocate no workspace.
#[utoipa::path(
    post,
    path = "/download",
    tag = "download",
    request_body = DownloadRequestBody,
    responses(
        (status = 200, description = "Video bytes", content_type = "video/mp4"),
        (status = 400, description = "Invalid JSON, missing fields, or extraction failed", body = crate::error::ApiError),
        (status = 403, description = "Video is private or age-restricted", body = crate::error::ApiError),
        (status = 404, description = "Video not found or unavailable", body = crate::error::ApiError),
        (status = 413, description = "Video exceeds the size ceiling", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
        (status = 504, description = "Extraction exceeded the request timeout", body = crate::error::ApiError)
    )
)]
pub async fn download_video(State(state): State<AppState>, body: Bytes) -> Response {
    let body: DownloadRequestBody = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(_) => return Error::InvalidJson.into_response(),
    };

    let request = match body.validate() {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    let timeout = state.config.download.request_timeout;
    let result = tokio::time::timeout(timeout, state.downloader.download(&request)).await;

    match result {
        Ok(Ok(payload)) => video_response(payload),
        Ok(Err(e)) => {
            tracing::error!(url = %request.url, error = %e, "download failed");
            e.into_response()
        }
        Err(_) => {
            tracing::error!(url = %request.url, ?timeout, "download timed out");
            Error::Timeout.into_response()
        }
    }
}

/// GET /openapi.json - OpenAPI specification
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "system",
    responses(
        (status = 200, description = "OpenAPI 3.1 specification in JSON format")
    )
)]
pub async fn openapi_spec() -> impl IntoResponse {
    use crate::api::openapi::ApiDoc;
    use utoipa::OpenApi;

    Json(ApiDoc::openapi())
}

/// Build the binary success response for a downloaded video
fn video_response(payload: crate::types::VideoPayload) -> Response {
    let disposition = format!("attachment; filename={}", payload.filename);

    match Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, payload.content_type)
        .header(header::CONTENT_LENGTH, payload.data.len())
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from(payload.data))
    {
        Ok(response) => response,
        Err(e) => Error::Internal(format!("failed to build response: {e}")).into_response(),
    }
}
