use super::*;
use crate::downloader::test_helpers::{StubBehavior, create_test_downloader};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;


/// Build a router wired to a stub extractor, returning the temp root so tests
/// can assert no workspace outlives a request.
fn test_app(behavior: StubBehavior) -> (Router, TempDir) {
    let (downloader, temp_root) = create_test_downloader(behavior);
    let config = Arc::new((*downloader.config).clone());
    let app = create_router(Arc::new(downloader), config);
    (app, temp_root)
}

/// POST a JSON body to /download
fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/download")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Assert nothing is left under the temp root (workspaces cleaned up)
fn assert_no_leftover_files(temp_root: &TempDir) {
    let leftover: Vec<_> = walkdir::WalkDir::new(temp_root.path())
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    assert!(leftover.is_empty(), "leaked files: {leftover:?}");
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
