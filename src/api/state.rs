//! Application state for the API server

use crate::{Config, VideoDownloader};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// Cloned per request (cheap Arc clones); carries no per-request state.
#[derive(Clone)]
pub struct AppState {
    /// The download orchestrator
    pub downloader: Arc<VideoDownloader>,

    /// Configuration (read access)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(downloader: Arc<VideoDownloader>, config: Arc<Config>) -> Self {
        Self { downloader, config }
    }
}
