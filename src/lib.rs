//! # yoink-dl
//!
//! Backend library for a social-media video download proxy.
//!
//! The crate is a thin HTTP-facing layer over an external extraction
//! capability (yt-dlp): a request names a video URL and a platform hint, the
//! orchestrator downloads the video into a private temporary workspace,
//! enforces a size ceiling, and the gateway streams the bytes back. All
//! storage is request-scoped and removed before the response is returned.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **No shared mutable state** - Every request owns its workspace; one
//!   downloader instance serves concurrent requests without locking
//! - **Delegated extraction** - Platform page parsing lives entirely in
//!   yt-dlp, invoked through the [`extractor::VideoExtractor`] seam
//! - **Bounded errors** - Extractor failures are classified into a small
//!   taxonomy with fixed HTTP status codes and length-bounded messages
//!
//! ## Quick Start
//!
//! ```no_run
//! use yoink_dl::{Config, VideoDownloader};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::default());
//!     let downloader = Arc::new(VideoDownloader::new((*config).clone())?);
//!
//!     // Serves until SIGTERM/SIGINT
//!     yoink_dl::api::start_api_server(downloader, config).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Download orchestration and workspaces
pub mod downloader;
/// Error types and extraction-failure classification
pub mod error;
/// Video extraction backends
pub mod extractor;
/// Core request and response types
pub mod types;

// Re-export commonly used types
pub use config::{Config, DownloadConfig, ServerConfig};
pub use downloader::{VideoDownloader, Workspace};
pub use error::{ApiError, Error, Result, ToHttpStatus, classify_extraction_error};
pub use extractor::{ExtractorConfig, VideoExtractor, YtDlpExtractor};
pub use types::{DownloadRequest, DownloadRequestBody, Platform, VideoPayload};

/// Resolve when a termination signal arrives.
///
/// - **Unix:** SIGTERM or SIGINT, with a Ctrl+C fallback if signal
///   registration fails.
/// - **Windows/other:** Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// Used by [`api::start_api_server`] for graceful shutdown; exposed so
/// embedders running their own server loop can reuse it.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to register SIGTERM handler, falling back to Ctrl+C");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to register SIGINT handler, falling back to Ctrl+C");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => tracing::info!("received SIGTERM, shutting down"),
            _ = sigint.recv() => tracing::info!("received SIGINT, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("received Ctrl+C, shutting down");
    }
}
