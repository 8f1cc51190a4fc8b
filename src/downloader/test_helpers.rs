//! Shared fixtures for downloader and API tests

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::config::Config;
use crate::downloader::VideoDownloader;
use crate::error::classify_extraction_error;
use crate::extractor::{ExtractorConfig, VideoExtractor};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// What the stub extractor should do when invoked
#[derive(Debug, Clone)]
pub enum StubBehavior {
    /// Write `size` zero bytes to `name` inside the workspace and succeed
    WriteFile {
        /// Filename to create (e.g. "video.mp4")
        name: &'static str,
        /// File size in bytes
        size: usize,
    },
    /// Fail with a raw extractor message (run through the classifier, same
    /// as a real yt-dlp stderr)
    Fail(String),
    /// Never complete (for timeout tests)
    Hang,
}

/// Extraction backend stub standing in for yt-dlp
pub struct StubExtractor {
    behavior: StubBehavior,
}

impl StubExtractor {
    pub fn new(behavior: StubBehavior) -> Self {
        Self { behavior }
    }
}

#[async_trait]
impl VideoExtractor for StubExtractor {
    async fn extract(&self, _url: &str, config: &ExtractorConfig) -> crate::Result<()> {
        match &self.behavior {
            StubBehavior::WriteFile { name, size } => {
                let workspace = config.output_template.parent().unwrap();
                tokio::fs::write(workspace.join(name), vec![0u8; *size]).await?;
                Ok(())
            }
            StubBehavior::Fail(message) => Err(classify_extraction_error(message)),
            StubBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(())
            }
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Create a downloader wired to a stub extractor, with its own temp root.
///
/// The returned `TempDir` is the temp root: tests assert workspace cleanup by
/// checking it is empty afterwards.
pub fn create_test_downloader(behavior: StubBehavior) -> (VideoDownloader, TempDir) {
    let temp_root = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.download.temp_dir = temp_root.path().to_path_buf();

    let downloader = VideoDownloader::with_extractor(config, Arc::new(StubExtractor::new(behavior)));
    (downloader, temp_root)
}

/// Count the entries left under a temp root (0 means no leaked workspaces)
pub fn leftover_entries(temp_root: &TempDir) -> usize {
    std::fs::read_dir(temp_root.path()).unwrap().count()
}
