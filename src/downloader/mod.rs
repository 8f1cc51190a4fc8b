//! Download orchestration
//!
//! One [`VideoDownloader::download`] call runs the whole per-request
//! workflow: allocate a workspace, configure and invoke the extractor, locate
//! the artifact it produced, enforce the size ceiling, read the bytes, and
//! remove the workspace no matter which step failed.

mod workspace;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use workspace::Workspace;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extractor::{ARTIFACT_STEM, ExtractorConfig, VideoExtractor, YtDlpExtractor};
use crate::types::{DownloadRequest, VideoPayload};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Artifact extensions probed in preference order before falling back to a
/// directory scan. The extractor picks the container; these are the ones it
/// produces in practice.
const KNOWN_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mkv", "mov"];

/// The download orchestrator
///
/// Owns the extraction backend and configuration; holds no per-request state,
/// so a single instance (behind an `Arc`) serves concurrent requests. Each
/// request gets its own uniquely-named workspace, so no locking is needed
/// between requests.
pub struct VideoDownloader {
    extractor: Arc<dyn VideoExtractor>,
    /// Configuration the downloader was constructed with
    pub config: Arc<Config>,
}

impl VideoDownloader {
    /// Create a downloader backed by the yt-dlp CLI.
    ///
    /// Uses `config.download.ytdlp_path` if set, otherwise discovers the
    /// binary from PATH.
    ///
    /// # Errors
    ///
    /// Returns an error if no yt-dlp binary can be found.
    pub fn new(config: Config) -> Result<Self> {
        let extractor = match &config.download.ytdlp_path {
            Some(path) => YtDlpExtractor::new(path.clone()),
            None => YtDlpExtractor::from_path()
                .ok_or_else(|| Error::Internal("yt-dlp binary not found in PATH".to_string()))?,
        };

        Ok(Self::with_extractor(config, Arc::new(extractor)))
    }

    /// Create a downloader with a custom extraction backend.
    ///
    /// This is the seam tests use to substitute a stub extractor.
    pub fn with_extractor(config: Config, extractor: Arc<dyn VideoExtractor>) -> Self {
        Self {
            extractor,
            config: Arc::new(config),
        }
    }

    /// Download the requested video and return its bytes.
    ///
    /// The workspace is removed before this returns, on success and failure
    /// alike; the payload lives entirely in memory once this completes.
    pub async fn download(&self, request: &DownloadRequest) -> Result<VideoPayload> {
        let mut workspace = Workspace::create(&self.config.download.temp_dir)?;

        let result = self.run(request, workspace.path()).await;

        // Cleanup errors are logged inside, never surfaced; the primary
        // result wins either way.
        workspace.cleanup();

        result
    }

    /// The sequential per-request workflow, workspace lifetime managed by the
    /// caller.
    async fn run(&self, request: &DownloadRequest, workspace: &Path) -> Result<VideoPayload> {
        let max_file_size = self.config.download.max_file_size;
        let extractor_config =
            ExtractorConfig::for_request(request.platform, workspace, max_file_size);

        info!(
            url = %request.url,
            platform = ?request.platform,
            backend = self.extractor.name(),
            "starting extraction"
        );

        self.extractor.extract(&request.url, &extractor_config).await?;

        let artifact = find_artifact(workspace).await.ok_or(Error::ArtifactMissing)?;

        let size = tokio::fs::metadata(&artifact).await?.len();
        if size > max_file_size {
            warn!(size, max_file_size, "artifact exceeds size ceiling");
            return Err(Error::TooLarge);
        }

        let data = tokio::fs::read(&artifact).await?;

        info!(size = data.len(), artifact = %artifact.display(), "extraction complete");

        Ok(VideoPayload::new(data))
    }
}

/// Locate the artifact the extractor wrote into the workspace.
///
/// The filename stem is fixed but the extension is extractor-chosen: probe
/// the known containers in preference order, then fall back to any file whose
/// name starts with the stem.
async fn find_artifact(workspace: &Path) -> Option<PathBuf> {
    for ext in KNOWN_EXTENSIONS {
        let candidate = workspace.join(format!("{ARTIFACT_STEM}.{ext}"));
        if tokio::fs::metadata(&candidate)
            .await
            .is_ok_and(|meta| meta.is_file())
        {
            return Some(candidate);
        }
    }

    let prefix = format!("{ARTIFACT_STEM}.");
    let mut entries = tokio::fs::read_dir(workspace).await.ok()?;
    while let Ok(Some(entry)) = entries.next_entry().await {
        let is_file = entry
            .file_type()
            .await
            .is_ok_and(|file_type| file_type.is_file());
        let matches_stem = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(&prefix));
        if is_file && matches_stem {
            return Some(entry.path());
        }
    }
    None
}
