//! Trait and option types for video extraction

use crate::types::Platform;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Fixed filename stem the extractor writes under; the extension is up to the
/// extractor, which is why artifact discovery scans for `video.*`.
pub const ARTIFACT_STEM: &str = "video";

/// Browser user agent sent for platforms that reject default HTTP clients
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request options handed to the extraction capability
///
/// Built from a validated request and the workspace it should write into,
/// then discarded once the extraction returns.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Format selection expression, preferring a browser-playable mp4 under
    /// the size ceiling and degrading to "best under ceiling" then "best"
    pub format: String,

    /// Output path template (`<workspace>/video.%(ext)s`)
    pub output_template: PathBuf,

    /// Size ceiling in bytes, passed to the extractor as a download hint
    pub max_filesize: u64,

    /// Transport user-agent override, set only for platforms that need it
    pub user_agent: Option<String>,
}

impl ExtractorConfig {
    /// Build the extractor options for one request.
    ///
    /// # Arguments
    ///
    /// * `platform` - Platform hint from the request
    /// * `workspace` - Directory the artifact must be written into
    /// * `max_filesize` - Size ceiling in bytes
    pub fn for_request(platform: Platform, workspace: &Path, max_filesize: u64) -> Self {
        // yt-dlp filesize filters take "<N>M" shorthand; the ceiling is always
        // a whole number of MiB in practice. Never emit 0M, which would
        // filter out every format.
        let ceiling_mb = (max_filesize / (1024 * 1024)).max(1);
        let format = format!(
            "best[ext=mp4][filesize<{ceiling_mb}M]/best[filesize<{ceiling_mb}M]/best"
        );

        let user_agent = match platform {
            // TikTok's servers reject yt-dlp's default client string
            Platform::Tiktok => Some(BROWSER_USER_AGENT.to_string()),
            _ => None,
        };

        Self {
            format,
            output_template: workspace.join(format!("{ARTIFACT_STEM}.%(ext)s")),
            max_filesize,
            user_agent,
        }
    }
}

/// Trait for video extraction backends
///
/// An implementation resolves the URL to a playable stream, downloads it, and
/// writes exactly one file matching the output template into the workspace —
/// or fails with an error whose message text encodes the reason (the external
/// tool exposes no structured codes). Implementations must be `Send + Sync`
/// so one instance can serve concurrent requests.
#[async_trait]
pub trait VideoExtractor: Send + Sync {
    /// Download the video at `url` according to `config`.
    ///
    /// On success the artifact exists at the output template's path with an
    /// extractor-chosen extension. On failure the returned error carries the
    /// classified failure (see [`crate::error::classify_extraction_error`]).
    async fn extract(&self, url: &str, config: &ExtractorConfig) -> crate::Result<()>;

    /// Short name of this backend, for logging
    fn name(&self) -> &'static str;
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_chain_degrades_from_mp4_to_best() {
        let config =
            ExtractorConfig::for_request(Platform::Youtube, Path::new("/tmp/ws"), 50 * 1024 * 1024);
        assert_eq!(
            config.format,
            "best[ext=mp4][filesize<50M]/best[filesize<50M]/best"
        );
    }

    #[test]
    fn output_template_uses_fixed_stem() {
        let config =
            ExtractorConfig::for_request(Platform::Youtube, Path::new("/tmp/ws"), 50 * 1024 * 1024);
        assert_eq!(
            config.output_template,
            PathBuf::from("/tmp/ws/video.%(ext)s")
        );
    }

    #[test]
    fn tiktok_gets_browser_user_agent() {
        let config =
            ExtractorConfig::for_request(Platform::Tiktok, Path::new("/tmp/ws"), 50 * 1024 * 1024);
        let ua = config.user_agent.unwrap();
        assert!(ua.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn other_platforms_use_default_client() {
        for platform in [Platform::Youtube, Platform::Instagram, Platform::Other] {
            let config =
                ExtractorConfig::for_request(platform, Path::new("/tmp/ws"), 50 * 1024 * 1024);
            assert!(config.user_agent.is_none(), "{platform:?} should not override UA");
        }
    }

    #[test]
    fn ceiling_scales_with_configured_size() {
        let config =
            ExtractorConfig::for_request(Platform::Youtube, Path::new("/tmp/ws"), 10 * 1024 * 1024);
        assert!(config.format.contains("filesize<10M"));
        assert_eq!(config.max_filesize, 10 * 1024 * 1024);
    }
}
