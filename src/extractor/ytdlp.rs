//! CLI-based video extractor using the external yt-dlp binary

use super::traits::{ExtractorConfig, VideoExtractor};
use crate::error::{Error, classify_extraction_error};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// CLI-based extractor wrapping the external `yt-dlp` binary
///
/// yt-dlp handles the per-platform page parsing and stream resolution for
/// 1000+ sites; this wrapper only builds the argument list and classifies
/// failures from the process's stderr.
///
/// # Examples
///
/// ```no_run
/// use yoink_dl::extractor::YtDlpExtractor;
/// use std::path::PathBuf;
///
/// // Create with explicit path
/// let extractor = YtDlpExtractor::new(PathBuf::from("/usr/local/bin/yt-dlp"));
///
/// // Or auto-discover from PATH
/// let extractor = YtDlpExtractor::from_path()
///     .expect("yt-dlp not found in PATH");
/// ```
pub struct YtDlpExtractor {
    binary_path: PathBuf,
}

impl YtDlpExtractor {
    /// Create a new extractor with an explicit binary path
    pub fn new(binary_path: PathBuf) -> Self {
        Self { binary_path }
    }

    /// Attempt to find yt-dlp in PATH
    ///
    /// Uses the `which` crate to search the system PATH. Returns `None` if
    /// the binary is not installed.
    pub fn from_path() -> Option<Self> {
        which::which("yt-dlp").ok().map(Self::new)
    }
}

#[async_trait]
impl VideoExtractor for YtDlpExtractor {
    async fn extract(&self, url: &str, config: &ExtractorConfig) -> crate::Result<()> {
        let mut command = Command::new(&self.binary_path);
        // The gateway drops this future on request timeout; the child must
        // not outlive it as an orphan still writing into a dead workspace.
        command.kill_on_drop(true);
        command
            .arg("--format")
            .arg(&config.format)
            .arg("--output")
            .arg(&config.output_template)
            .arg("--max-filesize")
            .arg(config.max_filesize.to_string())
            .arg("--no-playlist")
            .arg("--no-warnings")
            .arg("--no-progress")
            .arg("--quiet");

        if let Some(user_agent) = &config.user_agent {
            command.arg("--user-agent").arg(user_agent);
        }

        command.arg(url);

        debug!(url, format = %config.format, "invoking yt-dlp");

        let output = command
            .output()
            .await
            .map_err(|e| Error::Internal(format!("Failed to execute yt-dlp: {e}")))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(classify_extraction_error(stderr.trim()))
        }
    }

    fn name(&self) -> &'static str {
        "yt-dlp"
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_returns_none_for_missing_binary() {
        // Discovery itself; independent of whether yt-dlp is installed
        assert!(which::which("nonexistent-ytdlp-binary-xyz").is_err());
    }

    #[test]
    fn explicit_path_is_kept() {
        let extractor = YtDlpExtractor::new(PathBuf::from("/opt/yt-dlp"));
        assert_eq!(extractor.binary_path, PathBuf::from("/opt/yt-dlp"));
        assert_eq!(extractor.name(), "yt-dlp");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn abandoned_extraction_kills_the_subprocess() {
        use std::os::unix::fs::PermissionsExt;
        use std::time::Duration;

        // Stand-in binary: sleeps, then touches a marker. If the child is
        // still alive after the extraction future is dropped, the marker
        // shows up.
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("still-running");
        let script = dir.path().join("fake-yt-dlp");
        std::fs::write(
            &script,
            format!("#!/bin/sh\nsleep 1\ntouch '{}'\n", marker.display()),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let extractor = YtDlpExtractor::new(script);
        let config = ExtractorConfig::for_request(
            crate::types::Platform::Youtube,
            dir.path(),
            50 * 1024 * 1024,
        );

        let result = tokio::time::timeout(
            Duration::from_millis(100),
            extractor.extract("https://youtube.com/x", &config),
        )
        .await;
        assert!(result.is_err(), "extraction should have timed out");

        // Give the script time to finish if it was left running
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(
            !marker.exists(),
            "yt-dlp subprocess kept running after its extraction was abandoned"
        );
    }

    #[tokio::test]
    async fn spawn_failure_is_internal_error() {
        let extractor = YtDlpExtractor::new(PathBuf::from("/nonexistent/yt-dlp-xyz"));
        let config = ExtractorConfig::for_request(
            crate::types::Platform::Youtube,
            std::path::Path::new("/tmp"),
            50 * 1024 * 1024,
        );
        let err = extractor
            .extract("https://youtube.com/x", &config)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }
}
