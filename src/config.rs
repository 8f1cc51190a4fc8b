//! Configuration types for yoink-dl

use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf, time::Duration};
use utoipa::ToSchema;

/// Download behavior configuration (temp storage, size ceiling, extractor binary)
///
/// Groups settings related to how one download is orchestrated. Used as a
/// nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DownloadConfig {
    /// Root directory under which per-request workspaces are created
    /// (default: the system temp directory)
    #[serde(default = "default_temp_dir")]
    #[schema(value_type = String)]
    pub temp_dir: PathBuf,

    /// Maximum artifact size in bytes (default: 50 MiB)
    ///
    /// Enforced twice: passed to the extractor as a format filter and
    /// `--max-filesize` hint, and re-checked against the artifact on disk
    /// since not every extraction path honors format-level filters.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Explicit path to the yt-dlp binary (default: discovered from PATH)
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub ytdlp_path: Option<PathBuf>,

    /// Upper bound on one orchestration, extraction included
    /// (default: 300 seconds)
    ///
    /// A hung extractor must not hold a gateway worker forever.
    #[serde(default = "default_request_timeout", with = "duration_secs")]
    #[schema(value_type = u64)]
    pub request_timeout: Duration,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
            max_file_size: default_max_file_size(),
            ytdlp_path: None,
            request_timeout: default_request_timeout(),
        }
    }
}

/// API server configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ServerConfig {
    /// Address the API server binds to (default: 127.0.0.1:8080)
    #[serde(default = "default_bind_address")]
    #[schema(value_type = String)]
    pub bind_address: SocketAddr,

    /// Enable CORS middleware (default: true — the browser frontend is
    /// served from a different origin)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins; "*" allows any origin (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Serve interactive Swagger UI at /swagger-ui (default: false)
    #[serde(default)]
    pub swagger_ui: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: false,
        }
    }
}

/// Top-level configuration
///
/// Every field has a serde default, so `Config::default()` (or an empty JSON
/// object) yields a working configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// API server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Download orchestration settings
    #[serde(default)]
    pub download: DownloadConfig,
}

fn default_temp_dir() -> PathBuf {
    std::env::temp_dir()
}

fn default_max_file_size() -> u64 {
    50 * 1024 * 1024
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(300)
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

/// Serialize/deserialize a Duration as whole seconds
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
