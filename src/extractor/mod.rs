//! Video extraction backends
//!
//! The actual work of resolving a platform URL to a playable stream and
//! writing it to disk is delegated to an external extraction capability.
//! This module defines the contract ([`VideoExtractor`]) plus the per-request
//! options handed to it ([`ExtractorConfig`]), and ships one implementation
//! backed by the `yt-dlp` CLI.

mod traits;
mod ytdlp;

pub use traits::{ARTIFACT_STEM, ExtractorConfig, VideoExtractor};
pub use ytdlp::YtDlpExtractor;
