//! Core request and response types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Platform a video URL belongs to
///
/// The platform hint selects platform-specific extractor options (currently
/// only a browser user-agent override for TikTok). The wire carries the
/// platform as a free-form string; [`Platform::parse`] maps it here
/// case-insensitively, with unknown non-empty values falling back to
/// [`Platform::Other`] so the extractor still gets a chance at the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum Platform {
    /// YouTube (including Shorts)
    Youtube,
    /// Instagram (Reels)
    Instagram,
    /// TikTok
    Tiktok,
    /// Any other site supported by the extractor
    Other,
}

impl Platform {
    /// Parse a platform tag from its wire representation.
    ///
    /// Matching is case-insensitive and trims surrounding whitespace. Unknown
    /// values map to [`Platform::Other`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "youtube" => Platform::Youtube,
            "instagram" => Platform::Instagram,
            "tiktok" => Platform::Tiktok,
            _ => Platform::Other,
        }
    }
}

/// Raw wire shape of a download request body
///
/// Fields default to empty strings so that a missing field is reported as the
/// validation error ("URL and platform are required") rather than a JSON
/// parse failure. Validation happens in [`DownloadRequestBody::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DownloadRequestBody {
    /// The video URL to download
    #[serde(default)]
    pub url: String,

    /// Platform hint ("youtube", "instagram", "tiktok", anything else)
    #[serde(default)]
    pub platform: String,
}

impl DownloadRequestBody {
    /// Validate the raw body into a [`DownloadRequest`].
    ///
    /// Rejects requests where either field is missing, empty, or
    /// whitespace-only. No resources are allocated before this check passes.
    pub fn validate(self) -> Result<DownloadRequest> {
        if self.url.trim().is_empty() || self.platform.trim().is_empty() {
            return Err(Error::MissingFields);
        }

        Ok(DownloadRequest {
            url: self.url.trim().to_string(),
            platform: Platform::parse(&self.platform),
        })
    }
}

/// A validated download request
///
/// Only constructible through [`DownloadRequestBody::validate`], so holders
/// can rely on `url` being non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// The video URL to download (trimmed, non-empty)
    pub url: String,

    /// The platform the URL belongs to
    pub platform: Platform,
}

/// The successful result of one download: the artifact bytes plus the
/// response metadata the gateway attaches.
#[must_use]
#[derive(Debug, Clone)]
pub struct VideoPayload {
    /// The full artifact contents
    pub data: Vec<u8>,

    /// MIME type for the response (always `video/mp4`)
    pub content_type: &'static str,

    /// Suggested filename for the Content-Disposition header
    pub filename: &'static str,
}

impl VideoPayload {
    /// Wrap artifact bytes with the fixed response metadata
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            content_type: "video/mp4",
            filename: "video.mp4",
        }
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_platforms() {
        assert_eq!(Platform::parse("youtube"), Platform::Youtube);
        assert_eq!(Platform::parse("Instagram"), Platform::Instagram);
        assert_eq!(Platform::parse(" TIKTOK "), Platform::Tiktok);
    }

    #[test]
    fn parse_unknown_platform_is_other() {
        assert_eq!(Platform::parse("vimeo"), Platform::Other);
        assert_eq!(Platform::parse("other"), Platform::Other);
    }

    #[test]
    fn validate_accepts_complete_body() {
        let body = DownloadRequestBody {
            url: "https://tiktok.com/x".to_string(),
            platform: "tiktok".to_string(),
        };
        let request = body.validate().unwrap();
        assert_eq!(request.url, "https://tiktok.com/x");
        assert_eq!(request.platform, Platform::Tiktok);
    }

    #[test]
    fn validate_rejects_missing_url() {
        let body = DownloadRequestBody {
            url: String::new(),
            platform: "youtube".to_string(),
        };
        assert!(matches!(body.validate(), Err(Error::MissingFields)));
    }

    #[test]
    fn validate_rejects_whitespace_only_fields() {
        let body = DownloadRequestBody {
            url: "   ".to_string(),
            platform: "youtube".to_string(),
        };
        assert!(matches!(body.validate(), Err(Error::MissingFields)));

        let body = DownloadRequestBody {
            url: "https://youtube.com/x".to_string(),
            platform: "\t".to_string(),
        };
        assert!(matches!(body.validate(), Err(Error::MissingFields)));
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let body: DownloadRequestBody = serde_json::from_str("{}").unwrap();
        assert!(body.url.is_empty());
        assert!(matches!(body.validate(), Err(Error::MissingFields)));
    }

    #[test]
    fn payload_carries_fixed_metadata() {
        let payload = VideoPayload::new(vec![1, 2, 3]);
        assert_eq!(payload.content_type, "video/mp4");
        assert_eq!(payload.filename, "video.mp4");
        assert_eq!(payload.data.len(), 3);
    }
}
