//! Error types for yoink-dl
//!
//! This module provides error handling for the library, including:
//! - Domain-specific error variants for validation and orchestration
//! - HTTP status code mapping for API integration
//! - JSON error responses with machine-readable error codes
//! - Classification of extractor failures by message inspection

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for yoink-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Maximum length of error message text surfaced to API clients.
///
/// Extractor and server error messages are truncated to this many characters
/// before crossing the API boundary, so internal detail never reaches clients
/// unbounded.
pub const MAX_ERROR_MESSAGE_LEN: usize = 100;

/// Main error type for yoink-dl
///
/// Every variant maps to an HTTP status code via [`ToHttpStatus`], and the
/// `Display` text is the exact message sent to API clients.
#[derive(Debug, Error)]
pub enum Error {
    /// Request body was not parseable as JSON
    #[error("Invalid JSON in request body")]
    InvalidJson,

    /// Request was missing the url or platform field (or either was blank)
    #[error("URL and platform are required")]
    MissingFields,

    /// The extractor reported the video as private
    #[error("This video is private")]
    PrivateVideo,

    /// The extractor reported a sign-in requirement (age gate)
    #[error("Age-restricted video")]
    AgeRestricted,

    /// The extractor reported the video as removed or never existing
    #[error("Video not found or unavailable")]
    VideoUnavailable,

    /// Extraction finished but no artifact was found in the workspace
    #[error("Download completed but file not found")]
    ArtifactMissing,

    /// The downloaded artifact exceeds the configured size ceiling
    #[error("File too large (max 50MB)")]
    TooLarge,

    /// Extraction failed for an unclassified reason
    ///
    /// The payload is the extractor's message, already truncated to
    /// [`MAX_ERROR_MESSAGE_LEN`] characters by [`classify_extraction_error`].
    #[error("Download failed: {0}")]
    ExtractionFailed(String),

    /// Orchestration exceeded the configured request timeout
    #[error("Download timed out")]
    Timeout,

    /// I/O error (workspace allocation, artifact reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other server-side failure
    #[error("Server error: {0}")]
    Internal(String),
}

/// API error response format
///
/// Returned by API endpoints when a request fails. The body is the flat
/// shape the frontend consumes:
///
/// ```json
/// {"error": "Video not found or unavailable"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Human-readable error message, bounded in length
    pub error: String,
}

impl ApiError {
    /// Create a new API error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client error (invalid input, failed extraction)
            Error::InvalidJson => 400,
            Error::MissingFields => 400,
            Error::ExtractionFailed(_) => 400,

            // 403 Forbidden - Video exists but is not accessible
            Error::PrivateVideo => 403,
            Error::AgeRestricted => 403,

            // 404 Not Found
            Error::VideoUnavailable => 404,

            // 413 Payload Too Large
            Error::TooLarge => 413,

            // 504 Gateway Timeout - extractor exceeded the request budget
            Error::Timeout => 504,

            // 500 Internal Server Error - Server-side issues
            Error::ArtifactMissing => 500,
            Error::Io(_) => 500,
            Error::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::InvalidJson => "invalid_json",
            Error::MissingFields => "missing_fields",
            Error::PrivateVideo => "private_video",
            Error::AgeRestricted => "age_restricted",
            Error::VideoUnavailable => "video_unavailable",
            Error::ArtifactMissing => "artifact_missing",
            Error::TooLarge => "too_large",
            Error::ExtractionFailed(_) => "extraction_failed",
            Error::Timeout => "timeout",
            Error::Io(_) => "io_error",
            Error::Internal(_) => "internal_error",
        }
    }
}

/// Classify an extraction failure by inspecting the extractor's message text.
///
/// The extraction capability (yt-dlp) does not expose structured error codes;
/// the failure reason is encoded in free-form message text. This function is
/// the single place that substring matching happens, so it can be swapped for
/// a structured contract if the extractor ever grows one. The match set is
/// tied to the extractor's current message wording and may drift across
/// extractor versions.
pub fn classify_extraction_error(message: &str) -> Error {
    if message.contains("Private video") {
        Error::PrivateVideo
    } else if message.contains("Video unavailable") {
        Error::VideoUnavailable
    } else if message.contains("Sign in") {
        Error::AgeRestricted
    } else {
        Error::ExtractionFailed(truncate_message(message, MAX_ERROR_MESSAGE_LEN))
    }
}

/// Truncate a message to at most `max_chars` characters.
///
/// Operates on characters rather than bytes so multi-byte text never splits
/// mid-codepoint.
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
