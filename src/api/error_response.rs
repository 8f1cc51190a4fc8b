//! HTTP error response handling for the API
//!
//! Converts domain errors into HTTP responses with the status codes from
//! [`ToHttpStatus`] and the flat `{"error": "..."}` JSON body the frontend
//! consumes. Messages on 500-class responses are bounded so internal detail
//! never leaks unbounded.

use crate::error::{ApiError, Error, MAX_ERROR_MESSAGE_LEN, ToHttpStatus, truncate_message};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Convert errors to HTTP responses automatically
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Classified errors already carry bounded, fixed messages; only the
        // unclassified 500s can embed arbitrary internal text.
        let message = match &self {
            Error::Internal(msg) => format!(
                "Server error: {}",
                truncate_message(msg, MAX_ERROR_MESSAGE_LEN)
            ),
            Error::Io(e) => format!(
                "Server error: {}",
                truncate_message(&e.to_string(), MAX_ERROR_MESSAGE_LEN)
            ),
            _ => self.to_string(),
        };

        (status_code, Json(ApiError::new(message))).into_response()
    }
}
