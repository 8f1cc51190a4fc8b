//! Route handlers for the REST API
//!
//! One method-multiplexed endpoint plus service metadata, all in
//! [`download`].

mod download;

// Re-export all handlers so `routes::function_name` works (and utoipa's
// generated path items resolve)
pub use download::*;
