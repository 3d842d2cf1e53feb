//! instacap - HTTP API for extracting Instagram post captions and metadata
//!
//! Accepts an Instagram post/reel URL, resolves its shortcode, fetches the post
//! through Instagram's web GraphQL endpoint and answers with JSON.
//!
//! # Module Structure
//!
//! - `core`: configuration, application errors, logging
//! - `instagram`: shortcode extraction, the Instagram collaborator and the post fetcher
//! - `server`: axum router and request handlers
//! - `cli`: command-line interface for the binary

pub mod cli;
pub mod core;
pub mod instagram;
pub mod server;

// Re-export commonly used types for convenience
pub use crate::core::error::{AppError, AppResult};
pub use crate::instagram::{extract_shortcode, FetchError, InstagramClient, PostFetcher, PostMetadata, Shortcode};
pub use crate::server::{build_router, serve};
