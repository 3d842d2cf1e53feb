//! Collaborator seam for post lookups.
//!
//! A `PostSource` opens sessions; a `PostSession` fetches posts. The fetcher
//! opens a new session for every lookup, so implementations never have to
//! worry about state leaking between requests. Implementations map their own
//! failure modes to `FetchError` before returning.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::FetchError;
use super::types::Shortcode;

/// Post resource as reported by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstagramPost {
    pub caption: Option<String>,
    pub owner_username: String,
    pub likes: i64,
    pub comments: i64,
    pub taken_at: DateTime<Utc>,
    pub is_video: bool,
}

/// Factory for lookup sessions.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Human-readable name of this source (e.g., "instagram-graphql")
    fn name(&self) -> &str;

    /// Establish a fresh session (own HTTP client, own cookie jar).
    async fn open_session(&self) -> Result<Box<dyn PostSession>, FetchError>;
}

/// A single lookup context.
#[async_trait]
pub trait PostSession: Send + Sync {
    /// Fetch the post identified by `shortcode`. One attempt, no retries.
    async fn fetch_post(&self, shortcode: &Shortcode) -> Result<InstagramPost, FetchError>;
}
