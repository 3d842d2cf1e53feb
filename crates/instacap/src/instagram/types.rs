use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::source::InstagramPost;

/// Instagram's short identifier for a single post (`/p/<shortcode>/`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shortcode(String);

impl Shortcode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Shortcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post metadata returned to API callers.
///
/// `date` serializes as an RFC 3339 UTC timestamp (`2024-03-01T12:00:00Z`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub caption: Option<String>,
    pub username: String,
    pub likes: i64,
    pub comments: i64,
    pub date: DateTime<Utc>,
    pub is_video: bool,
    pub shortcode: Shortcode,
}

impl PostMetadata {
    /// Combine a fetched post with the shortcode it was requested by.
    pub fn from_post(shortcode: Shortcode, post: InstagramPost) -> Self {
        Self {
            caption: post.caption,
            username: post.owner_username,
            likes: post.likes,
            comments: post.comments,
            date: post.taken_at,
            is_video: post.is_video,
            shortcode,
        }
    }
}
