//! In-memory post source
//!
//! Answers every lookup from a shortcode → outcome table and records which
//! shortcodes were requested and how many sessions were opened.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::DateTime;
use instacap::instagram::{InstagramPost, PostSession, PostSource};
use instacap::{FetchError, Shortcode};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A public video post taken at 2024-03-01T12:00:00Z
pub fn sample_post() -> InstagramPost {
    InstagramPost {
        caption: Some("Golden hour over the fjord".to_string()),
        owner_username: "natgeo".to_string(),
        likes: 1520,
        comments: 37,
        taken_at: DateTime::from_timestamp(1_709_294_400, 0).unwrap(),
        is_video: true,
    }
}

#[derive(Default)]
struct Shared {
    outcomes: Mutex<HashMap<String, Result<InstagramPost, FetchError>>>,
    requested: Mutex<Vec<String>>,
    sessions: AtomicUsize,
}

/// Mock `PostSource`; unknown shortcodes resolve to `FetchError::NotFound`.
#[derive(Clone, Default)]
pub struct MockSource {
    shared: Arc<Shared>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_post(self, shortcode: &str, post: InstagramPost) -> Self {
        self.shared
            .outcomes
            .lock()
            .unwrap()
            .insert(shortcode.to_string(), Ok(post));
        self
    }

    pub fn with_error(self, shortcode: &str, error: FetchError) -> Self {
        self.shared
            .outcomes
            .lock()
            .unwrap()
            .insert(shortcode.to_string(), Err(error));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.shared.requested.lock().unwrap().clone()
    }

    pub fn sessions_opened(&self) -> usize {
        self.shared.sessions.load(Ordering::SeqCst)
    }
}

struct MockSession {
    shared: Arc<Shared>,
}

#[async_trait]
impl PostSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn open_session(&self) -> Result<Box<dyn PostSession>, FetchError> {
        self.shared.sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            shared: self.shared.clone(),
        }))
    }
}

#[async_trait]
impl PostSession for MockSession {
    async fn fetch_post(&self, shortcode: &Shortcode) -> Result<InstagramPost, FetchError> {
        self.shared
            .requested
            .lock()
            .unwrap()
            .push(shortcode.as_str().to_string());

        self.shared
            .outcomes
            .lock()
            .unwrap()
            .get(shortcode.as_str())
            .cloned()
            .unwrap_or(Err(FetchError::NotFound))
    }
}
