use std::sync::Arc;

use super::error::FetchError;
use super::source::PostSource;
use super::types::{PostMetadata, Shortcode};

/// Looks up posts through a `PostSource`.
///
/// Every call opens its own session and makes exactly one attempt; failures
/// are returned to the caller immediately.
#[derive(Clone)]
pub struct PostFetcher {
    source: Arc<dyn PostSource>,
}

impl PostFetcher {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub async fn fetch(&self, shortcode: &Shortcode) -> Result<PostMetadata, FetchError> {
        log::info!("Fetching post {} via {}", shortcode, self.source.name());

        let result = match self.source.open_session().await {
            Ok(session) => session.fetch_post(shortcode).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(post) => {
                log::info!("Fetched post {} by @{}", shortcode, post.owner_username);
                Ok(PostMetadata::from_post(shortcode.clone(), post))
            }
            Err(e) => {
                log::warn!("Fetch of post {} failed ({}): {}", shortcode, e.category(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instagram::source::{InstagramPost, PostSession};
    use async_trait::async_trait;
    use chrono::DateTime;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        sessions: AtomicUsize,
        outcome: Result<InstagramPost, FetchError>,
        fail_session: bool,
    }

    struct FixedSession {
        outcome: Result<InstagramPost, FetchError>,
    }

    #[async_trait]
    impl PostSession for FixedSession {
        async fn fetch_post(&self, _shortcode: &Shortcode) -> Result<InstagramPost, FetchError> {
            self.outcome.clone()
        }
    }

    #[async_trait]
    impl PostSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        async fn open_session(&self) -> Result<Box<dyn PostSession>, FetchError> {
            self.sessions.fetch_add(1, Ordering::SeqCst);
            if self.fail_session {
                return Err(FetchError::Unknown("no route to host".to_string()));
            }
            Ok(Box::new(FixedSession {
                outcome: self.outcome.clone(),
            }))
        }
    }

    fn post() -> InstagramPost {
        InstagramPost {
            caption: Some("hello".to_string()),
            owner_username: "someone".to_string(),
            likes: 10,
            comments: 2,
            taken_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            is_video: false,
        }
    }

    fn source(outcome: Result<InstagramPost, FetchError>, fail_session: bool) -> Arc<CountingSource> {
        Arc::new(CountingSource {
            sessions: AtomicUsize::new(0),
            outcome,
            fail_session,
        })
    }

    #[tokio::test]
    async fn test_fetch_success_carries_shortcode() {
        let src = source(Ok(post()), false);
        let fetcher = PostFetcher::new(src.clone());

        let meta = fetcher.fetch(&Shortcode::new("ABC123")).await.unwrap();
        assert_eq!(meta.shortcode.as_str(), "ABC123");
        assert_eq!(meta.username, "someone");
        assert_eq!(meta.caption.as_deref(), Some("hello"));
        assert_eq!(fetcher.source_name(), "counting");
    }

    #[tokio::test]
    async fn test_fresh_session_per_fetch() {
        let src = source(Ok(post()), false);
        let fetcher = PostFetcher::new(src.clone());

        let first = fetcher.fetch(&Shortcode::new("ABC123")).await.unwrap();
        let second = fetcher.fetch(&Shortcode::new("ABC123")).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(src.sessions.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_passes_category_through() {
        let src = source(Err(FetchError::LoginRequired), false);
        let fetcher = PostFetcher::new(src.clone());

        let err = fetcher.fetch(&Shortcode::new("PRIV")).await.unwrap_err();
        assert_eq!(err, FetchError::LoginRequired);
        assert_eq!(src.sessions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_session_failure_is_reported() {
        let src = source(Ok(post()), true);
        let fetcher = PostFetcher::new(src);

        let err = fetcher.fetch(&Shortcode::new("ABC123")).await.unwrap_err();
        assert_eq!(err.to_string(), "Error: no route to host");
    }
}
