use thiserror::Error;

/// Categorized outcome of a failed post lookup.
///
/// Every failure the Instagram collaborator can produce is folded into one of
/// these variants where Instagram is called; nothing above that boundary
/// inspects HTTP statuses or response bodies. The `Display` text is the exact
/// message returned to API callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Post is missing, deleted, or no longer accessible
    #[error("Post not found (may be deleted or private)")]
    NotFound,

    /// Post belongs to a private account
    #[error("This is a private account - login required")]
    LoginRequired,

    /// Instagram rejected the request because of request volume
    #[error("Rate limited by Instagram - please try again later")]
    RateLimited,

    /// Catch-all for network, parsing, and unexpected payload failures
    #[error("Error: {0}")]
    Unknown(String),
}

impl FetchError {
    /// Short category name for logs
    pub fn category(&self) -> &'static str {
        match self {
            FetchError::NotFound => "not_found",
            FetchError::LoginRequired => "login_required",
            FetchError::RateLimited => "rate_limited",
            FetchError::Unknown(_) => "unknown",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::NotFound.to_string(), "Post not found (may be deleted or private)");
        assert_eq!(
            FetchError::LoginRequired.to_string(),
            "This is a private account - login required"
        );
        assert_eq!(
            FetchError::RateLimited.to_string(),
            "Rate limited by Instagram - please try again later"
        );
        assert_eq!(
            FetchError::Unknown("connection reset".into()).to_string(),
            "Error: connection reset"
        );
    }

    #[test]
    fn test_fetch_error_category() {
        assert_eq!(FetchError::NotFound.category(), "not_found");
        assert_eq!(FetchError::LoginRequired.category(), "login_required");
        assert_eq!(FetchError::RateLimited.category(), "rate_limited");
        assert_eq!(FetchError::Unknown(String::new()).category(), "unknown");
    }
}
