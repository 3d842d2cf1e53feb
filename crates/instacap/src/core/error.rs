use thiserror::Error;

use crate::instagram::FetchError;

/// Centralized error type for the API
///
/// Every request either succeeds or ends in one of these variants. Input
/// validation failures are detected before Instagram is contacted; fetch
/// failures carry the collaborator's categorized outcome. The `Display` text
/// is exactly what callers receive in the `error` field.
///
/// # Example
///
/// ```
/// use instacap::AppError;
///
/// assert_eq!(AppError::InvalidInstagramUrl.to_string(), "Invalid Instagram URL format");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// POST body is not a JSON object or has no `url` field
    #[error("Missing \"url\" parameter in request body")]
    MissingBodyUrl,

    /// `url` field is present but empty or not a string
    #[error("Invalid URL format")]
    InvalidUrl,

    /// `url` query parameter is absent or empty
    #[error("Missing \"url\" query parameter")]
    MissingQueryUrl,

    /// No post shortcode could be found in the supplied URL
    #[error("Invalid Instagram URL format")]
    InvalidInstagramUrl,

    /// Instagram lookup failed
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AppError {
    /// Whether the error was raised before any outbound call was made
    pub fn is_validation(&self) -> bool {
        !matches!(self, AppError::Fetch(_))
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
