//! Request handlers for the three API endpoints.
//!
//! Input is validated on entry into an `ExtractRequest`; both extract
//! endpoints then share `extract_post`.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    response::Json,
};
use serde_json::{Map, Value};

use super::types::{ExtractResponse, HealthResponse};
use super::AppState;
use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::instagram::{extract_shortcode, PostFetcher, PostMetadata};

/// A validated extract request: a non-empty `url` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    pub url: String,
}

impl ExtractRequest {
    /// Validate a POST body against `{"url": "<non-empty string>"}`.
    ///
    /// Anything that is not a JSON object, or an object without `url`, is a
    /// missing parameter; a `url` that is empty or not a string is an invalid one.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body).map_err(|_| AppError::MissingBodyUrl)?;

        match object.get("url") {
            None => Err(AppError::MissingBodyUrl),
            Some(Value::String(url)) if !url.is_empty() => Ok(Self { url: url.clone() }),
            Some(_) => Err(AppError::InvalidUrl),
        }
    }

    /// Read the first `url` parameter from a raw query string.
    pub fn from_query(query: Option<&str>) -> AppResult<Self> {
        let url = query.and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "url")
                .map(|(_, value)| value.into_owned())
        });

        match url {
            Some(url) if !url.is_empty() => Ok(Self { url }),
            _ => Err(AppError::MissingQueryUrl),
        }
    }
}

/// Resolve the shortcode in `url` and fetch the post.
pub async fn extract_post(fetcher: &PostFetcher, url: &str) -> AppResult<PostMetadata> {
    let Some(shortcode) = extract_shortcode(url) else {
        log::info!("No Instagram shortcode in {:?}", url);
        return Err(AppError::InvalidInstagramUrl);
    };

    Ok(fetcher.fetch(&shortcode).await?)
}

/// GET /health: fixed acknowledgment.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: config::HEALTH_MESSAGE,
    })
}

/// POST /extract: `url` from the JSON body.
pub async fn extract_handler(State(state): State<AppState>, body: Bytes) -> AppResult<Json<ExtractResponse>> {
    let request = ExtractRequest::from_body(&body)?;
    let data = extract_post(&state.fetcher, &request.url).await?;
    Ok(Json(ExtractResponse::ok(data)))
}

/// GET /extract-simple: `url` from the query string.
pub async fn extract_simple_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Json<ExtractResponse>> {
    let request = ExtractRequest::from_query(query.as_deref())?;
    let data = extract_post(&state.fetcher, &request.url).await?;
    Ok(Json(ExtractResponse::ok(data)))
}
