//! InstagramClient: post lookups through Instagram's web GraphQL endpoint.
//!
//! Anonymous access only: public posts and reels resolve, private ones come
//! back as `LoginRequired`. Each session is a separate `reqwest::Client` with
//! its own cookie jar, so nothing Instagram sets on one lookup is replayed on
//! the next.
//!
//! The persisted query id (`doc_id`) rotates every few weeks; it is read from
//! `INSTAGRAM_DOC_ID` (see `core::config::instagram`).

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::core::config;
use crate::instagram::error::FetchError;
use crate::instagram::source::{InstagramPost, PostSession, PostSource};
use crate::instagram::types::Shortcode;

/// Instagram collaborator backed by the web GraphQL API.
#[derive(Debug, Clone)]
pub struct InstagramClient {
    endpoint: String,
    doc_id: String,
    proxy: Option<String>,
}

impl Default for InstagramClient {
    fn default() -> Self {
        Self::new()
    }
}

impl InstagramClient {
    /// Client configured from the environment (`INSTAGRAM_GRAPHQL_URL`,
    /// `INSTAGRAM_DOC_ID`, `INSTAGRAM_PROXY`).
    pub fn new() -> Self {
        Self::with_endpoint(
            config::instagram::GRAPHQL_URL.as_str(),
            config::instagram::DOC_ID.as_str(),
        )
        .with_proxy(config::instagram::PROXY.clone())
    }

    /// Client pointed at an explicit GraphQL endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>, doc_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            doc_id: doc_id.into(),
            proxy: None,
        }
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-ig-app-id", HeaderValue::from_static(config::instagram::APP_ID));
        headers.insert("x-fb-lsd", HeaderValue::from_static(config::instagram::LSD_TOKEN));
        headers.insert("x-asbd-id", HeaderValue::from_static(config::instagram::ASBD_ID));
        headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.instagram.com/"));
        headers.insert(ORIGIN, HeaderValue::from_static("https://www.instagram.com"));
        headers
    }

    fn build_http_client(&self) -> Result<reqwest::Client, FetchError> {
        let mut client_builder = reqwest::Client::builder()
            .user_agent(config::instagram::USER_AGENT)
            .default_headers(Self::default_headers())
            .cookie_store(true)
            .timeout(config::network::timeout())
            .connect_timeout(config::network::connect_timeout());

        // Proxying is controlled by INSTAGRAM_PROXY only, system proxy variables are ignored
        client_builder = client_builder.no_proxy();
        if let Some(ref proxy_url) = self.proxy {
            match reqwest::Proxy::all(proxy_url.trim()) {
                Ok(proxy) => {
                    log::debug!("InstagramClient: using proxy for GraphQL API");
                    client_builder = client_builder.proxy(proxy);
                }
                Err(e) => {
                    log::warn!("InstagramClient: failed to configure proxy: {}", e);
                }
            }
        }

        client_builder
            .build()
            .map_err(|e| FetchError::Unknown(format!("failed to create HTTP session: {}", e)))
    }
}

#[async_trait]
impl PostSource for InstagramClient {
    fn name(&self) -> &str {
        "instagram-graphql"
    }

    async fn open_session(&self) -> Result<Box<dyn PostSession>, FetchError> {
        let client = self.build_http_client()?;
        Ok(Box::new(GraphQlSession {
            client,
            endpoint: self.endpoint.clone(),
            doc_id: self.doc_id.clone(),
        }))
    }
}

/// One anonymous browsing session against the GraphQL endpoint.
struct GraphQlSession {
    client: reqwest::Client,
    endpoint: String,
    doc_id: String,
}

#[async_trait]
impl PostSession for GraphQlSession {
    async fn fetch_post(&self, shortcode: &Shortcode) -> Result<InstagramPost, FetchError> {
        let variables = serde_json::json!({ "shortcode": shortcode.as_str() }).to_string();

        log::debug!("InstagramClient: GraphQL POST for shortcode {}", shortcode);

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[
                ("doc_id", self.doc_id.as_str()),
                ("variables", variables.as_str()),
                ("lsd", config::instagram::LSD_TOKEN),
            ])
            .send()
            .await?;

        let status = response.status();
        let login_redirect = is_login_redirect(response.url());
        let body = response.text().await?;

        classify_response(status, login_redirect, &body)
    }
}

/// Whether the request ended on Instagram's login page after redirects.
fn is_login_redirect(url: &Url) -> bool {
    url.path().starts_with("/accounts/login")
}

/// Instagram's throttling wording ("Please wait a few minutes before you try again.").
fn asks_to_wait(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("wait a few minutes") || lower.contains("rate limit") || lower.contains("too many requests")
}

fn looks_like_login_page(body: &str) -> bool {
    body.trim_start().starts_with('<') && body.contains("/accounts/login")
}

fn preview(body: &str) -> String {
    body.chars().take(300).collect()
}

/// Map a raw GraphQL response to a post or a categorized failure.
fn classify_response(status: StatusCode, login_redirect: bool, body: &str) -> Result<InstagramPost, FetchError> {
    if login_redirect {
        return Err(FetchError::LoginRequired);
    }

    match status {
        StatusCode::TOO_MANY_REQUESTS => return Err(FetchError::RateLimited),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return Err(if asks_to_wait(body) {
                FetchError::RateLimited
            } else {
                FetchError::LoginRequired
            });
        }
        StatusCode::NOT_FOUND => return Err(FetchError::NotFound),
        s if !s.is_success() => {
            log::warn!("InstagramClient: unexpected HTTP {}: {}", s, preview(body));
            return Err(FetchError::Unknown(format!("HTTP error code {}", s.as_u16())));
        }
        _ => {}
    }

    let json: Value = serde_json::from_str(body).map_err(|e| {
        if looks_like_login_page(body) {
            return FetchError::LoginRequired;
        }
        log::error!("InstagramClient: GraphQL returned non-JSON ({}): {}", e, preview(body));
        FetchError::Unknown(format!("Failed to parse GraphQL response: {}", e))
    })?;

    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    if message.contains("login_required") || message.contains("checkpoint_required") {
        return Err(FetchError::LoginRequired);
    }
    if asks_to_wait(message) {
        return Err(FetchError::RateLimited);
    }
    if json.get("require_login").and_then(Value::as_bool) == Some(true) {
        return Err(FetchError::LoginRequired);
    }

    let Some(data) = json.get("data") else {
        let reason = if message.is_empty() {
            "GraphQL response has no data".to_string()
        } else {
            message.to_string()
        };
        return Err(FetchError::Unknown(reason));
    };

    let media = data
        .get("xdt_shortcode_media")
        .or_else(|| data.get("shortcode_media"))
        .filter(|v| !v.is_null())
        .ok_or(FetchError::NotFound)?;

    parse_media(media)
}

#[derive(Deserialize)]
struct RawMedia {
    #[serde(default)]
    is_video: bool,
    taken_at_timestamp: i64,
    owner: RawOwner,
    edge_media_to_caption: Option<RawEdges<RawCaption>>,
    edge_media_preview_like: Option<RawCount>,
    edge_liked_by: Option<RawCount>,
    edge_media_to_comment: Option<RawCount>,
    edge_media_to_parent_comment: Option<RawCount>,
}

#[derive(Deserialize)]
struct RawOwner {
    username: String,
}

#[derive(Deserialize)]
struct RawCount {
    count: i64,
}

#[derive(Deserialize)]
struct RawEdges<T> {
    #[serde(default = "Vec::new")]
    edges: Vec<RawEdge<T>>,
}

#[derive(Deserialize)]
struct RawEdge<T> {
    node: T,
}

#[derive(Deserialize)]
struct RawCaption {
    text: String,
}

fn parse_media(media: &Value) -> Result<InstagramPost, FetchError> {
    let raw = RawMedia::deserialize(media)
        .map_err(|e| FetchError::Unknown(format!("Unexpected post payload: {}", e)))?;

    let taken_at = DateTime::from_timestamp(raw.taken_at_timestamp, 0)
        .ok_or_else(|| FetchError::Unknown(format!("Invalid post timestamp: {}", raw.taken_at_timestamp)))?;

    let caption = raw
        .edge_media_to_caption
        .and_then(|c| c.edges.into_iter().next())
        .map(|edge| edge.node.text);

    let likes = raw
        .edge_media_preview_like
        .or(raw.edge_liked_by)
        .map(|c| c.count)
        .unwrap_or(0);

    let comments = raw
        .edge_media_to_comment
        .or(raw.edge_media_to_parent_comment)
        .map(|c| c.count)
        .unwrap_or(0);

    Ok(InstagramPost {
        caption,
        owner_username: raw.owner.username,
        likes,
        comments,
        taken_at,
        is_video: raw.is_video,
    })
}
