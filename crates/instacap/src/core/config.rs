use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Host the HTTP API binds to
/// Read from HOST environment variable
/// Default: 0.0.0.0
pub static HOST: Lazy<String> = Lazy::new(|| env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()));

/// Port the HTTP API binds to
/// Read from PORT environment variable, falls back to 5000 when unset or not a number
pub static PORT: Lazy<u16> = Lazy::new(|| {
    env::var("PORT")
        .ok()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
});

pub const DEFAULT_PORT: u16 = 5000;

/// Message returned by the health endpoint
pub const HEALTH_MESSAGE: &str = "Instagram Caption Extractor API is running";

/// Instagram web API configuration
pub mod instagram {
    use super::{env, Lazy};

    /// GraphQL endpoint used for post lookups
    /// Read from INSTAGRAM_GRAPHQL_URL environment variable
    pub static GRAPHQL_URL: Lazy<String> = Lazy::new(|| {
        env::var("INSTAGRAM_GRAPHQL_URL").unwrap_or_else(|_| "https://www.instagram.com/graphql/query".to_string())
    });

    /// Persisted query id for `xdt_shortcode_media`.
    /// Instagram rotates these every few weeks, override with INSTAGRAM_DOC_ID when lookups start failing.
    pub static DOC_ID: Lazy<String> =
        Lazy::new(|| env::var("INSTAGRAM_DOC_ID").unwrap_or_else(|_| "8845758582119845".to_string()));

    /// Optional proxy for outbound Instagram calls
    /// Read from INSTAGRAM_PROXY environment variable
    /// Example: socks5://127.0.0.1:1080
    pub static PROXY: Lazy<Option<String>> = Lazy::new(|| {
        env::var("INSTAGRAM_PROXY")
            .ok()
            .and_then(|s| if s.trim().is_empty() { None } else { Some(s) })
    });

    /// Internal app ID (public, embedded in the web app)
    pub const APP_ID: &str = "936619743392459";

    /// Facebook LSD token (anti-CSRF, public static value used by web clients)
    pub const LSD_TOKEN: &str = "AVqbxe3J_YA";

    /// Facebook ASBD ID (public, embedded in the web app)
    pub const ASBD_ID: &str = "129477";

    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Overall timeout for a single Instagram request (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// TCP/TLS connect timeout (in seconds)
    pub const CONNECT_TIMEOUT_SECS: u64 = 15;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }

    /// Connect timeout duration
    pub fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_TIMEOUT_SECS)
    }
}
