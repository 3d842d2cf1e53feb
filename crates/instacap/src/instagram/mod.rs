//! Instagram post lookup.
//!
//! - `shortcode`: pulls the post shortcode out of a URL
//! - `source`: the collaborator seam (`PostSource` / `PostSession`)
//! - `client`: `InstagramClient`, the GraphQL-backed collaborator
//! - `fetcher`: `PostFetcher`, one fresh session per lookup, result normalized to `PostMetadata`

pub mod client;
pub mod error;
pub mod fetcher;
pub mod shortcode;
pub mod source;
pub mod types;

pub use client::InstagramClient;
pub use error::FetchError;
pub use fetcher::PostFetcher;
pub use shortcode::extract_shortcode;
pub use source::{InstagramPost, PostSession, PostSource};
pub use types::{PostMetadata, Shortcode};
