use lazy_regex::regex;

use super::types::Shortcode;

/// Extract the post shortcode from an Instagram URL.
///
/// Supports `/p/<code>`, `/reel/<code>` and `/reels/<code>` on any
/// `instagram.com` host (`www.`, `m.`, or bare), with or without scheme,
/// query string, or trailing slash. Only the first match in the input is used
/// and nothing else about the URL is validated.
///
/// ```
/// use instacap::extract_shortcode;
///
/// let code = extract_shortcode("https://www.instagram.com/reel/ABC123/?igsh=xyz").unwrap();
/// assert_eq!(code.as_str(), "ABC123");
/// assert!(extract_shortcode("not a url").is_none());
/// ```
pub fn extract_shortcode(url: &str) -> Option<Shortcode> {
    regex!(r"instagram\.com/(?:p|reel|reels)/([A-Za-z0-9_-]+)")
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| Shortcode::new(m.as_str()))
}
