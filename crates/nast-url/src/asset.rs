//! Asset URL classification and rewriting.

use std::borrow::Cow;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

use crate::id::to_no_dash_id;

/// Canonical host of the document service.
pub const NOTION_HOST: &str = "https://www.notion.so";

/// Signed S3 storage for uploaded files.
static SECURE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://s3.+\.amazonaws\.com/secure\.notion-static\.com/")
        .expect("invalid secure url regex")
});

/// Paths served from the canonical host (`/image/...` or `/images/...`).
static RELATIVE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/images?/").expect("invalid relative path regex"));

/// Link to a block on a page: `https://www.notion.so/<page>#<block id>`.
static HASH_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.notion\.so/.+#([\da-f-]+)$").expect("invalid hash link regex")
});

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whether the URL points into signed S3 storage.
#[must_use]
pub fn is_secure_url(url: &str) -> bool {
    SECURE_URL_RE.is_match(url)
}

/// Whether the URL is a path relative to the canonical host.
#[must_use]
pub fn is_relative_path(url: &str) -> bool {
    RELATIVE_PATH_RE.is_match(url)
}

/// Rewrite an image source into a publicly reachable URL.
///
/// Signed URLs are routed through the `signed/` proxy with `width` (when given)
/// and the owning block reference as query parameters. Relative paths get the
/// canonical host prepended. Anything else is returned unchanged.
#[must_use]
pub fn normalize_image_url(block_id: &str, url: &str, width: Option<f64>) -> String {
    if is_secure_url(url) {
        let mut params = Vec::with_capacity(2);
        if let Some(width) = width.filter(|w| w.is_finite() && w.abs() > f64::EPSILON) {
            params.push(format!("width={}", format_number(width)));
        }
        params.push(format!("table=block&id={block_id}"));
        format!("{}?{}", signed_base(url), params.join("&"))
    } else if is_relative_path(url) {
        format!("{NOTION_HOST}{url}")
    } else {
        url.to_owned()
    }
}

/// Rewrite a file, video, audio or embed source into a publicly reachable URL.
///
/// Same classification as [`normalize_image_url`], without a width hint.
#[must_use]
pub fn normalize_file_url(block_id: &str, url: &str) -> String {
    normalize_image_url(block_id, url, None)
}

/// Turn a link to a block on a Notion page into a local `#anchor`.
///
/// Any other input is returned unchanged.
#[must_use]
pub fn to_local_anchor(url: &str) -> Cow<'_, str> {
    match HASH_LINK_RE.captures(url) {
        Some(caps) => Cow::Owned(format!("#{}", to_no_dash_id(&caps[1]))),
        None => Cow::Borrowed(url),
    }
}

/// `signed/` proxy URL for a secure asset, without query parameters.
fn signed_base(url: &str) -> String {
    let clean = url.split_once('?').map_or(url, |(base, _)| base);
    // Old uploads use the dotted regional host name
    let clean = clean.replacen("s3.us-west", "s3-us-west", 1);
    format!(
        "{NOTION_HOST}/signed/{}",
        utf8_percent_encode(&clean, URI_COMPONENT_SET)
    )
}

/// Format a width the way JavaScript prints numbers (`640`, not `640.0`).
#[allow(clippy::cast_possible_truncation)]
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SECURE: &str = "https://s3.us-west-2.amazonaws.com/secure.notion-static.com/abc";

    #[test]
    fn test_is_secure_url() {
        assert!(is_secure_url(SECURE));
        assert!(is_secure_url(
            "https://s3-us-west-2.amazonaws.com/secure.notion-static.com/x/y.png"
        ));
        assert!(!is_secure_url("https://example.com/secure.notion-static.com/abc"));
    }

    #[test]
    fn test_is_relative_path() {
        assert!(is_relative_path("/image/foo.png"));
        assert!(is_relative_path("/images/foo.png"));
        assert!(!is_relative_path("/img/foo.png"));
        assert!(!is_relative_path("images/foo.png"));
    }

    #[test]
    fn test_signed_url_strips_query() {
        let url = format!("{SECURE}?X-Amz=1");
        assert_eq!(
            normalize_image_url("B1", &url, None),
            "https://www.notion.so/signed/https%3A%2F%2Fs3-us-west-2.amazonaws.com%2Fsecure.notion-static.com%2Fabc?table=block&id=B1"
        );
    }

    #[test]
    fn test_signed_url_with_width() {
        assert_eq!(
            normalize_image_url("B1", SECURE, Some(640.0)),
            "https://www.notion.so/signed/https%3A%2F%2Fs3-us-west-2.amazonaws.com%2Fsecure.notion-static.com%2Fabc?width=640&table=block&id=B1"
        );
    }

    #[test]
    fn test_signed_url_fractional_width() {
        let url = normalize_image_url("B1", SECURE, Some(320.5));
        assert!(url.contains("?width=320.5&table=block&id=B1"));
    }

    #[test]
    fn test_signed_url_zero_width_ignored() {
        let url = normalize_image_url("B1", SECURE, Some(0.0));
        assert!(url.ends_with("?table=block&id=B1"));
    }

    #[test]
    fn test_signed_file_url() {
        let url = format!("{SECURE}/report.pdf?X-Amz-Signature=abc");
        assert_eq!(
            normalize_file_url("B2", &url),
            "https://www.notion.so/signed/https%3A%2F%2Fs3-us-west-2.amazonaws.com%2Fsecure.notion-static.com%2Fabc%2Freport.pdf?table=block&id=B2"
        );
    }

    #[test]
    fn test_relative_path_gets_host() {
        assert_eq!(
            normalize_image_url("B1", "/images/foo.png", None),
            "https://www.notion.so/images/foo.png"
        );
        assert_eq!(
            normalize_image_url("B1", "/image/foo.png", Some(100.0)),
            "https://www.notion.so/image/foo.png"
        );
    }

    #[test]
    fn test_absolute_url_unchanged() {
        assert_eq!(
            normalize_image_url("B1", "https://example.com/x.png", None),
            "https://example.com/x.png"
        );
        assert_eq!(
            normalize_file_url("B1", "https://example.com/x.pdf?a=1"),
            "https://example.com/x.pdf?a=1"
        );
    }

    #[test]
    fn test_emoji_icon_unchanged() {
        assert_eq!(normalize_image_url("B1", "🚀", None), "🚀");
    }

    #[test]
    fn test_to_local_anchor() {
        assert_eq!(
            to_local_anchor("https://www.notion.so/My-Page-0eeee000ccccbbbbaaaa123450000000#1234abcd5678ef901234abcd5678ef90"),
            "#1234abcd5678ef901234abcd5678ef90"
        );
    }

    #[test]
    fn test_to_local_anchor_strips_dashes() {
        assert_eq!(
            to_local_anchor("https://www.notion.so/page#1234abcd-5678-ef90-1234-abcd5678ef90"),
            "#1234abcd5678ef901234abcd5678ef90"
        );
    }

    #[test]
    fn test_to_local_anchor_other_urls_unchanged() {
        assert_eq!(to_local_anchor("https://example.com/a#b"), "https://example.com/a#b");
        assert_eq!(
            to_local_anchor("https://www.notion.so/page"),
            "https://www.notion.so/page"
        );
        assert!(matches!(to_local_anchor("#already"), Cow::Borrowed(_)));
    }
}
