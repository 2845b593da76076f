//! URL helpers.
//!
//! [URL Standard](https://url.spec.whatwg.org/)

use ::url::Url;
use std::path::Path;

/// Prefix `https://` onto user input that carries no `http(s)` scheme.
///
/// Only `http://` and `https://` count as a scheme here; input such as
/// `example.com:8080` is treated as a host, not as a URL with scheme
/// `example.com`.
#[must_use]
pub fn normalize_user_url(input: &str) -> String {
    let input = input.trim();
    if has_http_scheme(input) {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Returns true if `input` starts with `http://` or `https://` (ASCII case-insensitive).
#[must_use]
pub fn has_http_scheme(input: &str) -> bool {
    starts_with_ignore_case(input, "http://") || starts_with_ignore_case(input, "https://")
}

fn starts_with_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// [§ 2.5 URLs](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#resolving-urls)
///
/// Resolve a potentially relative URL against a parsed base URL.
///
/// Returns `href` unchanged when the join fails (for example `href` is
/// not a valid relative reference).
#[must_use]
pub fn resolve_url(href: &str, base: &Url) -> String {
    base.join(href)
        .map_or_else(|_| href.to_string(), |resolved| resolved.to_string())
}

/// Parse a base URL string, returning `None` if it is empty or invalid.
#[must_use]
pub fn parse_base_url(base_url: &str) -> Option<Url> {
    if base_url.is_empty() {
        return None;
    }
    Url::parse(base_url).ok()
}

/// `file://` URL for a local path, made absolute first.
///
/// Returns `None` if the path cannot be canonicalized.
#[must_use]
pub fn file_url(path: &Path) -> Option<String> {
    let absolute = path.canonicalize().ok()?;
    Url::from_file_path(absolute).ok().map(String::from)
}
