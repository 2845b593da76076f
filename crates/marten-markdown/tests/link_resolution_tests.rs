//! Tests for opt-in resolution of links against the base URL.

use marten_markdown::{RenderOptions, render_html};

/// Helper to render with link resolution on
fn resolved(html: &str, base_url: &str) -> String {
    let options = RenderOptions {
        resolve_links: true,
    };
    render_html(html, base_url, &options)
}

#[test]
fn test_relative_href_is_resolved() {
    assert_eq!(
        resolved("<a href=\"guide.html\">Guide</a>", "https://example.com/docs/index.html"),
        "[Guide](https://example.com/docs/guide.html)"
    );
}

#[test]
fn test_root_relative_src_is_resolved() {
    assert_eq!(
        resolved("<img src=\"/logo.png\" alt=\"Logo\">", "https://example.com/docs/"),
        "![Logo](https://example.com/logo.png)"
    );
}

#[test]
fn test_dead_links_stay_plain_text() {
    let base = "https://example.com/";
    assert_eq!(resolved("<a href=\"#top\">Top</a>", base), "Top");
    assert_eq!(resolved("<a href=\"javascript:go()\">Go</a>", base), "Go");
    assert_eq!(resolved("<a href=\"\">Y</a>", base), "Y");
}

#[test]
fn test_empty_src_is_not_resolved() {
    assert_eq!(resolved("<img alt=\"x\">", "https://example.com/"), "![x]()");
}

#[test]
fn test_invalid_base_leaves_links_untouched() {
    assert_eq!(
        resolved("<a href=\"guide.html\">Guide</a>", "not a url"),
        "[Guide](guide.html)"
    );
}

#[test]
fn test_resolution_is_off_by_default() {
    assert!(!RenderOptions::default().resolve_links);
}
