//! Tests for document loading.

use marten_browser::common::net::{Fetch, FetchError, FetchedPage};
use marten_browser::markdown::RenderOptions;
use marten_browser::{LoadError, Page, load_document};
use std::fs;
use std::path::PathBuf;

/// Fetcher that must never be called
struct NoNetwork;

impl Fetch for NoNetwork {
    fn fetch(&self, _input: &str) -> Result<FetchedPage, FetchError> {
        Err(FetchError::TooManyRedirects)
    }
}

/// Helper to write a scratch HTML file
fn scratch_file(name: &str, html: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("marten-{}-{name}", std::process::id()));
    fs::write(&path, html).unwrap();
    path
}

#[test]
fn test_load_local_file() {
    let path = scratch_file("local.html", "<title> Local  file </title><p>Body</p>");
    let page = load_document(path.to_str().unwrap(), &NoNetwork, &RenderOptions::default()).unwrap();
    assert_eq!(page.title.as_deref(), Some("Local file"));
    assert!(page.markdown.ends_with("Body"));
    assert!(page.url.starts_with("file://"));
    fs::remove_file(path).unwrap();
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_document("/no/such/marten.html", &NoNetwork, &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, LoadError::File { .. }));
    assert!(err.to_string().starts_with("failed to read '/no/such/marten.html'"));
}

#[test]
fn test_urls_go_through_the_fetcher() {
    let err = load_document("https://example.com", &NoNetwork, &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, LoadError::Network(FetchError::TooManyRedirects)));
    assert_eq!(err.to_string(), "too many redirects");
}

#[test]
fn test_page_from_html_collects_issues() {
    let page = Page::from_html("<p><b>x</p></i>", "https://t.test/", &RenderOptions::default());
    assert!(!page.parse_issues.is_empty());
    assert_eq!(page.title, None);
    assert_eq!(page.url, "https://t.test/");
}

#[test]
fn test_blank_title_is_none() {
    let page = Page::from_html("<title>   </title>", "", &RenderOptions::default());
    assert_eq!(page.title, None);
}
