//! A rendered page and the loader that produces one.

use marten_common::net::{Fetch, FetchError};
use marten_common::url::{file_url, has_http_scheme};
use marten_dom::{DomTree, NodeId};
use marten_html::parse_document;
use marten_markdown::text::collapse_whitespace;
use marten_markdown::{RenderOptions, render_document_with};
use std::fmt::Display;
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a local file
    #[error("failed to read '{path}': {source}")]
    File {
        /// The path as given.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Failed to fetch a URL
    #[error(transparent)]
    Network(#[from] FetchError),
}

/// A document rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Where the document was finally loaded from.
    pub url: String,
    /// Collapsed text of the first `<title>`, if any.
    pub title: Option<String>,
    /// The rendered Markdown.
    pub markdown: String,
    /// Parse errors the tree builder recovered from.
    pub parse_issues: Vec<String>,
}

impl Page {
    /// Parse and render `html` that was loaded from `url`.
    ///
    /// An unparseable document still yields a page whose content is the
    /// parser diagnostic.
    #[must_use]
    pub fn from_html(html: &str, url: &str, options: &RenderOptions) -> Self {
        match parse_document(html) {
            Ok(parsed) => Self {
                url: url.to_string(),
                title: document_title(&parsed.dom),
                markdown: render_document_with(&parsed.dom, url, options),
                parse_issues: parsed.parse_issues,
            },
            Err(e) => Self {
                url: url.to_string(),
                title: None,
                markdown: format!("Error parsing HTML: {e}"),
                parse_issues: Vec::new(),
            },
        }
    }

    /// The page shown in place of content when loading `url` failed.
    #[must_use]
    pub fn error(url: &str, error: &impl Display) -> Self {
        Self {
            url: url.to_string(),
            title: None,
            markdown: format!(
                "# Error Loading Page\n\n**{error}**\n\nPlease check the URL and try again."
            ),
            parse_issues: Vec::new(),
        }
    }
}

/// [§ 4.2.2 The title element](https://html.spec.whatwg.org/multipage/semantics.html#the-title-element)
///
/// "The title element represents the document's title or name." Returns the
/// first `<title>` in tree order, whitespace collapsed, or `None` when absent
/// or blank.
#[must_use]
pub fn document_title(dom: &DomTree) -> Option<String> {
    let title = dom.find_element(NodeId::ROOT, "title")?;
    let text = collapse_whitespace(&dom.text_content(title));
    (!text.is_empty()).then_some(text)
}

/// Load a document from a file path or URL.
///
/// `http://` and `https://` addresses go through `fetcher`; anything else is
/// read from the local filesystem and rendered with a `file://` base URL.
///
/// # Errors
///
/// Returns [`LoadError::File`] if the file cannot be read, or
/// [`LoadError::Network`] if the fetch fails.
pub fn load_document(
    path: &str,
    fetcher: &impl Fetch,
    options: &RenderOptions,
) -> Result<Page, LoadError> {
    if has_http_scheme(path) {
        let fetched = fetcher.fetch(path)?;
        return Ok(Page::from_html(&fetched.body, &fetched.final_url, options));
    }

    let html = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_string(),
        source,
    })?;
    let base_url = file_url(Path::new(path)).unwrap_or_default();
    Ok(Page::from_html(&html, &base_url, options))
}
