//! HTML-to-Markdown rendering for the Marten viewer.
//!
//! # Pipeline
//!
//! ```text
//! DomTree → RenderContext → render_node (walk) → buffer → finish → String
//!                               │
//!                  text::push_normalized / table::write_pipe_table
//! ```
//!
//! Rendering is synchronous and performs no I/O. Every call builds its own
//! [`RenderContext`], so independent calls may run concurrently.
//!
//! # Not Supported
//!
//! - CSS: nothing about layout or visibility is consulted
//! - Round-tripping back to HTML

pub mod context;
pub mod postprocess;
pub mod render;
pub mod table;
pub mod tags;
pub mod text;

pub use context::{RenderContext, RenderOptions};
pub use postprocess::finish;
pub use tags::{Handler, Tag, TagRule};

use marten_dom::DomTree;
use marten_html::parse_document;

/// Render a parsed document with default options.
///
/// `base_url` is where the document came from. With default options it is not
/// consulted: links and image sources are emitted exactly as written.
#[must_use]
pub fn render_document(tree: &DomTree, base_url: &str) -> String {
    render_document_with(tree, base_url, &RenderOptions::default())
}

/// Render a parsed document.
#[must_use]
pub fn render_document_with(tree: &DomTree, base_url: &str, options: &RenderOptions) -> String {
    let mut ctx = RenderContext::new(base_url, options);
    render::render_node(tree, tree.root(), &mut ctx);
    finish(&ctx.into_output())
}

/// Parse and render an HTML string.
///
/// A document that cannot be parsed yields a one-line diagnostic in place of
/// the content, never an error.
#[must_use]
pub fn render_html(html: &str, base_url: &str, options: &RenderOptions) -> String {
    match parse_document(html) {
        Ok(parsed) => render_document_with(&parsed.dom, base_url, options),
        Err(e) => format!("Error parsing HTML: {e}"),
    }
}
