//! High-level viewer API for Marten.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - fetch or read HTML and render it to Markdown
//! - **History** - back/forward list with forward truncation
//! - **Session** - a headless navigation shell ([`Browser`]) tying the two together
//!
//! The fetcher owns all network policy; rendering never touches the network.

pub mod history;
pub mod page;
pub mod session;

pub use history::History;
pub use marten_common as common;
pub use marten_dom as dom;
pub use marten_html as html;
pub use marten_markdown as markdown;
pub use page::{LoadError, Page, load_document};
pub use session::{Browser, BrowserConfig, DEFAULT_HOME_URL, Status};
