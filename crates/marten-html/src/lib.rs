//! HTML parsing for the Marten viewer.
//!
//! # Scope
//!
//! Tree construction is delegated to `html5ever`, which implements the
//! [WHATWG parsing algorithm](https://html.spec.whatwg.org/multipage/parsing.html)
//! in full. This crate only:
//! - runs the parser over a complete input string,
//! - copies the resulting `RcDom` into a [`marten_dom::DomTree`], keeping
//!   documents, elements, and text (`<template>` content included), and
//! - renders a tree dump for debugging.
//!
//! # Not Supported
//!
//! - Streaming/incremental input

/// Debug dump of a parsed tree.
pub mod dump;
/// html5ever bridge.
pub mod parser;

pub use dump::dump_tree;
pub use parser::{ParseError, ParsedDocument, parse_document};
