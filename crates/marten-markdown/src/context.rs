//! Per-call rendering state.

use marten_common::url::{parse_base_url, resolve_url};
use marten_common::warning::warn_once;
use std::borrow::Cow;
use std::collections::HashMap;
use url::Url;

/// Caller-facing switches for a render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Resolve `href` and `src` values against the base URL.
    ///
    /// Off by default: links are emitted exactly as written in the document.
    pub resolve_links: bool,
}

/// Mutable state threaded through one tree walk.
///
/// Created fresh for every render call and dropped at its end, so
/// independent calls never share anything.
#[derive(Debug)]
pub struct RenderContext {
    out: String,
    in_pre: bool,
    list_depth: usize,
    /// Depth → next ordinal. An entry exists only while the ordered list at
    /// that depth is being visited.
    ordinals: HashMap<usize, usize>,
    link_base: Option<Url>,
}

impl RenderContext {
    /// Fresh context for one render call.
    #[must_use]
    pub fn new(base_url: &str, options: &RenderOptions) -> Self {
        let link_base = if options.resolve_links {
            let parsed = parse_base_url(base_url);
            if parsed.is_none() {
                warn_once(
                    "markdown",
                    &format!("cannot resolve links against base URL '{base_url}'"),
                );
            }
            parsed
        } else {
            None
        };

        Self {
            out: String::new(),
            in_pre: false,
            list_depth: 0,
            ordinals: HashMap::new(),
            link_base,
        }
    }

    /// Append raw text to the output buffer.
    pub fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// The output buffer, for writers that append directly.
    pub const fn buffer(&mut self) -> &mut String {
        &mut self.out
    }

    /// Consume the context, returning the raw (not post-processed) buffer.
    #[must_use]
    pub fn into_output(self) -> String {
        self.out
    }

    /// True while inside a `<pre>` subtree.
    #[must_use]
    pub const fn in_pre(&self) -> bool {
        self.in_pre
    }

    /// Enter `<pre>` mode, returning the previous flag for [`Self::restore_pre`].
    pub const fn enter_pre(&mut self) -> bool {
        let previous = self.in_pre;
        self.in_pre = true;
        previous
    }

    /// Restore the flag saved by [`Self::enter_pre`].
    pub const fn restore_pre(&mut self, previous: bool) {
        self.in_pre = previous;
    }

    /// Current list nesting depth.
    #[must_use]
    pub const fn list_depth(&self) -> usize {
        self.list_depth
    }

    /// Enter a `<ul>` or `<ol>`.
    pub fn enter_list(&mut self, ordered: bool) {
        self.list_depth += 1;
        if ordered {
            let _ = self.ordinals.insert(self.list_depth, 1);
        }
    }

    /// Leave the list entered by the matching [`Self::enter_list`].
    pub fn exit_list(&mut self, ordered: bool) {
        if ordered {
            let _ = self.ordinals.remove(&self.list_depth);
        }
        self.list_depth = self.list_depth.saturating_sub(1);
    }

    /// Next ordinal for the list at the current depth, if that list is ordered.
    ///
    /// Advances the counter.
    pub fn next_ordinal(&mut self) -> Option<usize> {
        let counter = self.ordinals.get_mut(&self.list_depth)?;
        let current = *counter;
        *counter += 1;
        Some(current)
    }

    /// The link target to emit for an `href`/`src` value.
    ///
    /// Unchanged unless link resolution is on and a valid base URL was given.
    #[must_use]
    pub fn link_target<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match &self.link_base {
            Some(base) if !raw.is_empty() => Cow::Owned(resolve_url(raw, base)),
            _ => Cow::Borrowed(raw),
        }
    }
}
