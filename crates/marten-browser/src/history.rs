//! Back/forward navigation history.

/// Visited URLs with a current-position pointer.
///
/// Adding a URL while not at the tail discards the forward entries first,
/// the way a browser forgets "forward" once you follow a new link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    urls: Vec<String>,
    current: Option<usize>,
}

impl History {
    /// An empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            urls: Vec::new(),
            current: None,
        }
    }

    /// Record a visit to `url`.
    ///
    /// Forward entries are dropped first; then, if `url` equals the current
    /// entry, nothing else changes.
    pub fn add(&mut self, url: &str) {
        if let Some(current) = self.current {
            self.urls.truncate(current + 1);
        }

        if self.current() == Some(url) {
            return;
        }

        self.urls.push(url.to_string());
        self.current = Some(self.urls.len() - 1);
    }

    /// Step back one entry and return it, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        let index = self.current? - 1;
        self.current = Some(index);
        self.urls.get(index).map(String::as_str)
    }

    /// Step forward one entry and return it, or `None` at the end.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        let index = self.current.map_or(0, |c| c + 1);
        self.current = Some(index);
        self.urls.get(index).map(String::as_str)
    }

    /// True if [`Self::back`] would move.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.current.is_some_and(|c| c > 0)
    }

    /// True if [`Self::forward`] would move.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        let next = self.current.map_or(0, |c| c + 1);
        next < self.urls.len()
    }

    /// The current entry.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current
            .and_then(|c| self.urls.get(c))
            .map(String::as_str)
    }

    /// Every entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.urls
    }

    /// Position of the current entry in [`Self::entries`].
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.current
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// True if nothing has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
