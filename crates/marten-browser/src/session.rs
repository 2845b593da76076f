//! Headless navigation session.
//!
//! [`Browser`] is the viewer shell without a window: it owns the fetcher,
//! the history, the current page and a status line, and exposes the
//! toolbar actions (navigate, back, forward, reload, home).

use crate::history::History;
use crate::page::Page;
use marten_common::net::{Fetch, FetchConfig, FetchError, HttpFetcher};
use marten_common::url::normalize_user_url;
use marten_common::warning::{clear_warnings, note};
use marten_markdown::RenderOptions;
use std::fmt;

/// Page opened by [`Browser::go_home`] unless configured otherwise.
pub const DEFAULT_HOME_URL: &str = "https://www.google.com";

/// Settings for a [`Browser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Page opened by [`Browser::go_home`].
    pub home_url: String,
    /// Network policy for the default HTTP fetcher.
    pub fetch: FetchConfig,
    /// Rendering switches.
    pub render: RenderOptions,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            fetch: FetchConfig::default(),
            render: RenderOptions::default(),
        }
    }
}

/// The status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Nothing loaded yet.
    Ready,
    /// A load is in progress.
    Loading,
    /// The page at this (final) URL is shown.
    Loaded(String),
    /// The last load failed with this message.
    Error(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready"),
            Self::Loading => write!(f, "Loading..."),
            Self::Loaded(url) => write!(f, "Loaded: {url}"),
            Self::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// A navigation session.
#[derive(Debug)]
pub struct Browser<F: Fetch = HttpFetcher> {
    fetcher: F,
    history: History,
    current_url: String,
    page: Option<Page>,
    status: Status,
    home_url: String,
    render: RenderOptions,
}

impl Browser<HttpFetcher> {
    /// Session backed by the network.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the HTTP client cannot be built.
    pub fn new(config: BrowserConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::with_fetcher(fetcher, config))
    }
}

impl<F: Fetch> Browser<F> {
    /// Session backed by any [`Fetch`] implementation.
    pub fn with_fetcher(fetcher: F, config: BrowserConfig) -> Self {
        Self {
            fetcher,
            history: History::new(),
            current_url: String::new(),
            page: None,
            status: Status::Ready,
            home_url: config.home_url,
            render: config.render,
        }
    }

    /// Open a user-entered address.
    ///
    /// Blank input is ignored. Otherwise the address gets `https://` when it
    /// has no scheme, is recorded in the history, and is loaded.
    pub fn navigate(&mut self, input: &str) -> Option<&Page> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let url = normalize_user_url(input);
        self.history.add(&url);
        Some(self.load(&url))
    }

    /// Load the previous history entry, if there is one.
    pub fn go_back(&mut self) -> Option<&Page> {
        let url = self.history.back()?.to_string();
        Some(self.load(&url))
    }

    /// Load the next history entry, if there is one.
    pub fn go_forward(&mut self) -> Option<&Page> {
        let url = self.history.forward()?.to_string();
        Some(self.load(&url))
    }

    /// Load the current URL again. Does nothing before the first load.
    pub fn reload(&mut self) -> Option<&Page> {
        if self.current_url.is_empty() {
            return None;
        }
        let url = self.current_url.clone();
        Some(self.load(&url))
    }

    /// Navigate to the home page.
    pub fn go_home(&mut self) -> Option<&Page> {
        let home = self.home_url.clone();
        self.navigate(&home)
    }

    /// True if [`Self::go_back`] would load something.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// True if [`Self::go_forward`] would load something.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// URL of the page on display: the post-redirect URL after a successful
    /// load, the requested URL after a failed one.
    #[must_use]
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// The page on display.
    #[must_use]
    pub const fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// The status line.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// The navigation history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    fn load(&mut self, url: &str) -> &Page {
        clear_warnings();
        self.current_url = url.to_string();
        self.status = Status::Loading;
        note("browser", &format!("Loading {url}"));

        let page = match self.fetcher.fetch(url) {
            Ok(fetched) => {
                let page = Page::from_html(&fetched.body, &fetched.final_url, &self.render);
                self.current_url.clone_from(&fetched.final_url);
                self.status = Status::Loaded(fetched.final_url);
                page
            }
            Err(e) => {
                self.status = Status::Error(e.to_string());
                Page::error(url, &e)
            }
        };
        note("browser", &self.status.to_string());

        self.page.insert(page)
    }
}
