//! HTTP fetch utilities for the Marten viewer.
//!
//! Provides the blocking HTTP GET used by the page loader. The fetcher owns
//! the network policy (timeout and redirect cap); the renderer never performs
//! I/O.

use crate::url::normalize_user_url;
use crate::warning::warn_once;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of redirects followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Errors produced while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The redirect chain exceeded the configured cap.
    #[error("too many redirects")]
    TooManyRedirects,
    /// Timeout, DNS, connection or protocol failure.
    #[error("failed to fetch: {0}")]
    Request(#[source] reqwest::Error),
    /// The server answered with something other than `200 OK`.
    #[error("HTTP {code}: {status}")]
    Status {
        /// Numeric status code.
        code: u16,
        /// Status line, e.g. `404 Not Found`.
        status: String,
    },
    /// The response body could not be read or decoded.
    #[error("failed to read response: {0}")]
    Body(#[source] reqwest::Error),
}

/// Network policy for [`HttpFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Redirects followed before failing with [`FetchError::TooManyRedirects`].
    pub max_redirects: usize,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// A fetched document: raw body plus the URL it was finally served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Response body decoded as text.
    pub body: String,
    /// URL after following redirects.
    pub final_url: String,
}

/// Anything that can turn a user-entered address into a fetched page.
///
/// The browser session is generic over this so tests can substitute a
/// canned source for the network.
pub trait Fetch {
    /// Fetch `input`, prefixing `https://` when it carries no scheme.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why no page could be produced.
    fn fetch(&self, input: &str) -> Result<FetchedPage, FetchError>;
}

/// Blocking HTTP fetcher backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    /// Build a fetcher with the given network policy.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the TLS backend or client cannot be
    /// initialized.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, input: &str) -> Result<FetchedPage, FetchError> {
        let url = normalize_user_url(input);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(|e| {
                if e.is_redirect() {
                    FetchError::TooManyRedirects
                } else {
                    FetchError::Request(e)
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                code: status.as_u16(),
                status: status.to_string(),
            });
        }

        let final_url = response.url().to_string();
        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            && !is_html_content_type(content_type)
        {
            warn_once(
                "net",
                &format!("'{final_url}' is served as '{content_type}', rendering it as HTML anyway"),
            );
        }

        let body = response.text().map_err(FetchError::Body)?;
        Ok(FetchedPage { body, final_url })
    }
}

/// Returns true for media types the renderer is meant for.
///
/// Parameters such as `; charset=utf-8` are ignored.
#[must_use]
pub fn is_html_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();
    essence.eq_ignore_ascii_case("text/html")
        || essence.eq_ignore_ascii_case("application/xhtml+xml")
}
