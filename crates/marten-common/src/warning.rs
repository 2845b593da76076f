//! Viewer warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the fetcher, the renderer, and the browser session to report
//! conditions that degrade output without failing it.

use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether progress notes are printed.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Warn about a degraded condition (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("net", "content type 'application/pdf' is not HTML");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[Marten {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call when loading a new page)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Turn progress notes on or off for the whole process.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Returns true when progress notes are enabled.
#[must_use]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print a dimmed progress line such as `[Marten browser] Loading ...`.
///
/// Silent unless [`set_verbose`] was called with `true`.
pub fn note(component: &str, message: &str) {
    if is_verbose() {
        eprintln!("{}", format!("[Marten {component}] {message}").dimmed());
    }
}
