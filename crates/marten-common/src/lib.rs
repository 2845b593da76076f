//! Common utilities for the Marten viewer.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, de-duplicated terminal diagnostics
//! - **URL Helpers** - user input normalization and link resolution
//! - **Networking** - the blocking HTTP fetcher that feeds the renderer

pub mod net;
pub mod url;
pub mod warning;
