//! `systemshub` - A catalogue of game systems behind countdown-gated links
//!
//! This library provides the catalogue store, the read-only HTTP API over it,
//! the unlock countdown that gates each system's download link, and the
//! render-free view models for the list, detail and not-found pages.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod api;
pub mod catalogue;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod unlock;
pub mod view;

pub use api::{build_router, ApiError, AppState};
pub use catalogue::{Catalogue, Item, SiteConfig};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
