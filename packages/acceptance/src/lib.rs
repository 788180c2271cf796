//! Quilt acceptance steps - probe, browse and check pages served by a running Quilt instance.
//!
//! This crate provides the operations behind the cucumber steps in
//! `tests/bdd`, so they can also be driven directly against any host.
//!
//! # Example
//!
//! ```
//! use quilt_acceptance::config::{page_url, Target};
//!
//! let url = page_url(&Target::default(), "about").unwrap();
//! assert_eq!(url.as_str(), "http://quilt/about");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Target host, timeouts, locator and URL construction
//! - [`error`]: Error types and Result alias
//! - [`probe`]: TCP connectivity probe
//! - [`session`]: Browser session trait and its plain-HTTP implementation
//! - [`page`]: Element lookup and title matching
//! - [`steps`]: The three step operations

pub mod config;
pub mod error;
pub mod page;
pub mod probe;
pub mod session;
pub mod steps;

pub use config::Target;
pub use error::{AcceptanceError, Result};
pub use session::{BrowserSession, HttpSession, Page};
pub use steps::{browse_to, running_instance, title_shows_up};
