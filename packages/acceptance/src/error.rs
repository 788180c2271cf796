//! Error types for the acceptance steps.
//!
//! Every failure a step can hit maps to one variant, grouped by where it
//! happens: reaching the host, loading a page, or checking what the page shows.

use thiserror::Error;

/// Main error type for the acceptance steps.
#[derive(Debug, Error)]
pub enum AcceptanceError {
    /// TCP connection to the target could not be opened.
    #[error("Could not connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// TCP connection did not open before the probe timeout.
    #[error("Timed out after {timeout:?} connecting to {target}")]
    ConnectTimeout {
        target: String,
        timeout: std::time::Duration,
    },

    /// Connection opened but did not report itself as started.
    #[error("Connection to {target} did not start")]
    NotStarted { target: String },

    /// Path contains characters that cannot be placed in a URL.
    #[error("Invalid path: '{0}'. Whitespace, control characters and <>\"{{}}|\\^` cannot appear in a URL")]
    InvalidPath(String),

    /// Concatenated page URL did not parse.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Page load failed in transport.
    #[error("Failed to load {url}: {source}")]
    Navigation {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// A page lookup was attempted before any page was visited.
    #[error("No page has been loaded in this session")]
    NoPageLoaded,

    /// Structural locator is not a valid selector.
    #[error("Invalid locator '{locator}': {reason}")]
    InvalidLocator { locator: String, reason: String },

    /// Nothing on the current page matches the locator.
    #[error("Element not found: '{locator}' on {url}")]
    ElementNotFound { locator: String, url: String },

    /// Heading text does not contain the expected title.
    #[error("Expected title containing \"{expected}\", found \"{actual}\"")]
    TitleMismatch { expected: String, actual: String },
}

/// Result type alias for acceptance step operations.
pub type Result<T> = std::result::Result<T, AcceptanceError>;
