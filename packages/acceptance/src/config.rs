//! Configuration constants and URL construction for the acceptance steps.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::error::{AcceptanceError, Result};

/// Host name of the Quilt instance under test.
pub const TARGET_HOST: &str = "quilt";

/// Port the Quilt instance serves plain HTTP on.
pub const TARGET_PORT: u16 = 80;

/// Probe timeout in seconds.
///
/// Generous because the instance may still be starting when the suite begins.
pub const PROBE_TIMEOUT_SECS: u64 = 120;

/// Structural locator of the primary page heading: the `h1` directly inside
/// the `article` that sits directly in `body`.
pub const PRIMARY_HEADING: &str = "body > article > h1";

/// User agent string sent with every page load.
pub const USER_AGENT: &str = concat!("quilt-acceptance/", env!("CARGO_PKG_VERSION"));

/// A browse path may hold anything except whitespace, control characters and
/// the delimiters RFC 3986 excludes. Non-ASCII text is percent-encoded by `Url`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^\s\p{Cc}<>"{}|\\^`]*$"#).expect("valid regex")
});

/// Host, port and probe timeout of the instance under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for Target {
    fn default() -> Self {
        Self::new(TARGET_HOST, TARGET_PORT)
    }
}

impl Target {
    /// Target with the default probe timeout.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Duration::from_secs(PROBE_TIMEOUT_SECS),
        }
    }

    /// Replace the probe timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Origin every browse path is appended to, always ending in `/`.
    ///
    /// # Examples
    /// ```
    /// use quilt_acceptance::config::Target;
    ///
    /// assert_eq!(Target::default().base_url(), "http://quilt/");
    /// assert_eq!(Target::new("127.0.0.1", 8080).base_url(), "http://127.0.0.1:8080/");
    /// ```
    pub fn base_url(&self) -> String {
        if self.port == TARGET_PORT {
            format!("http://{}/", self.host)
        } else {
            format!("http://{}:{}/", self.host, self.port)
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Validate a browse path.
///
/// # Returns
/// * `Ok(())` if no character breaks URL construction
/// * `Err(AcceptanceError::InvalidPath)` otherwise
///
/// # Examples
/// ```
/// use quilt_acceptance::config::validate_path;
///
/// assert!(validate_path("").is_ok());
/// assert!(validate_path("things/1?x=y#frag").is_ok());
/// assert!(validate_path("a b").is_err());
/// ```
pub fn validate_path(path: &str) -> Result<()> {
    if PATH_PATTERN.is_match(path) {
        Ok(())
    } else {
        Err(AcceptanceError::InvalidPath(path.to_string()))
    }
}

/// Build the absolute URL for a browse path.
///
/// The path is appended to [`Target::base_url`] as-is, so `""` is the site
/// root and `"about"` is `http://<host>/about`.
pub fn page_url(target: &Target, path: &str) -> Result<Url> {
    validate_path(path)?;
    let url = format!("{}{path}", target.base_url());
    Url::parse(&url).map_err(|source| AcceptanceError::InvalidUrl { url, source })
}
