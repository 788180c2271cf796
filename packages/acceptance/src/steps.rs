//! The three acceptance step operations.
//!
//! Each operation is a single check with no retry: it either succeeds or
//! returns the error that fails the scenario.

use url::Url;

use crate::config::{page_url, Target, PRIMARY_HEADING};
use crate::error::Result;
use crate::page::check_title;
use crate::probe::ensure_running;
use crate::session::BrowserSession;

/// "a running instance of Quilt": the target accepts a TCP connection.
pub async fn running_instance(target: &Target) -> Result<()> {
    ensure_running(target).await
}

/// "we browse to the path ...": load `http://<host>/` + `path` into the session.
///
/// # Returns
/// The URL that was requested.
pub async fn browse_to<S>(session: &mut S, target: &Target, path: &str) -> Result<Url>
where
    S: BrowserSession + ?Sized,
{
    let url = page_url(target, path)?;
    session.visit(&url).await?;
    Ok(url)
}

/// "a page with the title ... shows up": the primary heading contains `expected`.
///
/// # Returns
/// The heading text that was found.
pub async fn title_shows_up<S>(session: &S, expected: &str) -> Result<String>
where
    S: BrowserSession + ?Sized,
{
    let heading = session.find_text(PRIMARY_HEADING).await?;
    check_title(&heading, expected)?;
    Ok(heading)
}
