//! Browser sessions the navigation and title steps drive.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::USER_AGENT;
use crate::error::{AcceptanceError, Result};
use crate::page;

/// A document loaded into a session.
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects.
    pub url: Url,
    pub status: StatusCode,
    pub body: String,
}

/// What the steps need from a browser: load a URL, then query the current page.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Load `url`, replacing the current page.
    async fn visit(&mut self, url: &Url) -> Result<()>;

    /// The page loaded by the last successful `visit`, if any.
    fn current_page(&self) -> Option<&Page>;

    /// Text of the first element on the current page matching `locator`.
    async fn find_text(&self, locator: &str) -> Result<String> {
        let page = self.current_page().ok_or(AcceptanceError::NoPageLoaded)?;
        page::find_text(&page.body, locator, page.url.as_str())
    }
}

/// Session that loads pages with plain HTTP GET requests.
///
/// Redirects are followed and any status is accepted as a loaded page, the
/// way a browser shows an error page instead of refusing to navigate.
#[derive(Debug)]
pub struct HttpSession {
    client: Client,
    page: Option<Page>,
}

impl HttpSession {
    /// Create a session with no page loaded.
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client))
    }

    /// Create a session around an existing client, e.g. one with its own
    /// redirect policy or timeouts.
    pub fn with_client(client: Client) -> Self {
        Self { client, page: None }
    }
}

#[async_trait]
impl BrowserSession for HttpSession {
    async fn visit(&mut self, url: &Url) -> Result<()> {
        tracing::debug!(url = %url, "Visiting");

        let navigation_error = |source: reqwest::Error| AcceptanceError::Navigation {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(navigation_error)?;

        let status = response.status();
        let final_url = response.url().clone();
        if !status.is_success() {
            tracing::warn!(status = %status, url = %final_url, "Page loaded with non-success status");
        }

        let body = response.text().await.map_err(navigation_error)?;

        self.page = Some(Page {
            url: final_url,
            status,
            body,
        });
        Ok(())
    }

    fn current_page(&self) -> Option<&Page> {
        self.page.as_ref()
    }
}
