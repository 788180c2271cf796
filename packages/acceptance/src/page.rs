//! Element lookup and text matching on loaded pages.

use scraper::{Html, Selector};

use crate::error::{AcceptanceError, Result};

/// Collapse every run of whitespace to a single space and trim the ends.
///
/// # Examples
/// ```
/// use quilt_acceptance::page::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Welcome\n\t to  Quilt "), "Welcome to Quilt");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Read the text of the first element matching `locator` in an HTML document.
///
/// The document is parsed on every call. Text is the concatenation of all
/// descendant text nodes, whitespace-normalized.
///
/// # Arguments
/// * `html` - Page source
/// * `locator` - CSS selector describing the element's structural path
/// * `url` - Where the page came from, for error messages
pub fn find_text(html: &str, locator: &str, url: &str) -> Result<String> {
    let selector = Selector::parse(locator).map_err(|e| AcceptanceError::InvalidLocator {
        locator: locator.to_string(),
        reason: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let mut matches = document.select(&selector);

    let Some(element) = matches.next() else {
        return Err(AcceptanceError::ElementNotFound {
            locator: locator.to_string(),
            url: url.to_string(),
        });
    };

    let extra = matches.count();
    if extra > 0 {
        tracing::debug!(locator, matches = extra + 1, "Locator is ambiguous, using first match");
    }

    Ok(normalize_whitespace(&element.text().collect::<String>()))
}

/// Check that `actual` contains `expected` after whitespace normalization.
///
/// Matching is a case-sensitive substring test, so a heading reading
/// "Welcome to Quilt" satisfies "Welcome".
pub fn check_title(actual: &str, expected: &str) -> Result<()> {
    let actual = normalize_whitespace(actual);
    let expected = normalize_whitespace(expected);

    if actual.contains(&expected) {
        Ok(())
    } else {
        Err(AcceptanceError::TitleMismatch { expected, actual })
    }
}
