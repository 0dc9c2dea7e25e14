// Link handling for directory listings: which anchors to follow and where
// they land, both remotely and on disk.

use crate::error::{MirrorError, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// Decide whether an anchor's href should be followed.
///
/// Skipped: anchors without an href, query-only (`?C=N;O=D` sort links),
/// fragment-only (`#top`), the parent link `../` and the root `/`.
pub fn is_followable(href: Option<&str>) -> bool {
    match href {
        None => false,
        Some(h) => !(h.starts_with('?') || h.starts_with('#') || h == "../" || h == "/"),
    }
}

/// Collect every `<a>` element in document order along with its href, if any.
pub fn extract_hrefs(html: &str) -> Result<Vec<Option<String>>> {
    let document = scraper::Html::parse_document(html);
    let selector = scraper::Selector::parse("a")
        .map_err(|e| MirrorError::other(format!("Failed to create selector: {:?}", e)))?;

    Ok(document
        .select(&selector)
        .map(|element| element.value().attr("href").map(str::to_string))
        .collect())
}

/// Hrefs of a listing page that should be recursed into, in document order.
pub fn followable_links(html: &str) -> Result<Vec<String>> {
    Ok(extract_hrefs(html)?
        .into_iter()
        .filter(|href| is_followable(href.as_deref()))
        .flatten()
        .collect())
}

/// Resolve an href against the page it was found on.
pub fn child_url(base: &Url, href: &str) -> Result<Url> {
    Ok(base.join(href)?)
}

/// Local path for an href: appended as-is to the page's local path.
///
/// No percent-decoding or sanitization is applied.
pub fn child_path(local: &Path, href: &str) -> PathBuf {
    local.join(href)
}
