//! Link and text extraction from parsed careers pages.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::{Html, Selector};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Schemes that do not navigate to a page.
const NON_NAVIGATIONAL_SCHEMES: &[&str] = &["javascript", "mailto", "tel"];

/// An anchor's visible text, whitespace-collapsed, and its absolute target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    pub title: String,
    pub url: String,
}

/// Collects up to `max_links` anchors from `document` in document order.
///
/// Each `href` is trimmed and resolved against `base_url`. Anchors whose
/// target uses a non-navigational scheme, or that cannot be resolved to a
/// URL at all, are skipped and do not count toward the cap.
#[must_use]
pub fn extract_links(base_url: &str, document: &Html, max_links: usize) -> Vec<ExtractedLink> {
    let base = Url::parse(base_url).ok();
    let mut links = Vec::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        if links.len() >= max_links {
            break;
        }

        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(url) = resolve_href(base.as_ref(), href.trim()) else {
            tracing::trace!(href, "skipping unresolvable href");
            continue;
        };
        if NON_NAVIGATIONAL_SCHEMES.contains(&url.scheme()) {
            continue;
        }

        let text = anchor.text().collect::<String>();
        let title = text.split_whitespace().collect::<Vec<_>>().join(" ");
        links.push(ExtractedLink {
            title,
            url: url.to_string(),
        });
    }

    links
}

/// All text nodes of the document joined by single spaces.
#[must_use]
pub fn page_text(document: &Html) -> String {
    document.root_element().text().collect::<Vec<_>>().join(" ")
}

fn resolve_href(base: Option<&Url>, href: &str) -> Option<Url> {
    match base {
        Some(base) => base.join(href).ok(),
        None => Url::parse(href).ok(),
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
