//! Watchlist scrape orchestration.

use std::collections::HashSet;

use jobalert_core::{
    Company, FetchFailure, JobMatch, KeywordList, ScrapeOutcome, ScrapeReport, Watchlist,
};
use scraper::Html;

use crate::client::PageFetcher;
use crate::extract::{extract_links, page_text};

#[derive(Debug, Clone, Copy)]
pub struct ScrapeOptions {
    /// Safety cap on anchors inspected per page.
    pub max_links_per_site: usize,
}

/// Scrape every company in `watchlist`, one at a time, in list order.
///
/// 1. Fetch the careers page. A failure is recorded as
///    [`ScrapeOutcome::FetchFailed`] and the run moves on to the next company.
/// 2. If the page text as a whole hits a keyword, record a page-level match.
/// 3. Record a match for each extracted link whose `"<title> <url>"` hits.
///
/// The combined outcomes are passed through [`dedupe`] before returning.
pub async fn scrape_watchlist(
    fetcher: &PageFetcher,
    watchlist: &Watchlist,
    options: ScrapeOptions,
) -> ScrapeReport {
    let mut outcomes: Vec<ScrapeOutcome> = Vec::new();

    for company in &watchlist.companies {
        match fetcher.fetch_page(&company.url).await {
            Ok(html) => {
                let matches =
                    scan_page(company, &html, &watchlist.keywords, options.max_links_per_site);
                tracing::info!(
                    company = %company.name,
                    hits = matches.len(),
                    "scanned careers page"
                );
                outcomes.extend(matches.into_iter().map(ScrapeOutcome::Match));
            }
            Err(e) => {
                let message = error_chain(&e);
                tracing::warn!(
                    company = %company.name,
                    url = %company.url,
                    error = %message,
                    "failed to fetch careers page"
                );
                outcomes.push(ScrapeOutcome::FetchFailed(FetchFailure {
                    company: company.name.clone(),
                    url: company.url.clone(),
                    message,
                }));
            }
        }
    }

    ScrapeReport {
        outcomes: dedupe(outcomes),
    }
}

/// Drops matches whose `(company, lowercase title, url)` already appeared,
/// keeping the first occurrence and the original order. Fetch failures pass
/// through untouched.
#[must_use]
pub fn dedupe(outcomes: Vec<ScrapeOutcome>) -> Vec<ScrapeOutcome> {
    let mut seen: HashSet<(String, String, String)> = HashSet::new();
    outcomes
        .into_iter()
        .filter(|outcome| match outcome {
            ScrapeOutcome::Match(m) => {
                seen.insert((m.company.clone(), m.title.to_lowercase(), m.url.clone()))
            }
            ScrapeOutcome::FetchFailed(_) => true,
        })
        .collect()
}

fn scan_page(
    company: &Company,
    html: &str,
    keywords: &KeywordList,
    max_links: usize,
) -> Vec<JobMatch> {
    let document = Html::parse_document(html);
    let mut matches = Vec::new();

    if keywords.is_hit(&page_text(&document)) {
        matches.push(JobMatch::page(&company.name, &company.url));
    }

    let links = extract_links(&company.url, &document, max_links);
    tracing::debug!(company = %company.name, links = links.len(), "extracted links");

    for link in links {
        let haystack = format!("{} {}", link.title, link.url);
        if keywords.is_hit(&haystack) {
            matches.push(JobMatch::link(&company.name, &link.title, &link.url));
        }
    }

    matches
}

/// Renders an error with its `source()` chain, e.g.
/// `"HTTP error: error sending request: operation timed out"`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_match(company: &str, title: &str, url: &str) -> ScrapeOutcome {
        ScrapeOutcome::Match(JobMatch::link(company, title, url))
    }

    fn failure(company: &str) -> ScrapeOutcome {
        ScrapeOutcome::FetchFailed(FetchFailure {
            company: company.to_string(),
            url: format!("https://{company}.example/careers"),
            message: "timed out".to_string(),
        })
    }

    fn company() -> Company {
        Company {
            name: "Acme".to_string(),
            url: "https://acme.example/careers".to_string(),
        }
    }

    #[test]
    fn dedupe_ignores_title_case() {
        let out = dedupe(vec![link_match("A", "X", "u"), link_match("A", "x", "u")]);
        assert_eq!(out, vec![link_match("A", "X", "u")]);
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let out = dedupe(vec![
            link_match("A", "One", "u1"),
            link_match("A", "Two", "u2"),
            link_match("A", "ONE", "u1"),
            link_match("A", "Three", "u3"),
        ]);
        let titles: Vec<String> = out
            .iter()
            .map(|o| match o {
                ScrapeOutcome::Match(m) => m.title.clone(),
                ScrapeOutcome::FetchFailed(f) => f.to_string(),
            })
            .collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn dedupe_distinguishes_url_case_and_company() {
        let out = dedupe(vec![
            link_match("A", "X", "https://a/Job"),
            link_match("A", "X", "https://a/job"),
            link_match("B", "X", "https://a/job"),
        ]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn dedupe_passes_failures_through() {
        let out = dedupe(vec![failure("a"), link_match("A", "X", "u"), failure("b")]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn scan_page_reports_page_and_link_hits() {
        let keywords = KeywordList::new(["data analyst"]);
        let html = r#"
            <h1>Join us</h1>
            <a href="/jobs/1">Data Analyst</a>
            <a href="/jobs/2">Java Developer</a>
        "#;
        let matches = scan_page(&company(), html, &keywords, 40);
        assert_eq!(
            matches,
            vec![
                JobMatch::page("Acme", "https://acme.example/careers"),
                JobMatch::link("Acme", "Data Analyst", "https://acme.example/jobs/1"),
            ]
        );
    }

    #[test]
    fn scan_page_matches_keyword_in_url_only() {
        let keywords = KeywordList::new(["data-engineer"]);
        let html = r#"<a href="/roles/data-engineer-pune"></a>"#;
        let matches = scan_page(&company(), html, &keywords, 40);
        assert_eq!(
            matches,
            vec![JobMatch::link(
                "Acme",
                "Open role",
                "https://acme.example/roles/data-engineer-pune"
            )]
        );
    }

    #[test]
    fn scan_page_without_hits_is_empty() {
        let keywords = KeywordList::new(["fresher"]);
        let html = r#"<p>Senior roles only</p><a href="/jobs/1">Architect</a>"#;
        assert!(scan_page(&company(), html, &keywords, 40).is_empty());
    }

    #[test]
    fn error_chain_includes_sources() {
        #[derive(Debug)]
        struct Inner;
        impl std::fmt::Display for Inner {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "connection refused")
            }
        }
        impl std::error::Error for Inner {}

        #[derive(Debug)]
        struct Outer(Inner);
        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "request failed")
            }
        }
        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        assert_eq!(
            error_chain(&Outer(Inner)),
            "request failed: connection refused"
        );
    }
}
