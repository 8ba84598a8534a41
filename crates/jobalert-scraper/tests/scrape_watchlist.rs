//! Integration tests for `PageFetcher` and `scrape_watchlist`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made.

use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jobalert_core::{Company, JobMatch, KeywordList, ScrapeOutcome, Watchlist};
use jobalert_scraper::{scrape_watchlist, PageFetcher, ScrapeOptions, ScraperError};

const TEST_UA: &str = "jobalert-test/0.1";

/// 5-second timeout, descriptive UA.
fn test_fetcher() -> PageFetcher {
    PageFetcher::new(5, TEST_UA).expect("failed to build test PageFetcher")
}

fn options() -> ScrapeOptions {
    ScrapeOptions {
        max_links_per_site: 40,
    }
}

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

// ---------------------------------------------------------------------------
// PageFetcher
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_page_returns_body_and_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/careers"))
        .and(header("user-agent", TEST_UA))
        .respond_with(html_response("<p>hello</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let body = test_fetcher()
        .fetch_page(&format!("{}/careers", server.uri()))
        .await
        .expect("expected Ok");
    assert_eq!(body, "<p>hello</p>");
}

#[tokio::test]
async fn fetch_page_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = test_fetcher()
        .fetch_page(&format!("{}/gone", server.uri()))
        .await;
    assert!(
        matches!(result, Err(ScraperError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_page_maps_5xx_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/careers"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_fetcher()
        .fetch_page(&format!("{}/careers", server.uri()))
        .await;
    assert!(
        matches!(result, Err(ScraperError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_page_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html_response("late").set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(1, TEST_UA).expect("fetcher");
    let result = fetcher.fetch_page(&format!("{}/slow", server.uri())).await;
    assert!(
        matches!(result, Err(ScraperError::Http(ref e)) if e.is_timeout()),
        "expected timeout, got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// scrape_watchlist
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scrape_watchlist_records_failures_and_continues() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/acme"))
        .respond_with(html_response(
            r#"<a href="/jobs/1">Graduate Engineer Trainee</a>
               <a href="/jobs/2">Principal Architect</a>"#,
        ))
        .mount(&server)
        .await;

    let watchlist = Watchlist {
        keywords: KeywordList::new(["graduate"]),
        companies: vec![
            Company {
                name: "Broken Corp".to_string(),
                url: format!("{}/broken", server.uri()),
            },
            Company {
                name: "Acme".to_string(),
                url: format!("{}/acme", server.uri()),
            },
        ],
    };

    let report = scrape_watchlist(&test_fetcher(), &watchlist, options()).await;

    assert_eq!(report.len(), 3, "failure + page match + link match");
    match &report.outcomes[0] {
        ScrapeOutcome::FetchFailed(f) => {
            assert_eq!(f.company, "Broken Corp");
            assert!(f.message.contains("500"), "message: {}", f.message);
        }
        other @ ScrapeOutcome::Match(_) => panic!("expected failure first, got {other:?}"),
    }

    let matches: Vec<&JobMatch> = report.matches().collect();
    assert_eq!(matches[0].title, "[Page match] Acme Careers");
    assert_eq!(matches[1].title, "Graduate Engineer Trainee");
    assert_eq!(matches[1].url, format!("{}/jobs/1", server.uri()));
}

#[tokio::test]
async fn scrape_watchlist_dedupes_repeated_links() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/acme"))
        .respond_with(html_response(
            r#"<nav><a href="/jobs/fresher">Fresher Jobs</a></nav>
               <footer><a href="/jobs/fresher">FRESHER JOBS</a></footer>"#,
        ))
        .mount(&server)
        .await;

    let watchlist = Watchlist {
        keywords: KeywordList::new(["fresher"]),
        companies: vec![Company {
            name: "Acme".to_string(),
            url: format!("{}/acme", server.uri()),
        }],
    };

    let report = scrape_watchlist(&test_fetcher(), &watchlist, options()).await;
    let titles: Vec<&str> = report.matches().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["[Page match] Acme Careers", "Fresher Jobs"]);
}

#[tokio::test]
async fn scrape_watchlist_honours_link_cap() {
    let server = MockServer::start().await;
    let body: String = (0..60)
        .map(|i| format!(r#"<a href="/jobs/{i}">Data Analyst {i}</a>"#))
        .collect();

    Mock::given(method("GET"))
        .and(path("/acme"))
        .respond_with(html_response(&body))
        .mount(&server)
        .await;

    let watchlist = Watchlist {
        keywords: KeywordList::new(["data analyst"]),
        companies: vec![Company {
            name: "Acme".to_string(),
            url: format!("{}/acme", server.uri()),
        }],
    };

    let report = scrape_watchlist(
        &test_fetcher(),
        &watchlist,
        ScrapeOptions {
            max_links_per_site: 10,
        },
    )
    .await;

    // One page-level match plus the first ten links.
    assert_eq!(report.matches().count(), 11);
    assert!(report.failures().next().is_none());
}
