//! Careers-page scraping: fetch each watched page, pull out its links, and
//! report the ones whose text or target hits a keyword.

pub mod client;
pub mod error;
pub mod extract;
pub mod pipeline;

pub use client::PageFetcher;
pub use error::ScraperError;
pub use extract::{extract_links, page_text, ExtractedLink};
pub use pipeline::{dedupe, scrape_watchlist, ScrapeOptions};
