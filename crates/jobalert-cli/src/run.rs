//! One scrape → filter → notify → persist pass.
//!
//! Credentials and the watchlist are resolved before any network I/O so a
//! misconfigured run fails without side effects. Per-company fetch failures
//! are logged and skipped; a mail relay failure aborts the run before the
//! seen set is written, so the same matches are retried next time.

use anyhow::Context;
use jobalert_core::{AppConfig, JobMatch, ScrapeReport, Watchlist};
use jobalert_notify::{compose_digest, Mailer};
use jobalert_scraper::{scrape_watchlist, PageFetcher, ScrapeOptions};
use jobalert_store::{filter_fresh, FileSeenStore, SeenStore};

/// Counts printed as the final console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub hits: usize,
    pub failures: usize,
    pub fresh: usize,
    pub seen: usize,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Found {} hits ({} fetch errors); emailed {} fresh; seen_db size={}",
            self.hits, self.failures, self.fresh, self.seen
        )
    }
}

pub(crate) async fn run(config: &AppConfig, dry_run: bool) -> anyhow::Result<RunSummary> {
    let mailer = if dry_run {
        None
    } else {
        let mail = jobalert_core::load_mail_config_from_env()
            .context("EMAIL_USER / EMAIL_PASS must be set to send the digest")?;
        Some(Mailer::new(&mail, &config.smtp_host, config.smtp_port)?)
    };

    let watchlist = match &config.watchlist_path {
        Some(path) => jobalert_core::load_watchlist(path)?,
        None => Watchlist::default(),
    };
    tracing::info!(
        companies = watchlist.companies.len(),
        keywords = watchlist.keywords.len(),
        "watchlist loaded"
    );

    let mut store = FileSeenStore::load(&config.seen_path)?;
    let fetcher = PageFetcher::new(config.request_timeout_secs, &config.user_agent)?;
    let options = ScrapeOptions {
        max_links_per_site: config.max_links_per_site,
    };

    let (report, fresh) = collect_fresh(&fetcher, &watchlist, options, &mut store).await;

    let now = chrono::Local::now().fixed_offset();
    let digest = compose_digest(&fresh, &watchlist.keywords, &now);

    match mailer {
        Some(mailer) => {
            mailer
                .send(&digest)
                .await
                .context("failed to send digest email")?;
            store.persist()?;
        }
        None => {
            println!("{}\n\n{}\n", digest.subject, digest.text_body);
            tracing::info!("dry run: digest not sent, seen file not written");
        }
    }

    Ok(RunSummary {
        hits: report.len(),
        failures: report.failures().count(),
        fresh: fresh.len(),
        seen: store.len(),
    })
}

/// Send the `--test-email` credential check and return the address it went to.
pub(crate) async fn send_test_email(config: &AppConfig) -> anyhow::Result<String> {
    let mail = jobalert_core::load_mail_config_from_env()
        .context("EMAIL_USER / EMAIL_PASS must be set to send a test email")?;
    let mailer = Mailer::new(&mail, &config.smtp_host, config.smtp_port)?;
    let to = mailer
        .send_test()
        .await
        .context("failed to send test email")?;
    Ok(to.to_string())
}

/// Scrape the watchlist and return the report along with the matches not
/// yet in `store`. Fresh keys are added to `store` but not persisted.
pub(crate) async fn collect_fresh<S>(
    fetcher: &PageFetcher,
    watchlist: &Watchlist,
    options: ScrapeOptions,
    store: &mut S,
) -> (ScrapeReport, Vec<JobMatch>)
where
    S: SeenStore + ?Sized,
{
    let report = scrape_watchlist(fetcher, watchlist, options).await;
    let fresh = filter_fresh(store, &report);
    (report, fresh)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
