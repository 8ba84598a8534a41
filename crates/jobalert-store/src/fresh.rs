use jobalert_core::{JobMatch, ScrapeReport};

use crate::{SeenKey, SeenStore};

/// Returns the matches in `report` not yet recorded in `store`, adding each
/// one's key as it goes.
///
/// Because keys are added immediately, a match repeated within the same
/// report is returned once. Fetch failures are never fresh.
pub fn filter_fresh<S>(store: &mut S, report: &ScrapeReport) -> Vec<JobMatch>
where
    S: SeenStore + ?Sized,
{
    let mut fresh = Vec::new();
    for m in report.matches() {
        if store.add(SeenKey::for_match(m)) {
            fresh.push(m.clone());
        }
    }

    tracing::info!(
        candidates = report.matches().count(),
        fresh = fresh.len(),
        seen = store.len(),
        "filtered seen matches"
    );
    fresh
}

#[cfg(test)]
mod tests {
    use jobalert_core::{FetchFailure, ScrapeOutcome};

    use super::*;
    use crate::MemorySeenStore;

    fn report(outcomes: Vec<ScrapeOutcome>) -> ScrapeReport {
        ScrapeReport { outcomes }
    }

    fn hit(company: &str, title: &str, url: &str) -> ScrapeOutcome {
        ScrapeOutcome::Match(JobMatch::link(company, title, url))
    }

    #[test]
    fn already_seen_match_is_not_fresh() {
        let mut store: MemorySeenStore = ["A||T||u"].into_iter().collect();
        let fresh = filter_fresh(&mut store, &report(vec![hit("A", "T", "u")]));
        assert!(fresh.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn new_match_is_fresh_and_recorded() {
        let mut store: MemorySeenStore = ["A||T||u"].into_iter().collect();
        let fresh = filter_fresh(&mut store, &report(vec![hit("A", "T2", "u")]));
        assert_eq!(fresh, vec![JobMatch::link("A", "T2", "u")]);
        assert!(store.contains(&SeenKey::from("A||T2||u")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn duplicate_within_run_reported_once() {
        let mut store = MemorySeenStore::new();
        let fresh = filter_fresh(
            &mut store,
            &report(vec![hit("A", "T", "u"), hit("A", "T", "u")]),
        );
        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn fetch_failures_are_never_fresh() {
        let mut store = MemorySeenStore::new();
        let fresh = filter_fresh(
            &mut store,
            &report(vec![ScrapeOutcome::FetchFailed(FetchFailure {
                company: "A".to_string(),
                url: "u".to_string(),
                message: "connection refused".to_string(),
            })]),
        );
        assert!(fresh.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn title_starting_with_error_is_an_ordinary_match() {
        let mut store = MemorySeenStore::new();
        let fresh = filter_fresh(
            &mut store,
            &report(vec![hit("A", "Error: Monitoring Engineer", "u")]),
        );
        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn second_pass_over_same_report_is_empty() {
        let mut store = MemorySeenStore::new();
        let scrape = report(vec![hit("A", "T", "u"), hit("B", "T", "v")]);
        assert_eq!(filter_fresh(&mut store, &scrape).len(), 2);
        assert!(filter_fresh(&mut store, &scrape).is_empty());
    }
}
