/// Title used when a matching anchor has no visible text.
pub const UNTITLED_ROLE: &str = "Open role";

/// A keyword hit on a careers page: either a single link or the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobMatch {
    pub company: String,
    pub title: String,
    pub url: String,
}

impl JobMatch {
    /// Builds a link-level match, substituting [`UNTITLED_ROLE`] for an
    /// empty title.
    #[must_use]
    pub fn link(company: &str, title: &str, url: &str) -> Self {
        let title = if title.is_empty() {
            UNTITLED_ROLE
        } else {
            title
        };
        Self {
            company: company.to_string(),
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    /// Builds the match reported when the page text as a whole hits a keyword.
    #[must_use]
    pub fn page(company: &str, url: &str) -> Self {
        Self {
            company: company.to_string(),
            title: format!("[Page match] {company} Careers"),
            url: url.to_string(),
        }
    }
}

/// A careers page that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub company: String,
    pub url: String,
    pub message: String,
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Match(JobMatch),
    FetchFailed(FetchFailure),
}

/// Ordered results of one scrape over the whole watchlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeReport {
    pub outcomes: Vec<ScrapeOutcome>,
}

impl ScrapeReport {
    pub fn matches(&self) -> impl Iterator<Item = &JobMatch> {
        self.outcomes.iter().filter_map(|o| match o {
            ScrapeOutcome::Match(m) => Some(m),
            ScrapeOutcome::FetchFailed(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &FetchFailure> {
        self.outcomes.iter().filter_map(|o| match o {
            ScrapeOutcome::FetchFailed(f) => Some(f),
            ScrapeOutcome::Match(_) => None,
        })
    }

    /// Total outcomes, failures included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
