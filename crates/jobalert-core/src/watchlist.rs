use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_KEYWORDS: &[&str] = &[
    "entry level",
    "fresher",
    "graduate",
    "data analyst",
    "data analytics",
    "ml intern",
    "machine learning intern",
    "ml engineer",
    "machine learning engineer",
    "data engineer",
    "bde",
    "business development executive",
    "e-learning",
    "content developer",
];

const DEFAULT_COMPANIES: &[(&str, &str)] = &[
    ("Zensar", "https://www.zensar.com/careers"),
    ("Persistent Systems", "https://www.persistent.com/careers/"),
    ("Infosys", "https://career.infosys.com/joblist"),
    ("Tech Mahindra", "https://careers.techmahindra.com/"),
    ("TCS", "https://www.tcs.com/careers"),
    ("Cognizant", "https://careers.cognizant.com/global-en/jobs"),
    ("Wipro", "https://careers.wipro.com/careers-home/"),
    ("Capgemini", "https://www.capgemini.com/careers/"),
];

/// A company and the careers page to scan for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub url: String,
}

/// Lowercase phrase fragments matched as plain substrings.
///
/// Matching is not word-bounded: `"bde"` hits inside `"abdeen"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordList(Vec<String>);

impl KeywordList {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        )
    }

    /// Returns `true` if any keyword occurs in the lowercased `text`.
    #[must_use]
    pub fn is_hit(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.0.iter().any(|k| haystack.contains(k.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for KeywordList {
    fn from(keywords: Vec<String>) -> Self {
        Self::new(keywords)
    }
}

impl From<KeywordList> for Vec<String> {
    fn from(list: KeywordList) -> Self {
        list.0
    }
}

/// The companies to visit, in order, and the keywords to look for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    pub keywords: KeywordList,
    pub companies: Vec<Company>,
}

impl Default for Watchlist {
    fn default() -> Self {
        Self {
            keywords: KeywordList::new(DEFAULT_KEYWORDS),
            companies: DEFAULT_COMPANIES
                .iter()
                .map(|(name, url)| Company {
                    name: (*name).to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
        }
    }
}

/// Load and validate a watchlist from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_watchlist(path: &Path) -> Result<Watchlist, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WatchlistFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let watchlist: Watchlist = serde_yaml::from_str(&content)?;
    validate_watchlist(&watchlist)?;

    Ok(watchlist)
}

fn validate_watchlist(watchlist: &Watchlist) -> Result<(), ConfigError> {
    if watchlist.companies.is_empty() {
        return Err(ConfigError::Validation(
            "at least one company is required".to_string(),
        ));
    }
    if watchlist.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "at least one keyword is required".to_string(),
        ));
    }
    if watchlist.keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "keywords must be non-empty".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();
    for company in &watchlist.companies {
        if company.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "company name must be non-empty".to_string(),
            ));
        }

        if !company.url.starts_with("https://") && !company.url.starts_with("http://") {
            return Err(ConfigError::Validation(format!(
                "company '{}' has non-http url '{}'",
                company.name, company.url
            )));
        }

        if !seen_names.insert(company.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate company name: '{}'",
                company.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "watchlist_test.rs"]
mod tests;
