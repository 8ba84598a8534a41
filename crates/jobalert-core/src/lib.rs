//! Shared configuration and domain types for jobalert.
//!
//! Holds the env-driven [`AppConfig`], the mail credentials, the
//! [`Watchlist`] of companies and keywords, and the match/failure types that
//! flow from the scraper through the seen-set filter into the notifier.

pub mod app_config;
pub mod config;
pub mod types;
pub mod watchlist;

use thiserror::Error;

pub use app_config::{AppConfig, MailConfig};
pub use config::{
    load_app_config, load_app_config_from_env, load_mail_config, load_mail_config_from_env,
};
pub use types::{FetchFailure, JobMatch, ScrapeOutcome, ScrapeReport};
pub use watchlist::{load_watchlist, Company, KeywordList, Watchlist};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read watchlist file {path}: {source}")]
    WatchlistFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse watchlist file: {0}")]
    WatchlistFileParse(#[from] serde_yaml::Error),

    #[error("watchlist validation failed: {0}")]
    Validation(String),
}
