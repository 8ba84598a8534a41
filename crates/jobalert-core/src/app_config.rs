use std::path::PathBuf;

/// Runtime settings for a scrape-and-notify run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub seen_path: PathBuf,
    /// When `None`, the built-in [`crate::Watchlist::default`] is used.
    pub watchlist_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_links_per_site: usize,
    pub smtp_host: String,
    pub smtp_port: u16,
}

/// Sender identity and credentials for the mail relay.
///
/// Resolved separately from [`AppConfig`] so a dry run can proceed without
/// credentials while a real run fails before any network I/O.
#[derive(Clone)]
pub struct MailConfig {
    pub sender: String,
    pub password: String,
    pub receiver: String,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("sender", &self.sender)
            .field("password", &"[redacted]")
            .field("receiver", &self.receiver)
            .finish()
    }
}
