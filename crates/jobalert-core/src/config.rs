use std::env::VarError;
use std::path::PathBuf;

use crate::app_config::{AppConfig, MailConfig};
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load sender credentials, loading `.env` first.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] if `EMAIL_USER` or `EMAIL_PASS`
/// is unset or empty.
pub fn load_mail_config() -> Result<MailConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_mail_config_from_env()
}

/// Load sender credentials from the process environment only.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] if `EMAIL_USER` or `EMAIL_PASS`
/// is unset or empty.
pub fn load_mail_config_from_env() -> Result<MailConfig, ConfigError> {
    build_mail_config(|key| std::env::var(key))
}

/// Core parsing/validation logic, decoupled from the real environment so it
/// can be tested with a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u16 = |var: &str, default: &str| -> Result<u16, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("JOBALERT_LOG_LEVEL", "info");
    let seen_path = PathBuf::from(or_default("JOBALERT_SEEN_PATH", "seen_jobs.txt"));
    let watchlist_path = lookup("JOBALERT_WATCHLIST_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let request_timeout_secs = parse_u64("JOBALERT_REQUEST_TIMEOUT_SECS", "20")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "JOBALERT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let user_agent = or_default("JOBALERT_USER_AGENT", DEFAULT_USER_AGENT);

    let max_links_per_site = parse_usize("JOBALERT_MAX_LINKS_PER_SITE", "40")?;
    if max_links_per_site == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "JOBALERT_MAX_LINKS_PER_SITE".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let smtp_host = or_default("JOBALERT_SMTP_HOST", "smtp.gmail.com");
    let smtp_port = parse_u16("JOBALERT_SMTP_PORT", "587")?;

    Ok(AppConfig {
        log_level,
        seen_path,
        watchlist_path,
        request_timeout_secs,
        user_agent,
        max_links_per_site,
        smtp_host,
        smtp_port,
    })
}

fn build_mail_config<F>(lookup: F) -> Result<MailConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    // Empty values count as missing.
    let non_empty = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let sender =
        non_empty("EMAIL_USER").ok_or_else(|| ConfigError::MissingEnvVar("EMAIL_USER".into()))?;
    let password =
        non_empty("EMAIL_PASS").ok_or_else(|| ConfigError::MissingEnvVar("EMAIL_PASS".into()))?;
    let receiver = non_empty("RECEIVER_EMAIL").unwrap_or_else(|| sender.clone());

    Ok(MailConfig {
        sender,
        password,
        receiver,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
