use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset};
use jobalert_core::{JobMatch, KeywordList};

/// Body text sent when a run finds nothing new.
pub const NO_NEW_ROLES: &str = "No new roles today.";

/// A rendered notification, ready to hand to the [`crate::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Render the digest for `matches`, stamped with the local time `now`.
///
/// Only the title column is HTML-escaped; company names and URLs are
/// inserted verbatim.
#[must_use]
pub fn compose_digest(
    matches: &[JobMatch],
    keywords: &KeywordList,
    now: &DateTime<FixedOffset>,
) -> Digest {
    let subject = format!(
        "Daily Job Alert — {} (UTC{})",
        now.format("%d %b %Y, %I:%M %p"),
        now.format("%:z")
    );

    if matches.is_empty() {
        return Digest {
            subject,
            text_body: NO_NEW_ROLES.to_string(),
            html_body: format!("<html><body><p>{NO_NEW_ROLES}</p></body></html>"),
        };
    }

    let text_body = matches
        .iter()
        .map(|m| format!("{} | {} | {}", m.company, m.title, m.url))
        .collect::<Vec<_>>()
        .join("\n");

    let mut rows = String::new();
    for m in matches {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td><a href='{}' target='_blank'>{}</a></td></tr>",
            m.company,
            escape_html(&m.title),
            m.url,
            m.url
        );
    }

    let keyword_list = keywords.iter().collect::<Vec<_>>().join(", ");
    let html_body = format!(
        "<html><body>\n\
         <h3>Fresh roles matching your filters</h3>\n\
         <table border=\"1\" cellpadding=\"6\" cellspacing=\"0\">\n\
         <tr><th>Company</th><th>Title</th><th>Link</th></tr>\n\
         {rows}\n\
         </table>\n\
         <p style=\"color:#666;font-size:12px\">Keywords: {keyword_list}</p>\n\
         </body></html>"
    );

    Digest {
        subject,
        text_body,
        html_body,
    }
}

/// Escape `&`, `<`, and `>` for inclusion in HTML text.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
#[path = "digest_test.rs"]
mod tests;
