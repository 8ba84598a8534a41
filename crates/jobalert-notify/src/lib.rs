//! Email digest of freshly discovered roles.
//!
//! [`compose_digest`] renders the subject and the plain-text and HTML bodies;
//! [`Mailer`] delivers them over an authenticated STARTTLS SMTP session.

pub mod digest;
pub mod error;
pub mod mailer;

pub use digest::{compose_digest, escape_html, Digest, NO_NEW_ROLES};
pub use error::NotifyError;
pub use mailer::{build_message, build_test_message, Mailer, TEST_EMAIL_SUBJECT};
