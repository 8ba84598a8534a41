use jobalert_core::MailConfig;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::digest::Digest;
use crate::error::NotifyError;

/// Sends digests from the configured sender to a single receiver.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl Mailer {
    /// Prepares an authenticated STARTTLS transport for `host:port`.
    ///
    /// No connection is opened until [`Mailer::send`].
    ///
    /// # Errors
    ///
    /// - [`NotifyError::Address`] if the sender or receiver is not a valid address.
    /// - [`NotifyError::Smtp`] if the relay host cannot be used for TLS.
    pub fn new(mail: &MailConfig, host: &str, port: u16) -> Result<Self, NotifyError> {
        let from: Mailbox = mail.sender.parse()?;
        let to: Mailbox = mail.receiver.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(Credentials::new(
                mail.sender.clone(),
                mail.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }

    /// Opens one SMTP session, authenticates, and delivers `digest`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the message cannot be built or the relay
    /// rejects the connection, login, or delivery.
    pub async fn send(&self, digest: &Digest) -> Result<(), NotifyError> {
        let message = build_message(&self.from, &self.to, digest)?;
        let response = self.transport.send(message).await?;
        tracing::info!(
            to = %self.to,
            code = %response.code(),
            "digest delivered"
        );
        Ok(())
    }
}

/// Subject of the credential-check message sent by `--test-email`.
pub const TEST_EMAIL_SUBJECT: &str = "jobalert test email";

impl Mailer {
    /// Delivers a short plain-text message to the sender's own address.
    ///
    /// Uses the same relay session and login as [`Mailer::send`], so success
    /// means the configured credentials can send digests. Returns the
    /// recipient for display.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the message cannot be built or the relay
    /// rejects the connection, login, or delivery.
    pub async fn send_test(&self) -> Result<&Mailbox, NotifyError> {
        let message = build_test_message(&self.from, &self.from)?;
        let response = self.transport.send(message).await?;
        tracing::info!(
            to = %self.from,
            code = %response.code(),
            "test email delivered"
        );
        Ok(&self.from)
    }
}

/// Builds the single-part `text/plain` credential-check message.
///
/// # Errors
///
/// Returns [`NotifyError::Message`] if the message headers are invalid.
pub fn build_test_message(from: &Mailbox, to: &Mailbox) -> Result<Message, NotifyError> {
    let message = Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(TEST_EMAIL_SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(String::from(
            "This is a test email from jobalert. Your SMTP credentials work.",
        ))?;
    Ok(message)
}

/// Builds a `multipart/alternative` message carrying both digest bodies.
///
/// # Errors
///
/// Returns [`NotifyError::Message`] if the message headers are invalid.
pub fn build_message(
    from: &Mailbox,
    to: &Mailbox,
    digest: &Digest,
) -> Result<Message, NotifyError> {
    let message = Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(digest.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            digest.text_body.clone(),
            digest.html_body.clone(),
        ))?;
    Ok(message)
}
