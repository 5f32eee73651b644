//! Email delivery
//!
//! Wraps the SMTP transport behind the domain error type. The notifier
//! builds a multipart message (plain-text body plus the PDF attachment) and
//! sends it in one shot; delivery failures are fatal and never retried.

use crate::config::EmailConfig;
use crate::domain::errors::ShowroomError;
use crate::domain::result::Result;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use secrecy::ExposeSecret;
use std::fs;
use std::path::Path;

/// Sends the rendered report as an email attachment
#[derive(Debug)]
pub struct Notifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl Notifier {
    /// Creates a notifier from the email configuration
    ///
    /// Addresses are parsed eagerly so a typo fails before any report is
    /// staged for delivery.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Delivery`] if an address does not parse or
    /// the transport cannot be constructed.
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let sender: Mailbox = config.sender.parse().map_err(|e| {
            ShowroomError::Delivery(format!("Invalid sender address '{}': {}", config.sender, e))
        })?;
        let recipient: Mailbox = config.recipient.parse().map_err(|e| {
            ShowroomError::Delivery(format!(
                "Invalid recipient address '{}': {}",
                config.recipient, e
            ))
        })?;

        let mut builder = match config.smtp_encryption.as_str() {
            "tls" => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host),
            "starttls" => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host),
            _ => Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
                &config.smtp_host,
            )),
        }
        .map_err(|e| {
            ShowroomError::Delivery(format!(
                "Failed to configure SMTP relay {}: {}",
                config.smtp_host, e
            ))
        })?
        .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(
                username.clone(),
                password.expose_secret().as_ref().to_string(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            sender,
            recipient,
        })
    }

    /// Sends the report email with the PDF attached
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Delivery`] if the attachment cannot be read,
    /// the message cannot be built, or the SMTP transaction fails.
    pub async fn send_report(&self, subject: &str, body: &str, attachment: &Path) -> Result<()> {
        let message = self.build_message(subject, body, attachment)?;

        self.transport.send(message).await.map_err(|e| {
            ShowroomError::Delivery(format!("SMTP delivery failed: {e}"))
        })?;

        tracing::info!(recipient = %self.recipient, "Report email sent");
        Ok(())
    }

    fn build_message(&self, subject: &str, body: &str, attachment: &Path) -> Result<Message> {
        let content = fs::read(attachment).map_err(|e| {
            ShowroomError::Delivery(format!(
                "Failed to read attachment {}: {}",
                attachment.display(),
                e
            ))
        })?;

        let filename = attachment
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report.pdf".to_string());

        let pdf_type = ContentType::parse("application/pdf")
            .map_err(|e| ShowroomError::Delivery(format!("Invalid attachment type: {e}")))?;

        Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(subject)
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(body.to_string()),
                    )
                    .singlepart(Attachment::new(filename).body(content, pdf_type)),
            )
            .map_err(|e| ShowroomError::Delivery(format!("Failed to build message: {e}")))
    }
}
