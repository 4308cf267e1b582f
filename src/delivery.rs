// 📧 Delivery Sink
// Boundary that takes a rendered report and gets it to the recipients.
// SMTP when sender credentials are configured; otherwise a console sink
// that prints the report instead of failing the run.

use anyhow::{bail, Context, Result};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// DeliverySink - report transport boundary
pub trait DeliverySink {
    fn deliver(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()>;
}

// ============================================================================
// SMTP
// ============================================================================

/// SmtpConfig - credentials and endpoint for the SMTP sink, passed in at
/// construction time (never ambient state)
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub sender: String,
    pub password: String,
}

/// SmtpSink - sends the report over implicit TLS
pub struct SmtpSink {
    config: SmtpConfig,
}

impl SmtpSink {
    pub fn new(config: SmtpConfig) -> Self {
        SmtpSink { config }
    }
}

impl DeliverySink for SmtpSink {
    fn deliver(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()> {
        if recipients.is_empty() {
            bail!("No recipients to deliver to");
        }

        let sender: Mailbox = self
            .config
            .sender
            .parse()
            .with_context(|| format!("Invalid sender address '{}'", self.config.sender))?;

        let mut builder = Message::builder().from(sender).subject(subject);

        // Recipients come from a hand-edited file; skip broken addresses
        // instead of losing the whole report.
        let mut usable = 0;
        for recipient in recipients {
            match recipient.parse::<Mailbox>() {
                Ok(mailbox) => {
                    builder = builder.to(mailbox);
                    usable += 1;
                }
                Err(_) => {
                    eprintln!("⚠️  Skipping invalid recipient address: {}", recipient);
                }
            }
        }
        if usable == 0 {
            bail!("No valid recipient addresses");
        }

        let email = builder
            .body(body.to_string())
            .context("Failed to build e-mail message")?;

        let credentials =
            Credentials::new(self.config.sender.clone(), self.config.password.clone());

        let mailer = SmtpTransport::relay(&self.config.server)
            .with_context(|| format!("Invalid SMTP server '{}'", self.config.server))?
            .port(self.config.port)
            .credentials(credentials)
            .build();

        mailer.send(&email).context("SMTP delivery failed")?;

        println!("✅ Report e-mail sent to {} recipient(s).", usable);
        Ok(())
    }
}

// ============================================================================
// CONSOLE FALLBACK
// ============================================================================

/// ConsoleSink - degraded sink used when SMTP configuration is absent.
/// Prints a clear diagnostic plus the report body; never fails the run.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl DeliverySink for ConsoleSink {
    fn deliver(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()> {
        println!("⚠️  SMTP sender configuration missing - printing report instead of e-mailing it.");
        println!("Would deliver to: {}", recipients.join(", "));
        println!("Subject: {}", subject);
        println!("{}", body);
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sink_never_fails() {
        let sink = ConsoleSink;
        let result = sink.deliver(
            "Subject",
            "Body",
            &["alice@example.com".to_string(), "garbage".to_string()],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_smtp_sink_rejects_empty_recipient_list() {
        let sink = SmtpSink::new(SmtpConfig {
            server: "smtp.example.com".to_string(),
            port: 465,
            sender: "monitor@example.com".to_string(),
            password: "secret".to_string(),
        });

        assert!(sink.deliver("Subject", "Body", &[]).is_err());
    }

    #[test]
    fn test_smtp_sink_rejects_all_invalid_recipients() {
        let sink = SmtpSink::new(SmtpConfig {
            server: "smtp.example.com".to_string(),
            port: 465,
            sender: "monitor@example.com".to_string(),
            password: "secret".to_string(),
        });

        // Fails before any network I/O: no usable address survives parsing
        let result = sink.deliver(
            "Subject",
            "Body",
            &["not-an-address".to_string(), "also bad".to_string()],
        );
        assert!(result.is_err());
    }
}
