// ⚙️ Configuration
// Loaded once from environment variables at startup and passed into the
// collaborators at construction time. No process-wide mutable settings.
//
// Variables (all optional):
// - EMAIL_SENDER / EMAIL_PASSWORD - SMTP credentials; when either is
//   missing the run degrades to printing the report
// - SMTP_SERVER (default: smtp.gmail.com), SMTP_PORT (default: 465)
// - KRS_API_BASE_URL (default: the public registry API)
// - API_CALL_DELAY_SECS (default: 1) - pause between registry requests
// - DAYS_TO_CHECK (default: 10) - trailing window length
// - KRS_LIST_FILE (default: krs_do_monitorowania.txt)
// - RECIPIENTS_FILE (default: odbiorcy.txt)

use crate::delivery::SmtpConfig;
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api-krs.ms.gov.pl/api/krs";
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;
pub const DEFAULT_API_CALL_DELAY_SECS: u64 = 1;
pub const DEFAULT_DAYS_TO_CHECK: u32 = 10;

/// MonitorConfig - everything one run needs, resolved up front
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub email_sender: Option<String>,
    pub email_password: Option<String>,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub api_base_url: String,
    pub api_call_delay: Duration,
    pub days_to_check: u32,
    pub registry_list_path: PathBuf,
    pub recipients_path: PathBuf,
}

impl MonitorConfig {
    /// Load from environment variables, falling back to defaults.
    /// Unparseable numeric values fall back too; validation catches the
    /// combinations that cannot work at all.
    pub fn from_env() -> Self {
        let smtp_port = env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);

        let delay_secs = env::var("API_CALL_DELAY_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_API_CALL_DELAY_SECS);

        let days_to_check = env::var("DAYS_TO_CHECK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DAYS_TO_CHECK);

        MonitorConfig {
            email_sender: env::var("EMAIL_SENDER").ok().filter(|v| !v.is_empty()),
            email_password: env::var("EMAIL_PASSWORD").ok().filter(|v| !v.is_empty()),
            smtp_server: env::var("SMTP_SERVER")
                .unwrap_or_else(|_| DEFAULT_SMTP_SERVER.to_string()),
            smtp_port,
            api_base_url: env::var("KRS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            api_call_delay: Duration::from_secs(delay_secs),
            days_to_check,
            registry_list_path: env::var("KRS_LIST_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("krs_do_monitorowania.txt")),
            recipients_path: env::var("RECIPIENTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("odbiorcy.txt")),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.days_to_check == 0 {
            anyhow::bail!("DAYS_TO_CHECK must be at least 1");
        }

        if self.smtp_port == 0 {
            anyhow::bail!("SMTP_PORT must not be 0");
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "KRS_API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.api_base_url
            );
        }

        Ok(())
    }

    /// SMTP sink configuration, present only when both sender and
    /// password are configured. Missing credentials are not an error:
    /// the binary degrades to console delivery.
    pub fn smtp(&self) -> Option<SmtpConfig> {
        let sender = self.email_sender.clone()?;
        let password = self.email_password.clone()?;

        Some(SmtpConfig {
            server: self.smtp_server.clone(),
            port: self.smtp_port,
            sender,
            password,
        })
    }
}

/// Load and validate in one step
pub fn load_from_env() -> Result<MonitorConfig> {
    let config = MonitorConfig::from_env();
    config.validate()?;
    Ok(config)
}

// ============================================================================
// TESTS
// ============================================================================
