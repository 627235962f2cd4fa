//! Outbound email (SMTP) configuration.

use serde::{Deserialize, Serialize};

/// SMTP relay and notification recipient configuration.
///
/// Recipients are a fixed, configured set of addresses (IT and HR inboxes in
/// the original deployment). An empty list disables delivery entirely; the
/// mailer then reports a skipped delivery instead of attempting to send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// SMTP relay hostname.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port (STARTTLS).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username (empty = unauthenticated relay).
    #[serde(default)]
    pub username: String,
    /// SMTP password.
    #[serde(default)]
    pub password: String,
    /// Sender address stamped on every notification.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Notification recipients (systems/HR inboxes).
    #[serde(default)]
    pub recipients: Vec<String>,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: default_from_address(),
            recipients: Vec::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "MediStaff <no-reply@medistaff.local>".to_string()
}
