//! SMTP notification gateway.

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use medistaff_core::config::mailer::MailerConfig;
use medistaff_core::error::AppError;
use medistaff_core::result::AppResult;
use medistaff_entity::employee::EmployeeSummary;
use medistaff_entity::equipment::EquipmentSummary;
use medistaff_entity::offboarding::OffboardingRecord;

use crate::templates;

/// Outcome of one notification delivery attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReport {
    /// Whether the message was handed to the SMTP relay.
    pub delivered: bool,
    /// The Message-ID stamped on the outgoing email.
    pub message_id: Option<String>,
    /// Addresses the message went to.
    pub recipients: Vec<String>,
}

impl DeliveryReport {
    /// Report for a delivery skipped because no recipients are configured.
    pub fn skipped() -> Self {
        Self {
            delivered: false,
            message_id: None,
            recipients: Vec::new(),
        }
    }
}

/// Sends offboarding notifications over SMTP.
#[derive(Clone)]
pub struct Mailer {
    /// Async SMTP transport.
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Mailer configuration (sender, recipients).
    config: MailerConfig,
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("smtp_host", &self.config.smtp_host)
            .field("smtp_port", &self.config.smtp_port)
            .field("recipients", &self.config.recipients)
            .finish_non_exhaustive()
    }
}

impl Mailer {
    /// Create a new mailer from configuration.
    ///
    /// Builds the transport eagerly; no connection is made until the first
    /// send.
    pub fn new(config: &MailerConfig) -> AppResult<Self> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(|e| {
                    AppError::configuration(format!(
                        "Invalid SMTP relay '{}': {e}",
                        config.smtp_host
                    ))
                })?
                .port(config.smtp_port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            config: config.clone(),
        })
    }

    /// Send the offboarding notice for one processed exit.
    pub async fn send_offboarding_notice(
        &self,
        employee: &EmployeeSummary,
        record: &OffboardingRecord,
    ) -> AppResult<DeliveryReport> {
        let (subject, text, html) = templates::offboarding_notice(employee, record);
        self.deliver(&subject, text, html).await
    }

    /// Send the reminder listing equipment an offboarded employee has not
    /// returned.
    pub async fn send_equipment_reminder(
        &self,
        employee: &EmployeeSummary,
        assets: &[EquipmentSummary],
    ) -> AppResult<DeliveryReport> {
        let (subject, text, html) = templates::equipment_reminder(employee, assets);
        self.deliver(&subject, text, html).await
    }

    /// Build and send one message to every configured recipient.
    ///
    /// An empty recipient set short-circuits with a skipped report rather
    /// than attempting a send.
    async fn deliver(&self, subject: &str, text: String, html: String) -> AppResult<DeliveryReport> {
        if self.config.recipients.is_empty() {
            warn!("No notification recipients configured, skipping delivery");
            return Ok(DeliveryReport::skipped());
        }

        let from: Mailbox = self.config.from_address.parse().map_err(|e| {
            AppError::configuration(format!(
                "Invalid sender address '{}': {e}",
                self.config.from_address
            ))
        })?;

        let message_id = format!("<{}@medistaff>", Uuid::new_v4());

        let mut builder = Message::builder()
            .from(from)
            .subject(subject)
            .message_id(Some(message_id.clone()));

        for recipient in &self.config.recipients {
            let to: Mailbox = recipient.parse().map_err(|e| {
                AppError::configuration(format!("Invalid recipient address '{recipient}': {e}"))
            })?;
            builder = builder.to(to);
        }

        let message = builder
            .multipart(MultiPart::alternative_plain_html(text, html))
            .map_err(|e| AppError::internal(format!("Failed to build email: {e}")))?;

        self.transport.send(message).await.map_err(|e| {
            AppError::with_source(
                medistaff_core::error::ErrorKind::ExternalService,
                format!("SMTP delivery failed: {e}"),
                e,
            )
        })?;

        info!(
            message_id = %message_id,
            recipients = ?self.config.recipients,
            "Notification email delivered"
        );

        Ok(DeliveryReport {
            delivered: true,
            message_id: Some(message_id),
            recipients: self.config.recipients.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use medistaff_entity::offboarding::{ExitType, OffboardingStatus};

    fn sample_employee() -> EmployeeSummary {
        EmployeeSummary {
            id: Uuid::new_v4(),
            dni: "30111222".to_string(),
            payroll_number: "L-0042".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Suárez".to_string(),
            position_name: Some("Enfermera".to_string()),
            sector_name: None,
        }
    }

    fn sample_record(employee_id: Uuid) -> OffboardingRecord {
        OffboardingRecord {
            id: Uuid::new_v4(),
            employee_id,
            exit_date: "2024-06-20".parse().unwrap(),
            exit_type: ExitType::Retirement,
            reason: "Jubilación ordinaria".to_string(),
            notes: None,
            status: OffboardingStatus::Processed,
            processed_by: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_no_recipients_short_circuits() {
        let config = MailerConfig::default();
        assert!(config.recipients.is_empty());

        let mailer = Mailer::new(&config).unwrap();
        let employee = sample_employee();
        let record = sample_record(employee.id);

        let report = mailer
            .send_offboarding_notice(&employee, &record)
            .await
            .unwrap();

        assert!(!report.delivered);
        assert!(report.message_id.is_none());
        assert!(report.recipients.is_empty());
    }
}
