//! Notification worker — drains the queue and hands jobs to the mailer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time;
use tracing::{info, warn};

use medistaff_core::config::worker::WorkerConfig;
use medistaff_mailer::Mailer;

use crate::job::NotificationJob;

/// Main worker loop that receives queued jobs and dispatches them.
#[derive(Debug)]
pub struct NotificationRunner {
    /// Receiver half of the notification queue.
    rx: mpsc::UnboundedReceiver<NotificationJob>,
    /// SMTP gateway.
    mailer: Arc<Mailer>,
    /// Delay applied before every dispatch.
    dispatch_delay: Duration,
}

impl NotificationRunner {
    /// Create a new runner.
    pub fn new(
        rx: mpsc::UnboundedReceiver<NotificationJob>,
        mailer: Arc<Mailer>,
        config: &WorkerConfig,
    ) -> Self {
        Self {
            rx,
            mailer,
            dispatch_delay: Duration::from_millis(config.dispatch_delay_ms),
        }
    }

    /// Run until the cancel signal flips or every queue sender is dropped.
    pub async fn run(mut self, mut cancel: watch::Receiver<bool>) {
        info!(
            dispatch_delay_ms = self.dispatch_delay.as_millis() as u64,
            "Notification worker started"
        );

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        info!("Notification worker received shutdown signal");
                        break;
                    }
                }
                job = self.rx.recv() => {
                    match job {
                        Some(job) => self.dispatch(job).await,
                        None => {
                            info!("Notification queue closed");
                            break;
                        }
                    }
                }
            }
        }

        info!("Notification worker shut down");
    }

    /// Dispatch one job. Failures are logged only.
    async fn dispatch(&self, job: NotificationJob) {
        time::sleep(self.dispatch_delay).await;

        let kind = job.kind();
        let outcome = match &job {
            NotificationJob::OffboardingNotice { employee, record } => {
                self.mailer.send_offboarding_notice(employee, record).await
            }
            NotificationJob::EquipmentReminder { employee, assets } => {
                self.mailer.send_equipment_reminder(employee, assets).await
            }
        };

        match outcome {
            Ok(report) if report.delivered => {
                info!(kind, message_id = ?report.message_id, "Notification delivered");
            }
            Ok(_) => {
                warn!(kind, "Notification skipped: no recipients configured");
            }
            Err(e) => {
                warn!(kind, error = %e, "Notification delivery failed");
            }
        }
    }
}
