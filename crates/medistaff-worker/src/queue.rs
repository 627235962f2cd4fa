//! In-process notification queue.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::job::NotificationJob;

/// Create a connected queue/receiver pair.
///
/// The sender half lives in the application state; the receiver half is
/// consumed by the [`crate::runner::NotificationRunner`].
pub fn channel() -> (NotificationQueue, mpsc::UnboundedReceiver<NotificationJob>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (NotificationQueue { tx }, rx)
}

/// Sender half of the notification queue.
///
/// Enqueuing never blocks and never fails the caller: if the runner is gone
/// the job is dropped with a warning, which matches the best-effort delivery
/// contract.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    tx: mpsc::UnboundedSender<NotificationJob>,
}

impl NotificationQueue {
    /// Enqueue a notification job.
    pub fn enqueue(&self, job: NotificationJob) {
        let kind = job.kind();
        match self.tx.send(job) {
            Ok(()) => debug!(kind, "Notification job enqueued"),
            Err(_) => warn!(kind, "Notification worker is gone, job dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medistaff_entity::employee::EmployeeSummary;
    use uuid::Uuid;

    fn employee() -> EmployeeSummary {
        EmployeeSummary {
            id: Uuid::new_v4(),
            dni: "31222333".to_string(),
            payroll_number: "L-0200".to_string(),
            first_name: "Lucía".to_string(),
            last_name: "Molina".to_string(),
            position_name: None,
            sector_name: None,
        }
    }

    #[tokio::test]
    async fn test_enqueue_round_trip() {
        let (queue, mut rx) = channel();
        queue.enqueue(NotificationJob::EquipmentReminder {
            employee: employee(),
            assets: Vec::new(),
        });

        let job = rx.recv().await.expect("job should arrive");
        assert_eq!(job.kind(), "equipment_reminder");
    }

    #[tokio::test]
    async fn test_enqueue_after_receiver_dropped_does_not_panic() {
        let (queue, rx) = channel();
        drop(rx);
        queue.enqueue(NotificationJob::EquipmentReminder {
            employee: employee(),
            assets: Vec::new(),
        });
    }
}
