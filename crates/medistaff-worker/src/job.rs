//! Notification job payloads.

use serde::{Deserialize, Serialize};

use medistaff_entity::employee::EmployeeSummary;
use medistaff_entity::equipment::EquipmentSummary;
use medistaff_entity::offboarding::OffboardingRecord;

/// One queued notification.
///
/// Jobs carry their full payload so the worker never reads the database;
/// whatever was true at commit time is what gets mailed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationJob {
    /// Notify systems/HR that an employee exit was processed.
    OffboardingNotice {
        /// The offboarded employee.
        employee: EmployeeSummary,
        /// The committed offboarding record.
        record: OffboardingRecord,
    },
    /// Remind systems/HR that an offboarded employee still holds equipment.
    EquipmentReminder {
        /// The offboarded employee.
        employee: EmployeeSummary,
        /// The assets not yet returned.
        assets: Vec<EquipmentSummary>,
    },
}

impl NotificationJob {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OffboardingNotice { .. } => "offboarding_notice",
            Self::EquipmentReminder { .. } => "equipment_reminder",
        }
    }
}
