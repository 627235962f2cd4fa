//! Offboarding record status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an offboarding record.
///
/// Records are immutable after creation except for this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "offboarding_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OffboardingStatus {
    /// The exit was processed; notification may still be in flight.
    Processed,
    /// A notification email was confirmed delivered.
    Notified,
}

impl OffboardingStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Notified => "notified",
        }
    }
}

impl fmt::Display for OffboardingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
