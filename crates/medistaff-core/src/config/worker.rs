//! Notification worker configuration.

use serde::{Deserialize, Serialize};

/// Settings for the background notification dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Delay before dispatching a queued notification, in milliseconds.
    ///
    /// Keeps email delivery fully decoupled from the HTTP response that
    /// triggered it.
    #[serde(default = "default_dispatch_delay_ms")]
    pub dispatch_delay_ms: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            dispatch_delay_ms: default_dispatch_delay_ms(),
        }
    }
}

fn default_dispatch_delay_ms() -> u64 {
    500
}
