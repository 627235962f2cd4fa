//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Login/bootstrap settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Username of the bootstrap console account created on first start.
    #[serde(default = "default_bootstrap_username")]
    pub bootstrap_username: String,
    /// Password for the bootstrap account. Left empty, no account is
    /// created.
    #[serde(default)]
    pub bootstrap_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bootstrap_username: default_bootstrap_username(),
            bootstrap_password: String::new(),
        }
    }
}

fn default_bootstrap_username() -> String {
    "admin".to_string()
}
