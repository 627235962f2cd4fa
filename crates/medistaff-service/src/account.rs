//! Console login with Argon2id password verification.
//!
//! Replaces the plaintext credential comparison of the legacy system with a
//! salted hash and constant-time verification.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use tracing::info;

use medistaff_core::config::auth::AuthConfig;
use medistaff_core::error::AppError;
use medistaff_core::result::AppResult;
use medistaff_database::repositories::account::AccountRepository;
use medistaff_entity::account::Account;

/// Handles console authentication.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// Account repository.
    accounts: Arc<AccountRepository>,
}

impl AccountService {
    /// Create a new account service.
    pub fn new(accounts: Arc<AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Verify a username/password pair.
    ///
    /// Unknown usernames and wrong passwords return the same error so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Account> {
        let account = self
            .accounts
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        if !verify_password(password, &account.password_hash)? {
            return Err(AppError::authentication("Invalid username or password"));
        }

        Ok(account)
    }

    /// Create the bootstrap account on first start.
    ///
    /// Does nothing when accounts already exist or when no bootstrap
    /// password is configured.
    pub async fn ensure_bootstrap_account(&self, config: &AuthConfig) -> AppResult<()> {
        if config.bootstrap_password.is_empty() {
            return Ok(());
        }

        if self.accounts.count().await? > 0 {
            return Ok(());
        }

        let hash = hash_password(&config.bootstrap_password)?;
        self.accounts
            .create(&config.bootstrap_username, &hash)
            .await?;

        info!(username = %config.bootstrap_username, "Bootstrap account created");
        Ok(())
    }
}

/// Hash a plaintext password using Argon2id with a random salt.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored Argon2id hash.
fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::internal(format!(
            "Password verification failed: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("hunter2!").unwrap();
        assert!(verify_password("hunter2!", &hash).unwrap());
        assert!(!verify_password("hunter3!", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("pw", "not-a-phc-string").is_err());
    }
}
