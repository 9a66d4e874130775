//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts and intervals > 0)
//! - Returns all validation errors, not just the first

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("rpc.url must not be empty")]
    EmptyRpcUrl,

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("wallet_overrides contains an entry with an empty wallet name")]
    EmptyWalletName,
}

/// Run all semantic checks over `config`.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.rpc.url.trim().is_empty() {
        errors.push(ValidationError::EmptyRpcUrl);
    }
    if config.rpc.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration {
            field: "rpc.request_timeout_secs",
        });
    }
    if config.flow.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration {
            field: "flow.confirmation_timeout_secs",
        });
    }
    if config.balance.poll_interval_secs == 0 {
        errors.push(ValidationError::ZeroDuration {
            field: "balance.poll_interval_secs",
        });
    }
    if config.wallet_overrides.keys().any(|name| name.trim().is_empty()) {
        errors.push(ValidationError::EmptyWalletName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
