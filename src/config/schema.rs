//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal (or empty) config is valid.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

use crate::wallet::SendOverride;

/// Root configuration for the transfer application.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// RPC endpoint settings.
    pub rpc: RpcConfig,

    /// Submission flow settings.
    pub flow: FlowConfig,

    /// Balance observer settings.
    pub balance: BalanceConfig,

    /// Per-wallet send option overrides, merged over the built-in table.
    pub wallet_overrides: HashMap<String, SendOverride>,
}

/// RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Endpoint URL handed to whichever client backs the connection handle.
    pub url: String,

    /// Commitment level used for checkpoint fetches and preflight.
    pub commitment: CommitmentConfig,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "https://api.devnet.solana.com".to_string(),
            commitment: CommitmentConfig::confirmed(),
            request_timeout_secs: 10,
        }
    }
}

/// Submission flow configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Wall-clock bound on the confirmation wait, in seconds.
    pub confirmation_timeout_secs: u64,

    /// Broadcast retry budget delegated to the wallet's send call.
    pub max_send_retries: usize,

    /// Default preflight simulation toggle (overridable per wallet).
    pub skip_preflight: bool,

    /// Lamports held back from the spendable balance to cover the
    /// signature fee in the client-side balance check.
    pub fee_reserve_lamports: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            confirmation_timeout_secs: 30,
            max_send_retries: 5,
            skip_preflight: false,
            fee_reserve_lamports: 5_000,
        }
    }
}

/// Balance observer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Poll cadence while a wallet is connected, in seconds.
    pub poll_interval_secs: u64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 10,
        }
    }
}
