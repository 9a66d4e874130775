//! Wallet collaborator contract.
//!
//! # Responsibilities
//! - Define the capability surface the flow needs from a connected wallet
//! - Send option defaults and per-wallet overrides
//!
//! The wallet owns all key material and signing; this crate only hands it a
//! fully built transaction and receives a signature back. Nothing here may
//! assume a specific wallet's internals beyond the override table in
//! [`overrides`].

use async_trait::async_trait;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use thiserror::Error;

use crate::rpc::RpcHandle;

pub mod overrides;

pub use overrides::{SendOverride, SendOverrides};

/// Parameters for a single sign-and-broadcast call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOptions {
    /// Skip the preflight simulation before broadcast.
    pub skip_preflight: bool,
    /// Commitment level the preflight simulation runs at.
    pub preflight_commitment: CommitmentConfig,
    /// Broadcast retry budget delegated to the wallet (bounded, never infinite).
    pub max_retries: usize,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            skip_preflight: false,
            preflight_commitment: CommitmentConfig::confirmed(),
            max_retries: 5,
        }
    }
}

/// Errors surfaced by a wallet adapter.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The wallet (or the user behind it) declined to sign.
    #[error("wallet declined to sign: {0}")]
    Declined(String),

    /// Signing succeeded but the broadcast was rejected.
    #[error("broadcast failed: {0}")]
    Send(String),
}

/// Capability set of a connected wallet, polymorphic over implementation.
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Adapter display name; also the key into the override table.
    fn name(&self) -> &str;

    /// Public identity of the connected account, `None` while disconnected.
    fn pubkey(&self) -> Option<Pubkey>;

    /// Sign `transaction`, broadcast it through `rpc`, return the signature.
    ///
    /// One call covers sign + broadcast so the wallet can apply its own
    /// retry policy up to `options.max_retries`.
    async fn send_transaction(
        &self,
        transaction: Transaction,
        rpc: &dyn RpcHandle,
        options: SendOptions,
    ) -> Result<Signature, WalletError>;
}
