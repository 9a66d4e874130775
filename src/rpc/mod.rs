//! RPC connection collaborator contract.
//!
//! # Responsibilities
//! - Define the read/confirm surface the submission flow needs from an
//!   RPC endpoint
//! - Strong-typed checkpoint and error definitions
//!
//! The crate performs no wire-protocol work of its own. Implementations wrap
//! an actual JSON-RPC client; tests use in-memory mocks with call counters.

use async_trait::async_trait;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use thiserror::Error;

/// A recent blockhash together with the block height it stays valid until.
///
/// Fetched fresh per submission and never reused across attempts; a stale
/// checkpoint is rejected network-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// Errors for plain read requests (balance, checkpoint).
#[derive(Debug, Error)]
pub enum RpcError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Transport(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),
}

/// Terminal failures reported by the confirmation poll.
#[derive(Debug, Error)]
pub enum ConfirmationError {
    /// The checkpoint's validity window passed before the transaction landed.
    #[error("blockhash expired before confirmation")]
    Expired,

    /// The transaction landed but errored during execution.
    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    /// The poll itself could not reach the network.
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

/// Read-and-confirm capabilities of an RPC endpoint.
///
/// [`confirm_transaction`](RpcHandle::confirm_transaction) is expected to
/// poll internally and resolve once the network reports a terminal status;
/// the submission flow races it against a wall-clock timeout and drops the
/// future on loss, so implementations must tolerate being cancelled at any
/// await point.
#[async_trait]
pub trait RpcHandle: Send + Sync {
    /// Current balance of `address` in lamports.
    async fn get_balance(&self, address: &Pubkey) -> Result<u64, RpcError>;

    /// Latest blockhash and its validity bound at the given commitment.
    async fn get_latest_checkpoint(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<Checkpoint, RpcError>;

    /// Wait until the network reports a terminal status for `signature`.
    ///
    /// `Ok(())` means the transaction landed with no execution error.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        checkpoint: &Checkpoint,
    ) -> Result<(), ConfirmationError>;
}
