//! Transfer submission control flow.
//!
//! # Responsibilities
//! - Fail-fast input validation, in order
//! - Fresh checkpoint fetch and transaction construction per attempt
//! - Delegated sign+broadcast with per-wallet send options
//! - Confirmation race against a wall-clock timeout
//! - Exactly one pending and one terminal notification per attempt
//!
//! # Design Decisions
//! - Mutual exclusion via an in-flight flag, not a queue: a duplicate
//!   submit is ignored, never queued for retry
//! - The flow performs no retry loops of its own; the broadcast retry
//!   budget is delegated to the wallet's send call
//! - Timeout loss drops the confirmation poll future instead of awaiting
//!   it further (fire-and-forget on timeout)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use tokio::time::timeout;

use crate::config::{AppConfig, FlowConfig};
use crate::notify::NotificationSink;
use crate::observability::metrics;
use crate::rpc::{Checkpoint, ConfirmationError, RpcHandle};
use crate::transfer::classify;
use crate::transfer::error::TransferError;
use crate::transfer::types::{ParsedTransfer, SubmissionOutcome, TransferRequest};
use crate::wallet::{SendOptions, SendOverrides, WalletAdapter};

/// One-at-a-time transfer submission pipeline.
///
/// Holds no wallet or connection state; both are passed per call so the
/// flow stays agnostic of how the embedding UI manages them.
pub struct TransferFlow {
    config: FlowConfig,
    commitment: CommitmentConfig,
    overrides: SendOverrides,
    notifier: Arc<dyn NotificationSink>,
    in_flight: AtomicBool,
}

impl TransferFlow {
    /// Build a flow from configuration, merging configured wallet overrides
    /// over the built-in table.
    pub fn new(config: &AppConfig, notifier: Arc<dyn NotificationSink>) -> Self {
        let mut overrides = SendOverrides::default();
        overrides.merge(config.wallet_overrides.clone());

        Self {
            config: config.flow.clone(),
            commitment: config.rpc.commitment,
            overrides,
            notifier,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run one submission attempt to a terminal outcome.
    ///
    /// Mutually exclusive with itself: while an attempt is in flight a
    /// second call returns [`SubmissionOutcome::Pending`] without touching
    /// the wallet or the network. The balance poll may interleave freely.
    pub async fn submit(
        &self,
        request: TransferRequest,
        wallet: Option<&dyn WalletAdapter>,
        rpc: &dyn RpcHandle,
    ) -> SubmissionOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("submission already in flight, ignoring");
            return SubmissionOutcome::Pending;
        };

        self.notifier.info("Submitting transfer...");

        let result = self.run(&request, wallet, rpc).await;

        // The pending notice must not outlive the attempt; exactly one
        // terminal notice follows.
        self.notifier.dismiss();
        match result {
            Ok(signature) => {
                metrics::record_submission("confirmed");
                tracing::info!(signature = %signature, "transfer confirmed");
                self.notifier.success("Transfer successful!");
                SubmissionOutcome::Confirmed(signature)
            }
            Err(TransferError::TimedOut) => {
                metrics::record_submission("timed_out");
                tracing::warn!("confirmation wait elapsed, transaction status unknown");
                self.notifier
                    .error(&classify::user_facing_message(&TransferError::TimedOut));
                SubmissionOutcome::TimedOut
            }
            Err(error) => {
                metrics::record_submission("failed");
                tracing::warn!(error = %error, "transfer failed");
                self.notifier.error(&classify::user_facing_message(&error));
                SubmissionOutcome::Failed(error)
            }
        }
        // _guard drops here, clearing the in-flight flag on every path.
    }

    async fn run(
        &self,
        request: &TransferRequest,
        wallet: Option<&dyn WalletAdapter>,
        rpc: &dyn RpcHandle,
    ) -> Result<Signature, TransferError> {
        let wallet = wallet.ok_or(TransferError::NotConnected)?;
        let sender = wallet.pubkey().ok_or(TransferError::NotConnected)?;

        // Malformed input never reaches the network layer.
        let parsed = ParsedTransfer::parse(request)?;

        // Best-effort client-side check, read fresh; the network is the
        // final arbiter.
        let available = rpc
            .get_balance(&sender)
            .await
            .map_err(|e| TransferError::NetworkUnavailable(e.to_string()))?;
        let required = parsed
            .lamports
            .saturating_add(self.config.fee_reserve_lamports);
        if available < required {
            return Err(TransferError::InsufficientBalance {
                required,
                available,
            });
        }

        // No retry here; fetch failure surfaces for a manual re-submission.
        let checkpoint = rpc
            .get_latest_checkpoint(self.commitment)
            .await
            .map_err(|e| TransferError::NetworkUnavailable(e.to_string()))?;

        let transaction = build_transfer(&sender, &parsed, &checkpoint);

        let options = self
            .overrides
            .resolve(wallet.name(), self.base_send_options());
        tracing::debug!(
            wallet = wallet.name(),
            lamports = parsed.lamports,
            skip_preflight = options.skip_preflight,
            "sending transaction"
        );

        let signature = wallet
            .send_transaction(transaction, rpc, options)
            .await
            .map_err(|e| TransferError::SubmissionRejected(e.to_string()))?;
        tracing::info!(signature = %signature, "transaction sent, awaiting confirmation");

        // First-to-complete race: on timeout the poll future is dropped,
        // never awaited further.
        let wait = Duration::from_secs(self.config.confirmation_timeout_secs);
        match timeout(wait, rpc.confirm_transaction(&signature, &checkpoint)).await {
            Ok(Ok(())) => Ok(signature),
            Ok(Err(ConfirmationError::Expired)) => Err(TransferError::Expired),
            Ok(Err(ConfirmationError::TransactionFailed(reason))) => {
                Err(TransferError::Unknown(reason))
            }
            Ok(Err(ConfirmationError::Rpc(e))) => Err(TransferError::Unknown(e.to_string())),
            Err(_) => Err(TransferError::TimedOut),
        }
    }

    fn base_send_options(&self) -> SendOptions {
        SendOptions {
            skip_preflight: self.config.skip_preflight,
            preflight_commitment: self.commitment,
            max_retries: self.config.max_send_retries,
        }
    }
}

/// Build the single-instruction transfer referencing exactly `checkpoint`.
///
/// The transaction is consumed by one send call and never reused across
/// attempts; a later attempt fetches its own checkpoint.
fn build_transfer(
    sender: &Pubkey,
    parsed: &ParsedTransfer,
    checkpoint: &Checkpoint,
) -> Transaction {
    let instruction = system_instruction::transfer(sender, &parsed.recipient, parsed.lamports);
    let mut transaction = Transaction::new_with_payer(&[instruction], Some(sender));
    transaction.message.recent_blockhash = checkpoint.blockhash;
    transaction
}

/// Clears the in-flight flag on drop, whichever way the attempt ends.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
