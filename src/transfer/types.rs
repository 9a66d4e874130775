//! Submission flow data model.

use std::str::FromStr;

use solana_sdk::native_token::sol_to_lamports;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::transfer::error::TransferError;

/// Raw user input for one transfer attempt.
///
/// Built from the form fields on submit, never persisted, discarded after
/// the attempt regardless of outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferRequest {
    /// Base58 recipient address as typed.
    pub recipient: String,
    /// Amount in SOL as typed.
    pub amount: String,
}

/// A validated transfer request.
///
/// Invariants: `lamports > 0` and the recipient decoded to a structurally
/// valid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTransfer {
    pub recipient: Pubkey,
    pub lamports: u64,
}

impl ParsedTransfer {
    /// Validate raw input synchronously, before any network call.
    pub fn parse(request: &TransferRequest) -> Result<Self, TransferError> {
        let recipient = Pubkey::from_str(request.recipient.trim())
            .map_err(|_| TransferError::InvalidRecipient)?;

        let amount: f64 = request
            .amount
            .trim()
            .parse()
            .map_err(|_| TransferError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TransferError::InvalidAmount);
        }

        let lamports = sol_to_lamports(amount);
        if lamports == 0 {
            // Positive but rounds below one lamport.
            return Err(TransferError::InvalidAmount);
        }

        Ok(Self {
            recipient,
            lamports,
        })
    }
}

/// Outcome of one submission attempt.
///
/// Created `Pending` at send time and transitions exactly once to a terminal
/// state. [`TransferFlow::submit`](crate::transfer::flow::TransferFlow::submit)
/// also returns `Pending` for an attempt ignored because another one is
/// still in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Pending,
    Confirmed(Signature),
    Failed(TransferError),
    TimedOut,
}

impl SubmissionOutcome {
    /// Whether this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmissionOutcome::Pending)
    }
}
