//! Submission failure taxonomy.

use thiserror::Error;

/// Classified failure of one submission attempt.
///
/// Validation failures are terminal and local: no retry, no partial state
/// change. `TimedOut` is indeterminate and must never be presented as a
/// success or failure determination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// No wallet connected, or the wallet has no public identity.
    #[error("wallet not connected")]
    NotConnected,

    /// The recipient string does not decode to a valid address.
    #[error("invalid recipient address")]
    InvalidRecipient,

    /// The amount string is not a finite number strictly greater than zero.
    #[error("invalid amount")]
    InvalidAmount,

    /// Client-estimated shortfall; the network is the final arbiter and may
    /// still reject for fee or race reasons even when this check passes.
    #[error("insufficient balance: need {required} lamports, have {available}")]
    InsufficientBalance { required: u64, available: u64 },

    /// Balance or checkpoint fetch failed. Retry is manual, via
    /// re-submission.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The wallet or the network declined to sign or broadcast.
    #[error("submission rejected: {0}")]
    SubmissionRejected(String),

    /// The checkpoint's validity window passed before confirmation.
    #[error("blockhash expired before confirmation")]
    Expired,

    /// Neither confirmation nor rejection within the wait; the true status
    /// is unknown.
    #[error("confirmation timed out; transaction status unknown")]
    TimedOut,

    /// Unclassified failure, reason carried verbatim.
    #[error("{0}")]
    Unknown(String),
}

/// Result type for submission operations.
pub type TransferResult<T> = Result<T, TransferError>;
