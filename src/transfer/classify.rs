//! Presentation-only mapping of failures to user-facing messages.
//!
//! Pure string mapping over the error taxonomy plus known substrings of
//! underlying wallet/network reasons. Never feeds back into control flow.

use crate::transfer::error::TransferError;

/// User-facing message for a failed attempt.
pub fn user_facing_message(error: &TransferError) -> String {
    match error {
        TransferError::NotConnected => "Please connect your wallet first!".to_string(),
        TransferError::InvalidRecipient => "Invalid recipient address".to_string(),
        TransferError::InvalidAmount => "Invalid amount".to_string(),
        TransferError::InsufficientBalance { .. } => "Insufficient balance".to_string(),
        TransferError::NetworkUnavailable(_) => "Network error. Please try again.".to_string(),
        TransferError::Expired => {
            "Transfer failed: transaction expired - please try again".to_string()
        }
        TransferError::TimedOut => {
            "Transaction status unknown - check an explorer before retrying".to_string()
        }
        TransferError::SubmissionRejected(reason) | TransferError::Unknown(reason) => {
            format!("Transfer failed: {}", classify_reason(reason))
        }
    }
}

/// Map known substrings of an underlying reason to friendlier wording;
/// everything else passes through verbatim.
fn classify_reason(reason: &str) -> String {
    let lower = reason.to_lowercase();
    if lower.contains("insufficient funds") {
        "Insufficient funds in wallet".to_string()
    } else if lower.contains("blockhash") {
        "Transaction timeout - please try again".to_string()
    } else if lower.contains("cors") {
        "Origin blocked by the RPC endpoint - please use the wallet's mobile app".to_string()
    } else {
        reason.to_string()
    }
}
