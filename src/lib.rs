//! Solana transfer submission library.
//!
//! Drives a single-asset transfer from raw user input to a terminal outcome:
//!
//! ```text
//! input → validation → balance check → checkpoint fetch → build transaction
//!       → wallet sign+send → confirmation race (wall-clock bound) → outcome
//! ```
//!
//! Cryptographic signing, transaction serialization, and the RPC wire
//! protocol stay behind the [`wallet::WalletAdapter`] and [`rpc::RpcHandle`]
//! collaborator traits; this crate owns the control flow, validation,
//! concurrency guard, and outcome classification around them.

pub mod balance;
pub mod config;
pub mod form;
pub mod notify;
pub mod observability;
pub mod rpc;
pub mod transfer;
pub mod wallet;

pub use config::schema::AppConfig;
pub use form::TransferForm;
pub use transfer::error::TransferError;
pub use transfer::flow::TransferFlow;
pub use transfer::types::{SubmissionOutcome, TransferRequest};
