//! Transfer submission subsystem.
//!
//! # Data Flow
//! ```text
//! TransferRequest (raw input)
//!     → types.rs (validation → ParsedTransfer)
//!     → flow.rs (balance check → checkpoint → build → send → confirm race)
//!     → SubmissionOutcome (terminal)
//!     → classify.rs (user-facing message, presentation only)
//! ```

pub mod classify;
pub mod error;
pub mod flow;
pub mod types;

pub use error::{TransferError, TransferResult};
pub use flow::TransferFlow;
pub use types::{ParsedTransfer, SubmissionOutcome, TransferRequest};
