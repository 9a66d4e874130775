//! Metrics collection.
//!
//! # Metrics
//! - `transfer_submissions_total` (counter): submissions by terminal outcome
//! - `balance_fetches_total` (counter): balance fetches by result
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - No exporter is installed here; the embedding application chooses the
//!   recorder (metric calls are no-ops until one is installed)

/// Record one finished submission attempt.
///
/// `outcome` is one of `confirmed`, `failed`, `timed_out`.
pub fn record_submission(outcome: &'static str) {
    metrics::counter!("transfer_submissions_total", "outcome" => outcome).increment(1);
}

/// Record one balance fetch.
pub fn record_balance_fetch(ok: bool) {
    let result = if ok { "ok" } else { "error" };
    metrics::counter!("balance_fetches_total", "result" => result).increment(1);
}
