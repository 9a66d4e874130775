//! Form-level behavior: field lifecycle, connection handling, and the
//! balance view tied to it.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use common::{MockRpc, MockWallet, RecordingNotifier};
use sol_transfer::{AppConfig, SubmissionOutcome, TransferError, TransferForm};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;

fn form_with(rpc: Arc<MockRpc>) -> TransferForm {
    TransferForm::new(
        &AppConfig::default(),
        rpc,
        Arc::new(RecordingNotifier::default()),
    )
}

#[tokio::test(start_paused = true)]
async fn test_confirmed_submission_clears_input_fields() {
    let rpc = Arc::new(MockRpc::with_balance(10 * LAMPORTS_PER_SOL));
    let mut form = form_with(rpc.clone());
    form.connect(Arc::new(MockWallet::connected("Phantom")));

    form.set_recipient(Pubkey::new_unique().to_string());
    form.set_amount("1.5");

    let outcome = form.submit().await;
    assert!(matches!(outcome, SubmissionOutcome::Confirmed(_)));
    assert_eq!(form.recipient(), "");
    assert_eq!(form.amount(), "");
}

#[tokio::test(start_paused = true)]
async fn test_failed_submission_keeps_input_fields() {
    let rpc = Arc::new(MockRpc::with_balance(LAMPORTS_PER_SOL));
    let mut form = form_with(rpc.clone());
    form.connect(Arc::new(MockWallet::connected("Phantom")));

    let recipient = Pubkey::new_unique().to_string();
    form.set_recipient(recipient.clone());
    form.set_amount("2.0");

    let outcome = form.submit().await;
    assert!(matches!(
        outcome,
        SubmissionOutcome::Failed(TransferError::InsufficientBalance { .. })
    ));
    assert_eq!(form.recipient(), recipient);
    assert_eq!(form.amount(), "2.0");
}

#[tokio::test(start_paused = true)]
async fn test_submit_without_wallet_fails_fast() {
    let rpc = Arc::new(MockRpc::with_balance(LAMPORTS_PER_SOL));
    let mut form = form_with(rpc.clone());

    form.set_recipient(Pubkey::new_unique().to_string());
    form.set_amount("1");

    let outcome = form.submit().await;
    assert_eq!(outcome, SubmissionOutcome::Failed(TransferError::NotConnected));
    assert_eq!(rpc.network_calls(), 0);
    assert!(form.balance().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_connect_starts_balance_polling() {
    let rpc = Arc::new(MockRpc::with_balance(3 * LAMPORTS_PER_SOL));
    let mut form = form_with(rpc.clone());

    assert!(form.balance().is_none());
    form.connect(Arc::new(MockWallet::connected("Phantom")));

    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(form.balance(), Some(3 * LAMPORTS_PER_SOL));
    assert_eq!(rpc.balance_calls.load(Ordering::SeqCst), 1);

    // Fixed 10s cadence while connected.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(rpc.balance_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_disconnect_stops_polling_and_clears_balance() {
    let rpc = Arc::new(MockRpc::with_balance(3 * LAMPORTS_PER_SOL));
    let mut form = form_with(rpc.clone());
    form.connect(Arc::new(MockWallet::connected("Phantom")));

    tokio::time::sleep(Duration::from_millis(1)).await;
    assert!(form.balance().is_some());
    let calls_before = rpc.balance_calls.load(Ordering::SeqCst);

    form.disconnect();
    assert!(form.balance().is_none());
    assert!(!form.is_connected());

    // No further fetches after teardown.
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(rpc.balance_calls.load(Ordering::SeqCst), calls_before);
}

#[tokio::test(start_paused = true)]
async fn test_submission_triggers_balance_refresh_even_on_failure() {
    let rpc = Arc::new(MockRpc::with_balance(LAMPORTS_PER_SOL));
    let mut form = form_with(rpc.clone());
    form.connect(Arc::new(MockWallet::connected("Phantom")));

    tokio::time::sleep(Duration::from_millis(1)).await;
    let calls_before = rpc.balance_calls.load(Ordering::SeqCst);

    // Insufficient balance: the attempt fails, but fees may still have
    // moved the balance, so a refresh is requested anyway.
    form.set_recipient(Pubkey::new_unique().to_string());
    form.set_amount("2.0");
    let outcome = form.submit().await;
    assert!(matches!(outcome, SubmissionOutcome::Failed(_)));

    tokio::time::sleep(Duration::from_millis(1)).await;
    // One fetch from the flow's own balance check, one from the refresh.
    assert_eq!(rpc.balance_calls.load(Ordering::SeqCst), calls_before + 2);
}
