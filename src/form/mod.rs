//! Form-level state: the owning UI component.
//!
//! Owns the raw input strings, the in-flight submission flow, the optional
//! connected wallet, and the balance observer tied to the connection
//! lifetime. The only shared mutable state — the in-flight flag and the
//! latest balance snapshot — lives here, never in the network or wallet
//! collaborators.

use std::sync::Arc;
use std::time::Duration;

use crate::balance::BalanceObserver;
use crate::config::AppConfig;
use crate::notify::NotificationSink;
use crate::rpc::RpcHandle;
use crate::transfer::flow::TransferFlow;
use crate::transfer::types::{SubmissionOutcome, TransferRequest};
use crate::wallet::WalletAdapter;

/// The transfer form: inputs, connection state, and one submission pipeline.
pub struct TransferForm {
    recipient: String,
    amount: String,
    flow: TransferFlow,
    rpc: Arc<dyn RpcHandle>,
    wallet: Option<Arc<dyn WalletAdapter>>,
    balance: Option<BalanceObserver>,
    poll_interval: Duration,
}

impl TransferForm {
    pub fn new(
        config: &AppConfig,
        rpc: Arc<dyn RpcHandle>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            recipient: String::new(),
            amount: String::new(),
            flow: TransferFlow::new(config, notifier),
            rpc,
            wallet: None,
            balance: None,
            poll_interval: Duration::from_secs(config.balance.poll_interval_secs),
        }
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.recipient = recipient.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Attach a connected wallet and start observing its balance.
    pub fn connect(&mut self, wallet: Arc<dyn WalletAdapter>) {
        if let Some(owner) = wallet.pubkey() {
            self.balance = Some(BalanceObserver::spawn(
                self.rpc.clone(),
                owner,
                self.poll_interval,
            ));
        }
        self.wallet = Some(wallet);
    }

    /// Detach the wallet. Stops balance polling and clears the snapshot;
    /// dropping the observer aborts its poll task.
    pub fn disconnect(&mut self) {
        self.wallet = None;
        self.balance = None;
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.as_ref().is_some_and(|w| w.pubkey().is_some())
    }

    /// Latest balance snapshot in lamports; `None` when disconnected or not
    /// yet fetched.
    pub fn balance(&self) -> Option<u64> {
        self.balance.as_ref().and_then(BalanceObserver::latest)
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.flow.is_in_flight()
    }

    /// Submit the current input as one transfer attempt.
    ///
    /// Clears the input fields only on `Confirmed`, and requests an
    /// asynchronous balance refresh on every terminal outcome — a failed
    /// send may still have moved the balance via fees. The ignored
    /// duplicate (`Pending`) has no side effects at all.
    pub async fn submit(&mut self) -> SubmissionOutcome {
        let request = TransferRequest {
            recipient: self.recipient.clone(),
            amount: self.amount.clone(),
        };

        let wallet = self.wallet.clone();
        let outcome = self
            .flow
            .submit(request, wallet.as_deref(), self.rpc.as_ref())
            .await;

        match &outcome {
            SubmissionOutcome::Pending => return outcome,
            SubmissionOutcome::Confirmed(_) => {
                self.recipient.clear();
                self.amount.clear();
            }
            SubmissionOutcome::Failed(_) | SubmissionOutcome::TimedOut => {}
        }

        if let Some(observer) = &self.balance {
            observer.request_refresh();
        }

        outcome
    }
}
