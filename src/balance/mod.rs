//! Balance observer.
//!
//! # Responsibilities
//! - Keep a best-effort, eventually consistent view of the connected
//!   account's balance
//! - Fetch immediately on spawn, then poll on a fixed interval
//! - Publish snapshots wholesale (last successful fetch wins)
//!
//! A fetch failure keeps the previously published value and is logged, not
//! surfaced as a user-facing error; the display is advisory. Dropping the
//! observer aborts the poll task on every exit path, so the timer can never
//! outlive the owning view.

use std::sync::Arc;
use std::time::Duration;

use solana_sdk::pubkey::Pubkey;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::observability::metrics;
use crate::rpc::RpcHandle;

/// Handle to the polling task and the latest balance snapshot.
pub struct BalanceObserver {
    rpc: Arc<dyn RpcHandle>,
    owner: Pubkey,
    latest: Arc<watch::Sender<Option<u64>>>,
    rx: watch::Receiver<Option<u64>>,
    poll_task: JoinHandle<()>,
}

impl BalanceObserver {
    /// Start observing `owner`: one immediate fetch, then one every
    /// `poll_interval`.
    pub fn spawn(rpc: Arc<dyn RpcHandle>, owner: Pubkey, poll_interval: Duration) -> Self {
        let (tx, rx) = watch::channel(None);
        let latest = Arc::new(tx);
        let poll_task = tokio::spawn(poll_loop(
            rpc.clone(),
            owner,
            latest.clone(),
            poll_interval,
        ));

        Self {
            rpc,
            owner,
            latest,
            rx,
            poll_task,
        }
    }

    /// The account being observed.
    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    /// Most recent successful snapshot in lamports, `None` until the first
    /// fetch lands.
    pub fn latest(&self) -> Option<u64> {
        *self.rx.borrow()
    }

    /// Watch channel for UI change notifications.
    pub fn subscribe(&self) -> watch::Receiver<Option<u64>> {
        self.rx.clone()
    }

    /// Fire-and-forget one-shot fetch outside the poll cadence, e.g. right
    /// after a submission attempt.
    pub fn request_refresh(&self) {
        let rpc = self.rpc.clone();
        let owner = self.owner;
        let latest = self.latest.clone();
        tokio::spawn(async move {
            fetch_once(rpc.as_ref(), &owner, &latest).await;
        });
    }
}

impl Drop for BalanceObserver {
    fn drop(&mut self) {
        self.poll_task.abort();
    }
}

async fn poll_loop(
    rpc: Arc<dyn RpcHandle>,
    owner: Pubkey,
    latest: Arc<watch::Sender<Option<u64>>>,
    poll_interval: Duration,
) {
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        // First tick completes immediately.
        ticker.tick().await;
        fetch_once(rpc.as_ref(), &owner, &latest).await;
    }
}

async fn fetch_once(rpc: &dyn RpcHandle, owner: &Pubkey, latest: &watch::Sender<Option<u64>>) {
    match rpc.get_balance(owner).await {
        Ok(lamports) => {
            metrics::record_balance_fetch(true);
            latest.send_replace(Some(lamports));
        }
        Err(error) => {
            // Keep the previous value; no flicker to an empty state.
            metrics::record_balance_fetch(false);
            tracing::warn!(owner = %owner, error = %error, "balance fetch failed");
        }
    }
}
