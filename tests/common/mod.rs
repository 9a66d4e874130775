//! Shared mock collaborators for integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sol_transfer::notify::NotificationSink;
use sol_transfer::rpc::{Checkpoint, ConfirmationError, RpcError, RpcHandle};
use sol_transfer::wallet::{SendOptions, WalletAdapter, WalletError};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tokio::sync::Notify;

/// How the mock confirmation poll behaves.
pub enum ConfirmBehavior {
    /// Lands cleanly.
    Resolve,
    /// Lands with an execution error.
    Fail(&'static str),
    /// Blockhash expires before the transaction lands.
    Expire,
    /// Never resolves; the flow's timeout must win the race.
    Hang,
    /// Resolves cleanly only after the gate is released.
    Gated(Arc<Notify>),
}

/// RPC mock with per-method call counters.
pub struct MockRpc {
    pub balance: u64,
    /// `None` makes the checkpoint fetch fail.
    pub checkpoint: Option<Checkpoint>,
    pub confirm: ConfirmBehavior,
    pub balance_calls: AtomicU32,
    pub checkpoint_calls: AtomicU32,
    pub confirm_calls: AtomicU32,
}

impl MockRpc {
    pub fn with_balance(balance: u64) -> Self {
        Self {
            balance,
            checkpoint: Some(Checkpoint {
                blockhash: Hash::new_unique(),
                last_valid_block_height: 100,
            }),
            confirm: ConfirmBehavior::Resolve,
            balance_calls: AtomicU32::new(0),
            checkpoint_calls: AtomicU32::new(0),
            confirm_calls: AtomicU32::new(0),
        }
    }

    /// Total network calls observed, any method.
    pub fn network_calls(&self) -> u32 {
        self.balance_calls.load(Ordering::SeqCst)
            + self.checkpoint_calls.load(Ordering::SeqCst)
            + self.confirm_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RpcHandle for MockRpc {
    async fn get_balance(&self, _address: &Pubkey) -> Result<u64, RpcError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.balance)
    }

    async fn get_latest_checkpoint(
        &self,
        _commitment: CommitmentConfig,
    ) -> Result<Checkpoint, RpcError> {
        self.checkpoint_calls.fetch_add(1, Ordering::SeqCst);
        self.checkpoint
            .ok_or_else(|| RpcError::Transport("checkpoint fetch failed".to_string()))
    }

    async fn confirm_transaction(
        &self,
        _signature: &Signature,
        _checkpoint: &Checkpoint,
    ) -> Result<(), ConfirmationError> {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        match &self.confirm {
            ConfirmBehavior::Resolve => Ok(()),
            ConfirmBehavior::Fail(reason) => {
                Err(ConfirmationError::TransactionFailed((*reason).to_string()))
            }
            ConfirmBehavior::Expire => Err(ConfirmationError::Expired),
            ConfirmBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            ConfirmBehavior::Gated(gate) => {
                gate.notified().await;
                Ok(())
            }
        }
    }
}

/// Wallet mock recording send calls and the options it received.
pub struct MockWallet {
    pub name: String,
    pub pubkey: Option<Pubkey>,
    pub signature: Signature,
    /// `Some` makes the send call fail with a declined error.
    pub decline_with: Option<&'static str>,
    pub send_calls: AtomicU32,
    pub last_options: Mutex<Option<SendOptions>>,
}

impl MockWallet {
    pub fn connected(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pubkey: Some(Pubkey::new_unique()),
            signature: Signature::from([7u8; 64]),
            decline_with: None,
            send_calls: AtomicU32::new(0),
            last_options: Mutex::new(None),
        }
    }

    pub fn disconnected(name: &str) -> Self {
        Self {
            pubkey: None,
            ..Self::connected(name)
        }
    }

    pub fn sent_options(&self) -> Option<SendOptions> {
        *self.last_options.lock().unwrap()
    }
}

#[async_trait]
impl WalletAdapter for MockWallet {
    fn name(&self) -> &str {
        &self.name
    }

    fn pubkey(&self) -> Option<Pubkey> {
        self.pubkey
    }

    async fn send_transaction(
        &self,
        _transaction: Transaction,
        _rpc: &dyn RpcHandle,
        options: SendOptions,
    ) -> Result<Signature, WalletError> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_options.lock().unwrap() = Some(options);
        match self.decline_with {
            Some(reason) => Err(WalletError::Declined(reason.to_string())),
            None => Ok(self.signature),
        }
    }
}

/// Notification sink recording every event in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
    Dismiss,
}

#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<Notice> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&Notice) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|n| matches(n)).count()
    }
}

impl NotificationSink for RecordingNotifier {
    fn info(&self, message: &str) {
        self.events.lock().unwrap().push(Notice::Info(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.events.lock().unwrap().push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events.lock().unwrap().push(Notice::Error(message.to_string()));
    }

    fn dismiss(&self) {
        self.events.lock().unwrap().push(Notice::Dismiss);
    }
}
