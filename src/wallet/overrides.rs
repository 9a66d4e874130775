//! Per-wallet send option overrides.
//!
//! Certain wallet integrations are known to reject transactions that pass
//! preflight simulation. Those exceptions live in one explicit lookup table
//! keyed by adapter name, never as conditionals scattered through the
//! submission flow, so the policy stays auditable and extensible.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::SendOptions;

/// Partial override of [`SendOptions`] for one wallet adapter.
///
/// Unset fields fall through to the flow-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SendOverride {
    pub skip_preflight: Option<bool>,
    pub max_retries: Option<usize>,
}

/// Lookup table of adapter name → send option overrides.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SendOverrides {
    entries: HashMap<String, SendOverride>,
}

impl Default for SendOverrides {
    /// Built-in workaround list. Trust Wallet rejects preflight-valid
    /// transactions on some RPC providers, so it broadcasts unsimulated.
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "Trust Wallet".to_string(),
            SendOverride {
                skip_preflight: Some(true),
                max_retries: None,
            },
        );
        Self { entries }
    }
}

impl SendOverrides {
    /// Table with no entries, not even the built-in ones.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace the override for one wallet.
    pub fn insert(&mut self, wallet_name: impl Into<String>, overrides: SendOverride) {
        self.entries.insert(wallet_name.into(), overrides);
    }

    /// Merge configured entries over the current table (configured wins).
    pub fn merge(&mut self, entries: HashMap<String, SendOverride>) {
        self.entries.extend(entries);
    }

    /// Resolve the effective options for `wallet_name` on top of `base`.
    pub fn resolve(&self, wallet_name: &str, base: SendOptions) -> SendOptions {
        let Some(ov) = self.entries.get(wallet_name) else {
            return base;
        };
        SendOptions {
            skip_preflight: ov.skip_preflight.unwrap_or(base.skip_preflight),
            preflight_commitment: base.preflight_commitment,
            max_retries: ov.max_retries.unwrap_or(base.max_retries),
        }
    }
}
