use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Supported blockchain networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    Ethereum,
    Solana,
}

impl Chain {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Solana => "Solana",
        }
    }

    /// Native token symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ETH",
            Chain::Solana => "SOL",
        }
    }
}

/// Authorized account on one chain.
///
/// The address is taken verbatim from the provider's authorization response;
/// nothing re-verifies that it is the account holding the balances shown
/// later. Lives only as long as the view — never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSession {
    pub chain: Chain,
    pub address: String,
}

/// Asset balances for one chain, keyed by lowercase symbol.
///
/// A snapshot is replaced wholesale on each successful fetch; partial
/// results are never published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    amounts: BTreeMap<String, String>,
}

impl BalanceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an asset amount, replacing any previous entry for the symbol.
    pub fn with_amount(mut self, symbol: impl Into<String>, amount: impl Into<String>) -> Self {
        self.amounts.insert(symbol.into(), amount.into());
        self
    }

    /// The recorded amount for `symbol`, if any.
    pub fn amount(&self, symbol: &str) -> Option<&str> {
        self.amounts.get(symbol).map(String::as_str)
    }

    /// Display amount for `symbol`, defaulting to `"0"` when absent.
    pub fn display_amount(&self, symbol: &str) -> &str {
        self.amount(symbol).unwrap_or("0")
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.amounts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
