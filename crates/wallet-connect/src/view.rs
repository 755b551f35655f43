//! Page-level view model.
//!
//! Holds both flows and the per-chain session/balance state. This is the
//! catch-log-ignore boundary: flow failures are logged and the state keeps
//! its previous value; nothing is surfaced to the rendered page.

use std::sync::Arc;

use tracing::warn;

use chain_eth::provider::EthereumProvider;
use chain_sol::provider::SolanaProvider;

use crate::config::{EthereumConfig, SolanaConfig};
use crate::error::ConnectError;
use crate::eth::EthereumFlow;
use crate::sol::SolanaFlow;
use crate::types::{BalanceSnapshot, WalletSession};

/// State behind the two connect buttons.
pub struct WalletView {
    eth: EthereumFlow,
    sol: SolanaFlow,
    eth_session: Option<WalletSession>,
    eth_balances: BalanceSnapshot,
    sol_session: Option<WalletSession>,
    sol_balances: BalanceSnapshot,
}

impl WalletView {
    /// View over the given injected providers with the default mainnet
    /// configuration. A `None` provider makes the matching connect button a
    /// silent no-op.
    pub fn new(
        eth_provider: Option<Arc<dyn EthereumProvider>>,
        sol_provider: Option<Arc<dyn SolanaProvider>>,
    ) -> Self {
        Self::with_configs(
            eth_provider,
            EthereumConfig::default(),
            sol_provider,
            SolanaConfig::default(),
        )
    }

    pub fn with_configs(
        eth_provider: Option<Arc<dyn EthereumProvider>>,
        eth_config: EthereumConfig,
        sol_provider: Option<Arc<dyn SolanaProvider>>,
        sol_config: SolanaConfig,
    ) -> Self {
        Self {
            eth: EthereumFlow::new(eth_provider, eth_config),
            sol: SolanaFlow::new(sol_provider, sol_config),
            eth_session: None,
            eth_balances: BalanceSnapshot::new(),
            sol_session: None,
            sol_balances: BalanceSnapshot::new(),
        }
    }

    /// Ethereum connect button. Authorizes, stores the session (repeat
    /// presses overwrite it), resolves balances, then validates the
    /// network. Every failure is logged and leaves the previous state.
    pub async fn connect_ethereum(&mut self) {
        match self.eth.connect().await {
            Ok(session) => {
                let address = session.address.clone();
                self.eth_session = Some(session);

                match self.eth.fetch_balances(&address).await {
                    Ok(snapshot) => self.eth_balances = snapshot,
                    Err(e) => warn!("failed to resolve ethereum balances: {e}"),
                }

                self.eth.ensure_chain().await;
            }
            Err(ConnectError::ProviderAbsent) => {}
            Err(e) => warn!("failed to connect ethereum wallet: {e}"),
        }
    }

    /// Solana connect button. Same shape as the Ethereum side, without a
    /// network-correction step.
    pub async fn connect_solana(&mut self) {
        match self.sol.connect().await {
            Ok(session) => {
                let address = session.address.clone();
                self.sol_session = Some(session);

                match self.sol.fetch_balance(&address).await {
                    Ok(snapshot) => self.sol_balances = snapshot,
                    Err(e) => warn!("failed to resolve solana balance: {e}"),
                }
            }
            Err(ConnectError::ProviderAbsent) => {}
            Err(e) => warn!("failed to connect solana wallet: {e}"),
        }
    }

    pub fn ethereum_session(&self) -> Option<&WalletSession> {
        self.eth_session.as_ref()
    }

    pub fn solana_session(&self) -> Option<&WalletSession> {
        self.sol_session.as_ref()
    }

    pub fn ethereum_balances(&self) -> &BalanceSnapshot {
        &self.eth_balances
    }

    pub fn solana_balances(&self) -> &BalanceSnapshot {
        &self.sol_balances
    }

    /// Display amount for an Ethereum-side asset, `"0"` when unknown.
    pub fn ethereum_balance(&self, symbol: &str) -> &str {
        self.eth_balances.display_amount(symbol)
    }

    /// Display amount for a Solana-side asset, `"0"` when unknown.
    pub fn solana_balance(&self, symbol: &str) -> &str {
        self.sol_balances.display_amount(symbol)
    }

    /// Block-explorer link for the connected Ethereum address.
    pub fn ethereum_address_url(&self) -> Option<String> {
        self.eth_session
            .as_ref()
            .map(|s| self.eth.config().chain.address_url(&s.address))
    }

    /// Block-explorer link for the connected Solana address.
    pub fn solana_address_url(&self) -> Option<String> {
        self.sol_session
            .as_ref()
            .map(|s| self.sol.config().address_url(&s.address))
    }
}
