//! Solana connection flow: connect-and-authorize against the injected
//! provider, then a native balance read over JSON-RPC.

use std::sync::Arc;

use tracing::debug;

use chain_sol::provider::SolanaProvider;
use chain_sol::rpc::RpcClient;
use chain_sol::units;

use crate::config::SolanaConfig;
use crate::error::ConnectError;
use crate::types::{BalanceSnapshot, Chain, WalletSession};

/// Wallet integration for the Solana side of the page.
pub struct SolanaFlow {
    provider: Option<Arc<dyn SolanaProvider>>,
    config: SolanaConfig,
}

impl SolanaFlow {
    /// `provider` is `None` when no Solana-capable wallet is injected.
    pub fn new(provider: Option<Arc<dyn SolanaProvider>>, config: SolanaConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &SolanaConfig {
        &self.config
    }

    /// Requests a connection (implicit authorization) and builds a session
    /// from the returned public key. Suspends on the wallet prompt.
    pub async fn connect(&self) -> Result<WalletSession, ConnectError> {
        let provider = self.provider.as_ref().ok_or(ConnectError::ProviderAbsent)?;

        let account = provider.connect().await?;

        Ok(WalletSession {
            chain: Chain::Solana,
            address: account.address(),
        })
    }

    /// Resolves the native balance of `address` into a single-entry
    /// snapshot, reading at the configured commitment level.
    pub async fn fetch_balance(&self, address: &str) -> Result<BalanceSnapshot, ConnectError> {
        let rpc = RpcClient::new(self.config.rpc_url.clone(), self.config.commitment)?;
        let lamports = rpc.get_balance(address).await?;

        debug!(address, lamports, "resolved solana balance");

        Ok(BalanceSnapshot::new()
            .with_amount(Chain::Solana.symbol().to_ascii_lowercase(), units::format_sol(lamports)))
    }
}
