//! Read-only configuration for the two flows.
//!
//! Everything here is constant for the process lifetime; `Default` gives the
//! mainnet setup the demo ships with.

use chain_eth::chains::{EvmChain, ETHEREUM};
use chain_sol::rpc::Commitment;

/// ERC-20 token reported alongside the native Ethereum balance.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Lowercase symbol used as the snapshot key.
    pub symbol: &'static str,
    pub contract: &'static str,
}

/// Tether USD on Ethereum mainnet.
pub const USDT: TokenConfig = TokenConfig {
    symbol: "usdt",
    contract: "0xdAC17F958D2ee523a2206206994597C13D831ec7",
};

/// Public Solana mainnet RPC endpoint.
pub const SOLANA_MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";

/// Solana block explorer.
pub const SOLANA_EXPLORER_URL: &str = "https://explorer.solana.com";

/// Ethereum flow configuration: the target network and the token contract.
#[derive(Debug, Clone)]
pub struct EthereumConfig {
    pub chain: &'static EvmChain,
    pub token: TokenConfig,
}

impl Default for EthereumConfig {
    fn default() -> Self {
        Self {
            chain: &ETHEREUM,
            token: USDT,
        }
    }
}

/// Solana flow configuration: the RPC endpoint and read commitment.
#[derive(Debug, Clone)]
pub struct SolanaConfig {
    pub rpc_url: String,
    pub commitment: Commitment,
}

impl SolanaConfig {
    /// Block-explorer URL for an address.
    pub fn address_url(&self, address: &str) -> String {
        format!("{SOLANA_EXPLORER_URL}/address/{address}")
    }
}

impl Default for SolanaConfig {
    fn default() -> Self {
        Self {
            rpc_url: SOLANA_MAINNET_RPC.to_string(),
            commitment: Commitment::Confirmed,
        }
    }
}
