//! Injected Ethereum provider capability.
//!
//! Browser wallets expose a request-based provider object to the page. This
//! module models that object as an explicit, dependency-injected trait so the
//! connection flows can run against the real bridge or a test double.

use alloy_primitives::U256;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::chains::EvmChain;

/// Error returned by an injected provider request.
///
/// Providers report failures with a numeric code alongside the message; the
/// codes that matter to the flows are exposed as constants.
#[derive(Debug, Clone, Error)]
#[error("provider error {code}: {message}")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    /// The user declined the request in the wallet prompt.
    pub const USER_REJECTED_REQUEST: i64 = 4001;

    /// The requested chain has not been registered with the wallet.
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;

    /// Internal provider failure.
    pub const INTERNAL_ERROR: i64 = -32603;

    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A rejection raised by the user declining the wallet prompt.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(Self::USER_REJECTED_REQUEST, message)
    }

    /// A generic provider-internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Self::INTERNAL_ERROR, message)
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Self::USER_REJECTED_REQUEST
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == Self::UNRECOGNIZED_CHAIN
    }
}

/// Chain metadata passed to the provider when registering a network.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    /// 0x-prefixed hex chain id.
    pub chain_id: String,
    pub rpc_url: String,
}

impl AddChainParams {
    /// Registration parameters for a chain from the registry.
    pub fn for_chain(chain: &EvmChain) -> Self {
        Self {
            chain_id: chain.chain_id_hex(),
            rpc_url: chain.rpc_url.to_string(),
        }
    }
}

/// Capability interface of an injected Ethereum-compatible wallet provider.
///
/// Every method maps to one provider request and may suspend indefinitely on
/// a user prompt; none of them are retried or cancelled by the flows.
#[async_trait]
pub trait EthereumProvider: Send + Sync {
    /// Requests account authorization. Prompts the user on first call;
    /// returns the authorized addresses (first entry is the active account).
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// The chain id of the provider's currently selected network.
    async fn chain_id(&self) -> Result<u64, ProviderError>;

    /// Asks the wallet to switch the selected network.
    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), ProviderError>;

    /// Registers a network with the wallet.
    async fn add_chain(&self, params: &AddChainParams) -> Result<(), ProviderError>;

    /// Native balance of `address` in wei.
    async fn get_balance(&self, address: &str) -> Result<U256, ProviderError>;

    /// Executes a read-only contract call and returns the raw ABI-encoded
    /// result.
    async fn call(&self, to: &str, data: &[u8]) -> Result<Vec<u8>, ProviderError>;
}
