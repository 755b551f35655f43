//! Injected Solana provider capability.
//!
//! Solana browser wallets expose a single `connect` request that doubles as
//! account authorization. The trait keeps the surface that small so a test
//! double is one method.

use async_trait::async_trait;
use thiserror::Error;

use crate::address;

/// Error returned by an injected Solana provider request.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The user declined the connection prompt.
    #[error("connection rejected: {0}")]
    Rejected(String),

    /// Any other provider failure.
    #[error("provider error: {0}")]
    Other(String),
}

/// Account handed back by a successful `connect` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolAccount {
    /// Raw 32-byte Ed25519 public key.
    pub public_key: [u8; 32],
}

impl SolAccount {
    /// The account's display address (Base58 of the public key).
    pub fn address(&self) -> String {
        address::bytes_to_address(&self.public_key)
    }
}

/// Capability interface of an injected Solana-compatible wallet provider.
#[async_trait]
pub trait SolanaProvider: Send + Sync {
    /// Requests a connection, implicitly authorizing the active account.
    /// Prompts the user and suspends until they respond.
    async fn connect(&self) -> Result<SolAccount, ProviderError>;
}
