//! Solana chain support for the wallet-connect demo.
//!
//! This crate handles Solana address handling, the injected wallet provider
//! capability, and native balance lookups over JSON-RPC — all without pulling
//! in `solana-sdk` (which drags in 200+ transitive dependencies). The RPC
//! surface the demo needs is one method, issued with `reqwest` directly.

pub mod address;
pub mod error;
pub mod provider;
pub mod rpc;
pub mod units;

// Re-export key public types for ergonomic imports.
pub use address::{address_to_bytes, bytes_to_address, validate_address};
pub use error::SolError;
pub use provider::{ProviderError, SolAccount, SolanaProvider};
pub use rpc::{Commitment, RpcClient};
pub use units::{format_sol, lamports_to_sol, LAMPORTS_PER_SOL};
