//! Page-level core of the wallet-connect demo.
//!
//! Two independent integration flows — an injected Ethereum wallet and an
//! injected Solana wallet — share a view model that holds the authorized
//! session and the latest balance snapshot per chain. Providers are injected
//! as capability traits, so the flows run unchanged against a real wallet
//! bridge or a test double.

pub mod config;
pub mod error;
pub mod eth;
pub mod sol;
pub mod types;
pub mod view;

pub use config::{EthereumConfig, SolanaConfig, TokenConfig};
pub use error::ConnectError;
pub use eth::EthereumFlow;
pub use sol::SolanaFlow;
pub use types::{BalanceSnapshot, Chain, WalletSession};
pub use view::WalletView;
