//! Ethereum/EVM chain support for the wallet-connect demo.
//!
//! This crate provides:
//! - The injected Ethereum provider capability interface
//! - Multi-chain EVM network definitions
//! - ERC-20 balance/decimals call encoding and result decoding
//! - Minimal ABI encoding utilities
//! - Exact wei/token base-unit to display-unit conversion

pub mod abi;
pub mod address;
pub mod chains;
pub mod erc20;
pub mod error;
pub mod provider;
pub mod units;
