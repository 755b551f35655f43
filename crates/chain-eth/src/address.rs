//! Ethereum address parsing and validation.
//!
//! Addresses are handled as display strings exactly as the injected provider
//! returns them; only the format (0x prefix + 40 hex characters) is checked.

use crate::error::EthError;

/// Parses a 0x-prefixed hex address string into a 20-byte array.
pub fn parse_address(address: &str) -> Result<[u8; 20], EthError> {
    let hex_str = address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")).ok_or_else(
        || EthError::InvalidAddress("address must start with 0x".into()),
    )?;

    if hex_str.len() != 40 {
        return Err(EthError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_str.len()
        )));
    }

    let bytes = hex::decode(hex_str)
        .map_err(|e| EthError::InvalidAddress(format!("invalid hex: {e}")))?;

    let mut addr = [0u8; 20];
    addr.copy_from_slice(&bytes);
    Ok(addr)
}

/// Validates an Ethereum address string.
///
/// Checks that the address has the correct format (0x + 40 hex characters).
/// Case is ignored; no checksum is verified.
pub fn validate_address(address: &str) -> Result<bool, EthError> {
    parse_address(address)?;
    Ok(true)
}
