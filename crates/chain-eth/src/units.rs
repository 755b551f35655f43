//! Base-unit to display-unit conversion for EVM assets.
//!
//! On-chain balances are 256-bit integers in the asset's smallest unit (wei
//! for ether, `10^-decimals` units for ERC-20 tokens). Display conversion is
//! exact base-10 division on [`U256`] — never binary floating point, which
//! cannot represent these integers past 2^53.

use alloy_primitives::U256;

use crate::error::EthError;

/// Number of wei in one ether (10^18).
pub const WEI_PER_ETHER: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Decimal precision of the native ether unit.
pub const ETHER_DECIMALS: u32 = 18;

/// Largest decimal precision accepted by [`format_units`]; 10^78 no longer
/// fits in a uint256.
pub const MAX_DECIMALS: u32 = 77;

/// Converts a raw base-unit amount to display form as `raw / 10^decimals`.
///
/// The result is an exact decimal string: integer part, and a fractional
/// part with trailing zeros trimmed (omitted entirely when zero). Exact for
/// every representable input, up to `U256::MAX` at 77 decimals.
pub fn format_units(raw: U256, decimals: u32) -> Result<String, EthError> {
    if decimals > MAX_DECIMALS {
        return Err(EthError::EncodingError(format!(
            "decimal precision {decimals} out of range (max {MAX_DECIMALS})"
        )));
    }

    let scale = U256::from(10u64).pow(U256::from(decimals));
    Ok(format_scaled(raw, scale, decimals))
}

/// Converts a wei amount to its display form in ether.
pub fn format_wei(raw: U256) -> String {
    format_scaled(raw, WEI_PER_ETHER, ETHER_DECIMALS)
}

fn format_scaled(raw: U256, scale: U256, decimals: u32) -> String {
    let int = raw / scale;
    let rem = raw % scale;

    if rem.is_zero() {
        return int.to_string();
    }

    // Left-pad the remainder to the full precision, then trim trailing zeros.
    let mut frac = format!("{:0>width$}", rem.to_string(), width = decimals as usize);
    while frac.ends_with('0') {
        frac.pop();
    }

    format!("{int}.{frac}")
}
