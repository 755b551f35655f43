use alloy_primitives::U256;

use crate::abi::{encode_function_call, AbiParam};
use crate::address::parse_address;
use crate::error::EthError;

/// Function selector for `balanceOf(address)`: `0x70a08231`.
const BALANCE_OF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];

/// Function selector for `decimals()`: `0x313ce567`.
const DECIMALS_SELECTOR: [u8; 4] = [0x31, 0x3c, 0xe5, 0x67];

/// Encodes an ERC-20 `balanceOf(address)` call.
///
/// # Parameters
///
/// - `owner`: The address to query (0x-prefixed hex string).
///
/// # Returns
///
/// The complete calldata (4-byte selector + 32 bytes of ABI-encoded address).
pub fn encode_balance_of(owner: &str) -> Result<Vec<u8>, EthError> {
    let addr = parse_address(owner)?;
    let params = [AbiParam::Address(addr)];
    Ok(encode_function_call(BALANCE_OF_SELECTOR, &params))
}

/// Encodes an ERC-20 `decimals()` call (selector only, no parameters).
pub fn encode_decimals() -> Vec<u8> {
    encode_function_call(DECIMALS_SELECTOR, &[])
}

/// Decodes a single uint256 return value from ABI-encoded data.
///
/// Useful for decoding the return value of `balanceOf` and similar view
/// functions that return a single uint256.
pub fn decode_uint256(data: &[u8]) -> Result<U256, EthError> {
    if data.len() < 32 {
        return Err(EthError::DecodingError(format!(
            "expected at least 32 bytes for uint256, got {}",
            data.len()
        )));
    }

    let mut word = [0u8; 32];
    word.copy_from_slice(&data[..32]);
    Ok(U256::from_be_bytes(word))
}

/// Decodes a uint8 return value (as produced by `decimals()`).
///
/// The value arrives ABI-encoded as a full 32-byte word; anything above
/// `u8::MAX` means the contract is not returning a uint8.
pub fn decode_decimals(data: &[u8]) -> Result<u8, EthError> {
    let value = decode_uint256(data)?;
    if value > U256::from(u8::MAX) {
        return Err(EthError::DecodingError(format!(
            "decimals value {value} does not fit in uint8"
        )));
    }
    Ok(value.to::<u8>())
}
