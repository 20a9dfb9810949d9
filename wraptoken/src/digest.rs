//! Digest computation for replay protection.
//!
//! The replay guard keys on a SHA-256 digest over the canonical (JSON)
//! serialization of a proof's action receipt - the minimal data that
//! uniquely identifies one source-chain event.

use cosmwasm_std::{to_json_binary, StdResult};
use sha2::{Digest, Sha256};

use crate::proof::ActionReceipt;

/// Compute the SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the replay-guard digest of an action receipt.
pub fn receipt_digest(receipt: &ActionReceipt) -> StdResult<[u8; 32]> {
    let serialized = to_json_binary(receipt)?;
    Ok(sha256(serialized.as_slice()))
}

/// Convert a 32-byte digest to a hex string (for attributes/errors).
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Whether a symbol code is valid: 1-7 uppercase ASCII letters.
pub fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty() && symbol.len() <= 7 && symbol.bytes().all(|b| b.is_ascii_uppercase())
}
