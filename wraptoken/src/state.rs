//! State definitions for the wraptoken contract.
//!
//! Holds the pairing configuration singleton and the chain registry.
//! Balance, supply, and replay-guard storage live in their own modules
//! (`ledger`, `replay`).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Configuration
// ============================================================================

/// Contract configuration, created once at instantiation.
#[cw_serde]
pub struct Config {
    /// Admin address for registry and enable/disable management
    pub admin: Addr,
    /// This chain's id (32 bytes)
    pub chain_id: Binary,
    /// Proof-verification bridge contract on this chain
    pub bridge: Addr,
    /// Chain id of the primary paired chain (32 bytes)
    pub paired_chain_id: Binary,
    /// Lock contract on the paired chain whose receipts authorize minting
    pub paired_lock_contract: String,
    /// Token contract on the paired chain that reversal receipts reference
    pub paired_token_contract: String,
    /// Whether user-facing operations are currently enabled
    pub enabled: bool,
}

/// Registered source chain: a paired chain id and the lock contract on it.
#[cw_serde]
pub struct ChainEntry {
    /// Chain id (32 bytes)
    pub chain_id: Binary,
    /// Lock contract address on that chain
    pub lock_contract: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:wraptoken";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds a lock must remain unmatched before it can be cancelled
pub const CANCEL_COOLDOWN: u64 = 900;

/// Supply ceiling fixed for every symbol at first issue
pub const MAX_SUPPLY: u128 = (1u128 << 62) - 1;

/// Maximum transfer memo length in bytes
pub const MAX_MEMO_BYTES: usize = 256;

// ============================================================================
// Storage
// ============================================================================

/// Pairing configuration singleton
pub const CONFIG: Item<Config> = Item::new("config");

/// Chain registry
/// Key: chain id (32 bytes), Value: ChainEntry
pub const CHAINS: Map<&[u8], ChainEntry> = Map::new("chains");
