//! Message types for the wraptoken contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::proof::{ActionProof, BlockProof, WrappedAsset, Xfer};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. Instantiation is the once-only initialization of
/// the pairing configuration; the paired chain is auto-registered in the
/// chain registry.
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address; defaults to the instantiating sender
    pub admin: Option<String>,
    /// This chain's id (32 bytes)
    pub chain_id: Binary,
    /// Proof-verification bridge contract on this chain
    pub bridge: String,
    /// Paired chain id (32 bytes)
    pub paired_chain_id: Binary,
    /// Lock contract on the paired chain
    pub paired_lock_contract: String,
    /// Token contract on the paired chain
    pub paired_token_contract: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint wrapped tokens against a proven lock receipt from a paired chain
    ///
    /// Authorization: anyone (the sender is the prover)
    Issue {
        action_proof: ActionProof,
        /// Present for heavy verification, absent for light verification
        block_proof: Option<BlockProof>,
    },

    /// Reverse a lock that was never issued, after the cooldown window
    ///
    /// Authorization: the owner of the locked transfer
    ///
    /// Validates the proof exactly as `Issue` does, then emits a reversal
    /// transfer receipt addressed back to the owner instead of minting.
    Cancel {
        action_proof: ActionProof,
        block_proof: Option<BlockProof>,
    },

    /// Burn wrapped tokens and emit a transfer receipt authorizing release
    /// of the original asset on the paired chain
    ///
    /// Authorization: the balance owner (sender)
    Retire {
        quantity: WrappedAsset,
        /// Account on the paired chain the released asset goes to
        beneficiary: String,
    },

    /// Move wrapped tokens between owners on this chain
    Transfer {
        to: String,
        quantity: WrappedAsset,
        /// At most 256 bytes
        memo: String,
    },

    /// Pre-create a zero balance row for an owner (idempotent)
    Open { owner: String, symbol: String },

    /// Remove the sender's zero balance row
    Close { symbol: String },

    /// Emit a provable transfer receipt
    ///
    /// Authorization: the contract itself only. Guarantees provable
    /// receipts can only originate from this contract's own retire and
    /// cancel logic, never from an external caller.
    EmitTransferReceipt { xfer: Xfer },

    /// Register an additional paired source chain
    ///
    /// Authorization: admin only
    AddChain {
        /// Chain id (32 bytes)
        chain_id: Binary,
        /// Lock contract on that chain
        lock_contract: String,
    },

    /// Remove a registered source chain
    ///
    /// Authorization: admin only
    RemoveChain { chain_id: Binary },

    /// Re-enable user-facing operations
    ///
    /// Authorization: admin only
    Enable {},

    /// Disable all user-facing mutating operations
    ///
    /// Authorization: admin only
    Disable {},

    /// Wipe all ledger and replay-guard state. Requires the contract to be
    /// disabled first.
    ///
    /// Authorization: admin only
    Clear {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Balance of an owner for a symbol
    #[returns(BalanceResponse)]
    Balance { owner: String, symbol: String },

    /// Supply record for a symbol
    #[returns(TokenInfoResponse)]
    TokenInfo { symbol: String },

    /// A registered source chain
    #[returns(ChainResponse)]
    Chain { chain_id: Binary },

    /// Paginated list of registered source chains
    #[returns(ChainsResponse)]
    Chains {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },

    /// Whether a receipt digest has been processed
    #[returns(IsProcessedResponse)]
    IsProcessed { digest: Binary },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub chain_id: Binary,
    pub bridge: Addr,
    pub paired_chain_id: Binary,
    pub paired_lock_contract: String,
    pub paired_token_contract: String,
    pub enabled: bool,
}

#[cw_serde]
pub struct BalanceResponse {
    /// Zero when no balance row exists
    pub amount: Uint128,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub symbol: String,
    pub supply: Uint128,
    pub max_supply: Uint128,
    pub decimals: u8,
    pub issuer: Addr,
}

#[cw_serde]
pub struct ChainResponse {
    pub chain_id: Binary,
    pub lock_contract: String,
}

#[cw_serde]
pub struct ChainsResponse {
    pub chains: Vec<ChainResponse>,
}

#[cw_serde]
pub struct IsProcessedResponse {
    pub processed: bool,
}
