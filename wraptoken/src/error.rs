//! Error types for the wraptoken contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the contract itself can emit transfer receipts")]
    NotContractSelf,

    #[error("Unauthorized: caller is not the owner of the locked transfer")]
    NotLockOwner,

    // ========================================================================
    // Contract State Errors
    // ========================================================================

    #[error("Contract is disabled")]
    Disabled,

    #[error("Contract must be disabled before clearing state")]
    NotDisabled,

    // ========================================================================
    // Proof Errors
    // ========================================================================

    #[error("Proof rejected by bridge: {reason}")]
    ProofRejected { reason: String },

    #[error("Proof action name mismatch: expected {expected}, got {got}")]
    WrongAction { expected: String, got: String },

    #[error("Proof emitted by {got}, expected paired lock contract {expected}")]
    WrongSourceContract { expected: String, got: String },

    #[error("Block proof chain does not match action proof chain")]
    ChainMismatch,

    #[error("Invalid chain id: expected 32 bytes, got {got}")]
    InvalidChainId { got: usize },

    #[error("Could not decode transfer record from proof payload")]
    InvalidPayload,

    // ========================================================================
    // Replay Errors
    // ========================================================================

    #[error("Action already proved: receipt digest {digest} has been processed")]
    AlreadyProcessed { digest: String },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Invalid symbol: {symbol}")]
    InvalidSymbol { symbol: String },

    #[error("Token with symbol {symbol} does not exist")]
    UnknownSymbol { symbol: String },

    #[error("Symbol precision mismatch: {symbol} has {expected} decimals, got {got}")]
    PrecisionMismatch {
        symbol: String,
        expected: u8,
        got: u8,
    },

    #[error("Quantity must be positive")]
    ZeroAmount,

    #[error("Quantity exceeds available supply: ceiling {max_supply}, supply {supply}, requested {requested}")]
    SupplyCeilingExceeded {
        max_supply: Uint128,
        supply: Uint128,
        requested: Uint128,
    },

    #[error("No balance object found for {owner} / {symbol}")]
    NoBalance { owner: String, symbol: String },

    #[error("Overdrawn balance: available {available}, needed {needed}")]
    InsufficientBalance {
        available: Uint128,
        needed: Uint128,
    },

    #[error("Cannot close because the balance is not zero")]
    BalanceNotZero,

    #[error("Cannot transfer to self")]
    SelfTransfer,

    #[error("Memo has more than 256 bytes: got {len}")]
    MemoTooLong { len: usize },

    // ========================================================================
    // Chain Registry Errors
    // ========================================================================

    #[error("Chain already registered")]
    ChainAlreadyRegistered,

    #[error("Chain not registered")]
    ChainNotRegistered,

    // ========================================================================
    // Cancellation Errors
    // ========================================================================

    #[error("Cancel cooldown active: {remaining_seconds} seconds remaining")]
    CancelCooldownActive { remaining_seconds: u64 },
}
