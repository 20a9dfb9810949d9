//! Proof bundle types and the decode/validate pipeline.
//!
//! A caller submits an `ActionProof` (plus an optional `BlockProof` for
//! heavy verification). After the bridge attests cryptographic inclusion,
//! this module checks the business rules: the receipt must have been
//! emitted by the expected action of the registered lock contract on the
//! claimed chain, and the embedded transfer record must be well formed.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, Binary, Storage, Uint128};

use crate::digest::is_valid_symbol;
use crate::error::ContractError;
use crate::state::{ChainEntry, CHAINS};

/// Action name a lock contract uses for its provable transfer receipts.
/// Both sides of the bridge emit receipts under this name.
pub const XFER_RECEIPT_ACTION: &str = "emit_transfer_receipt";

/// An asset with symbol-fixed precision.
#[cw_serde]
pub struct WrappedAsset {
    pub amount: Uint128,
    pub symbol: String,
    pub decimals: u8,
}

/// An asset extended with the token contract it originates from.
#[cw_serde]
pub struct ExtendedAsset {
    pub quantity: WrappedAsset,
    pub contract: String,
}

/// The transfer record embedded in a proven receipt.
#[cw_serde]
pub struct Xfer {
    /// Account that locked the asset on the source chain
    pub owner: String,
    /// Locked quantity and its source token contract
    pub quantity: ExtendedAsset,
    /// Account the wrapped tokens are minted to (or released to, for
    /// reversal receipts)
    pub beneficiary: String,
}

/// The action a proof attests was executed on the source chain.
#[cw_serde]
pub struct ProvenAction {
    /// Contract that executed the action
    pub contract: String,
    /// Action name
    pub name: String,
    /// Serialized action payload (an `Xfer` for transfer receipts)
    pub payload: Binary,
}

/// Receipt uniquely identifying one execution of an action.
#[cw_serde]
pub struct ActionReceipt {
    /// Digest of the executed action
    pub act_digest: Binary,
    /// Source chain global sequence number of the receipt
    pub global_sequence: u64,
}

/// Proof that an action receipt is included in a block of the source chain.
#[cw_serde]
pub struct ActionProof {
    /// Claimed source chain id (32 bytes)
    pub chain_id: Binary,
    pub action: ProvenAction,
    pub receipt: ActionReceipt,
    /// Claimed timestamp (seconds) of the block containing the receipt
    pub block_timestamp: u64,
}

/// Block-inclusion proof for heavy (full header-chain) verification.
#[cw_serde]
pub struct BlockProof {
    /// Chain id the header chain belongs to (32 bytes)
    pub chain_id: Binary,
    /// Digest of the proven block header
    pub header_digest: Binary,
}

/// Validate an action proof against the chain registry and decode the
/// embedded transfer record.
///
/// Checks, in order: chain id well-formed and registered, block proof (if
/// any) consistent with the action proof, expected action name, expected
/// emitting contract, decodable payload, positive amount, valid symbol.
/// Any failure aborts the enclosing operation.
pub fn validate_and_decode(
    storage: &dyn Storage,
    action_proof: &ActionProof,
    block_proof: Option<&BlockProof>,
) -> Result<(Xfer, ChainEntry), ContractError> {
    if action_proof.chain_id.len() != 32 {
        return Err(ContractError::InvalidChainId {
            got: action_proof.chain_id.len(),
        });
    }

    if let Some(block_proof) = block_proof {
        if block_proof.chain_id != action_proof.chain_id {
            return Err(ContractError::ChainMismatch);
        }
    }

    let chain = CHAINS
        .may_load(storage, action_proof.chain_id.as_slice())?
        .ok_or(ContractError::ChainNotRegistered)?;

    if action_proof.action.name != XFER_RECEIPT_ACTION {
        return Err(ContractError::WrongAction {
            expected: XFER_RECEIPT_ACTION.to_string(),
            got: action_proof.action.name.clone(),
        });
    }

    if action_proof.action.contract != chain.lock_contract {
        return Err(ContractError::WrongSourceContract {
            expected: chain.lock_contract.clone(),
            got: action_proof.action.contract.clone(),
        });
    }

    let xfer: Xfer = from_json(&action_proof.action.payload)
        .map_err(|_| ContractError::InvalidPayload)?;

    if xfer.quantity.quantity.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if !is_valid_symbol(&xfer.quantity.quantity.symbol) {
        return Err(ContractError::InvalidSymbol {
            symbol: xfer.quantity.quantity.symbol.clone(),
        });
    }

    Ok((xfer, chain))
}
