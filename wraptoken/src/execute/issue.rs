//! Proof-gated transitions: Issue (mint against a proven lock) and Cancel
//! (reverse an unmatched lock after the cooldown).
//!
//! Both follow the same pipeline: bridge verification, decode/validate,
//! replay guard, then the transition's own effect. Every step runs inside
//! the host's atomic transaction, so a failure at any point leaves no
//! partial write behind.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::digest::{bytes32_to_hex, receipt_digest};
use crate::error::ContractError;
use crate::gateway;
use crate::ledger::{add_balance, TokenInfo, SUPPLIES};
use crate::proof::{validate_and_decode, ActionProof, BlockProof, ExtendedAsset, Xfer};
use crate::replay::record_if_new;
use crate::state::{CANCEL_COOLDOWN, CONFIG, MAX_SUPPLY};

use super::{ensure_enabled, xfer_receipt_event};

// ============================================================================
// Issue
// ============================================================================

/// Mint wrapped tokens to the beneficiary of a proven lock receipt.
///
/// The supply record for the symbol is created on first use with a zero
/// supply and the fixed ceiling. Replay of an identical proof is rejected
/// by the guard before any ledger mutation.
pub fn execute_issue(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action_proof: ActionProof,
    block_proof: Option<BlockProof>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_enabled(&config)?;

    // Bridge attests inclusion; rejection aborts the whole operation.
    gateway::verify_proof(
        &deps.querier,
        &config.bridge,
        &action_proof,
        block_proof.as_ref(),
    )?;

    let (xfer, _chain) = validate_and_decode(deps.storage, &action_proof, block_proof.as_ref())?;

    let digest = receipt_digest(&action_proof.receipt)?;
    let proof_id = record_if_new(deps.storage, &digest)?;

    let quantity = &xfer.quantity.quantity;
    let symbol = quantity.symbol.as_str();

    let mut token = match SUPPLIES.may_load(deps.storage, symbol)? {
        Some(token) => token,
        None => TokenInfo {
            supply: Uint128::zero(),
            max_supply: Uint128::new(MAX_SUPPLY),
            decimals: quantity.decimals,
            issuer: env.contract.address.clone(),
        },
    };

    if token.decimals != quantity.decimals {
        return Err(ContractError::PrecisionMismatch {
            symbol: symbol.to_string(),
            expected: token.decimals,
            got: quantity.decimals,
        });
    }

    if quantity.amount > token.max_supply - token.supply {
        return Err(ContractError::SupplyCeilingExceeded {
            max_supply: token.max_supply,
            supply: token.supply,
            requested: quantity.amount,
        });
    }

    token.supply += quantity.amount;
    SUPPLIES.save(deps.storage, symbol, &token)?;

    let beneficiary = deps.api.addr_validate(&xfer.beneficiary)?;
    add_balance(deps.storage, &beneficiary, symbol, quantity.amount)?;

    Ok(Response::new()
        .add_attribute("action", "issue")
        .add_attribute("prover", info.sender)
        .add_attribute("proof_id", proof_id.to_string())
        .add_attribute("receipt_digest", bytes32_to_hex(&digest))
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("amount", quantity.amount.to_string())
        .add_attribute("symbol", symbol))
}

// ============================================================================
// Cancel
// ============================================================================

/// Reverse a lock that was never issued on this side.
///
/// Validated exactly like `Issue`, including the replay-guard write so the
/// same lock cannot later be issued. Instead of minting, emits a reversal
/// receipt addressed back to the lock's owner. The cooldown compares
/// against the proof's claimed block timestamp, not receipt time.
pub fn execute_cancel(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action_proof: ActionProof,
    block_proof: Option<BlockProof>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_enabled(&config)?;

    gateway::verify_proof(
        &deps.querier,
        &config.bridge,
        &action_proof,
        block_proof.as_ref(),
    )?;

    let (xfer, _chain) = validate_and_decode(deps.storage, &action_proof, block_proof.as_ref())?;

    if xfer.owner != info.sender.as_str() {
        return Err(ContractError::NotLockOwner);
    }

    let now = env.block.time.seconds();
    let elapsed = now.saturating_sub(action_proof.block_timestamp);
    if elapsed <= CANCEL_COOLDOWN {
        return Err(ContractError::CancelCooldownActive {
            remaining_seconds: (action_proof.block_timestamp + CANCEL_COOLDOWN).saturating_sub(now),
        });
    }

    let digest = receipt_digest(&action_proof.receipt)?;
    let proof_id = record_if_new(deps.storage, &digest)?;

    // Return to the lock owner so the escrow can be released.
    let reversal = Xfer {
        owner: env.contract.address.to_string(),
        quantity: ExtendedAsset {
            quantity: xfer.quantity.quantity.clone(),
            contract: config.paired_token_contract.clone(),
        },
        beneficiary: xfer.owner.clone(),
    };

    Ok(Response::new()
        .add_event(xfer_receipt_event(&reversal))
        .add_attribute("action", "cancel")
        .add_attribute("prover", info.sender)
        .add_attribute("proof_id", proof_id.to_string())
        .add_attribute("receipt_digest", bytes32_to_hex(&digest))
        .add_attribute("amount", xfer.quantity.quantity.amount.to_string())
        .add_attribute("symbol", xfer.quantity.quantity.symbol))
}
