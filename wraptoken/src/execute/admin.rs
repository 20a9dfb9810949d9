//! Administrative operations: chain registry management, enable/disable,
//! state clearing, and self-authorized receipt emission.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Order, Response, StdResult};

use crate::error::ContractError;
use crate::ledger::{BALANCES, SUPPLIES};
use crate::proof::Xfer;
use crate::replay;
use crate::state::{ChainEntry, CHAINS, CONFIG};

use super::xfer_receipt_event;

// ============================================================================
// Chain Registry
// ============================================================================

/// Register an additional paired source chain.
pub fn execute_add_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: Binary,
    lock_contract: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if chain_id.len() != 32 {
        return Err(ContractError::InvalidChainId {
            got: chain_id.len(),
        });
    }
    if CHAINS.may_load(deps.storage, chain_id.as_slice())?.is_some() {
        return Err(ContractError::ChainAlreadyRegistered);
    }

    CHAINS.save(
        deps.storage,
        chain_id.as_slice(),
        &ChainEntry {
            chain_id: chain_id.clone(),
            lock_contract: lock_contract.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "add_chain")
        .add_attribute("chain_id", format!("0x{}", hex::encode(chain_id.as_slice())))
        .add_attribute("lock_contract", lock_contract))
}

/// Remove a registered source chain.
pub fn execute_remove_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if CHAINS.may_load(deps.storage, chain_id.as_slice())?.is_none() {
        return Err(ContractError::ChainNotRegistered);
    }
    CHAINS.remove(deps.storage, chain_id.as_slice());

    Ok(Response::new()
        .add_attribute("action", "remove_chain")
        .add_attribute("chain_id", format!("0x{}", hex::encode(chain_id.as_slice()))))
}

// ============================================================================
// Enable / Disable
// ============================================================================

/// Re-enable user-facing operations.
pub fn execute_enable(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.enabled = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "enable"))
}

/// Disable all user-facing mutating operations.
pub fn execute_disable(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.enabled = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "disable"))
}

// ============================================================================
// Clear
// ============================================================================

/// Wipe all ledger and replay-guard state. Only available while the
/// contract is disabled.
pub fn execute_clear(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    if config.enabled {
        return Err(ContractError::NotDisabled);
    }

    let balance_keys = BALANCES
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    for (owner, symbol) in &balance_keys {
        BALANCES.remove(deps.storage, (owner, symbol));
    }

    let symbols = SUPPLIES
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    for symbol in &symbols {
        SUPPLIES.remove(deps.storage, symbol);
    }

    replay::clear(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "clear")
        .add_attribute("balances_removed", balance_keys.len().to_string())
        .add_attribute("supplies_removed", symbols.len().to_string()))
}

// ============================================================================
// EmitTransferReceipt
// ============================================================================

/// Emit a provable transfer receipt. Only the contract itself may call
/// this, so a provable receipt can only originate from this contract.
/// Retire and cancel emit their receipts in-process; this entry point is
/// the message-level emission surface for self-addressed submessages.
pub fn execute_emit_transfer_receipt(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    xfer: Xfer,
) -> Result<Response, ContractError> {
    CONFIG.load(deps.storage)?;

    if info.sender != env.contract.address {
        return Err(ContractError::NotContractSelf);
    }

    Ok(Response::new()
        .add_event(xfer_receipt_event(&xfer))
        .add_attribute("action", "emit_transfer_receipt"))
}
