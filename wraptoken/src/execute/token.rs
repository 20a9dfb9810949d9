//! Ledger surface: Transfer, Retire, Open, Close.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::ledger::{add_balance, load_token_info, sub_balance, BALANCES, SUPPLIES};
use crate::proof::{ExtendedAsset, WrappedAsset, Xfer};
use crate::state::{CONFIG, MAX_MEMO_BYTES};

use super::{ensure_enabled, xfer_receipt_event};

/// Check a quantity against its supply record: positive amount and
/// matching precision.
fn validate_quantity(
    deps: &DepsMut,
    quantity: &WrappedAsset,
) -> Result<(), ContractError> {
    if quantity.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let token = load_token_info(deps.storage, &quantity.symbol)?;
    if token.decimals != quantity.decimals {
        return Err(ContractError::PrecisionMismatch {
            symbol: quantity.symbol.clone(),
            expected: token.decimals,
            got: quantity.decimals,
        });
    }
    Ok(())
}

// ============================================================================
// Transfer
// ============================================================================

/// Move wrapped tokens from the sender to another owner.
pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    quantity: WrappedAsset,
    memo: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_enabled(&config)?;

    let to = deps.api.addr_validate(&to)?;
    if to == info.sender {
        return Err(ContractError::SelfTransfer);
    }
    if memo.len() > MAX_MEMO_BYTES {
        return Err(ContractError::MemoTooLong { len: memo.len() });
    }
    validate_quantity(&deps, &quantity)?;

    sub_balance(deps.storage, &info.sender, &quantity.symbol, quantity.amount)?;
    add_balance(deps.storage, &to, &quantity.symbol, quantity.amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", to)
        .add_attribute("amount", quantity.amount.to_string())
        .add_attribute("symbol", quantity.symbol)
        .add_attribute("memo", memo))
}

// ============================================================================
// Retire
// ============================================================================

/// Burn the sender's wrapped tokens and emit the transfer receipt the
/// paired chain's release logic will later prove.
pub fn execute_retire(
    deps: DepsMut,
    info: MessageInfo,
    quantity: WrappedAsset,
    beneficiary: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_enabled(&config)?;

    validate_quantity(&deps, &quantity)?;

    sub_balance(deps.storage, &info.sender, &quantity.symbol, quantity.amount)?;

    let mut token = load_token_info(deps.storage, &quantity.symbol)?;
    token.supply = token
        .supply
        .checked_sub(quantity.amount)
        .map_err(|e| ContractError::Std(cosmwasm_std::StdError::overflow(e)))?;
    SUPPLIES.save(deps.storage, &quantity.symbol, &token)?;

    let receipt = Xfer {
        owner: info.sender.to_string(),
        quantity: ExtendedAsset {
            quantity: quantity.clone(),
            contract: config.paired_token_contract.clone(),
        },
        beneficiary: beneficiary.clone(),
    };

    Ok(Response::new()
        .add_event(xfer_receipt_event(&receipt))
        .add_attribute("action", "retire")
        .add_attribute("owner", info.sender)
        .add_attribute("amount", quantity.amount.to_string())
        .add_attribute("symbol", quantity.symbol)
        .add_attribute("beneficiary", beneficiary))
}

// ============================================================================
// Open / Close
// ============================================================================

/// Pre-create a zero balance row for an owner. Idempotent; the sender
/// pays for the row.
pub fn execute_open(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    symbol: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_enabled(&config)?;

    let owner = deps.api.addr_validate(&owner)?;
    load_token_info(deps.storage, &symbol)?;

    if BALANCES
        .may_load(deps.storage, (&owner, &symbol))?
        .is_none()
    {
        BALANCES.save(deps.storage, (&owner, &symbol), &Uint128::zero())?;
    }

    Ok(Response::new()
        .add_attribute("action", "open")
        .add_attribute("payer", info.sender)
        .add_attribute("owner", owner)
        .add_attribute("symbol", symbol))
}

/// Remove the sender's zero balance row.
pub fn execute_close(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_enabled(&config)?;

    let balance = BALANCES
        .may_load(deps.storage, (&info.sender, &symbol))?
        .ok_or_else(|| ContractError::NoBalance {
            owner: info.sender.to_string(),
            symbol: symbol.clone(),
        })?;
    if !balance.is_zero() {
        return Err(ContractError::BalanceNotZero);
    }
    BALANCES.remove(deps.storage, (&info.sender, &symbol));

    Ok(Response::new()
        .add_attribute("action", "close")
        .add_attribute("owner", info.sender)
        .add_attribute("symbol", symbol))
}
