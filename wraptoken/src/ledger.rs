//! Balance and supply storage.
//!
//! Balances use a composite (owner, symbol) key in a single ordered map.
//! Invariant: for every symbol, the sum of all owner balances equals the
//! recorded supply, and `0 <= supply <= max_supply`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage, Uint128};
use cw_storage_plus::Map;

use crate::error::ContractError;

/// Per-symbol supply record. `max_supply` is fixed at first issue and
/// never increased.
#[cw_serde]
pub struct TokenInfo {
    pub supply: Uint128,
    pub max_supply: Uint128,
    pub decimals: u8,
    pub issuer: Addr,
}

/// Wrapped token balances
/// Key: (owner, symbol), Value: amount
pub const BALANCES: Map<(&Addr, &str), Uint128> = Map::new("balances");

/// Supply records
/// Key: symbol, Value: TokenInfo
pub const SUPPLIES: Map<&str, TokenInfo> = Map::new("supplies");

/// Credit an owner's balance, creating the row if absent.
pub fn add_balance(
    storage: &mut dyn Storage,
    owner: &Addr,
    symbol: &str,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let balance = BALANCES
        .may_load(storage, (owner, symbol))?
        .unwrap_or(Uint128::zero());
    let updated = balance.checked_add(amount).map_err(|e| {
        ContractError::Std(cosmwasm_std::StdError::overflow(e))
    })?;
    BALANCES.save(storage, (owner, symbol), &updated)?;
    Ok(updated)
}

/// Debit an owner's balance. Fails if the row is absent or the balance
/// is insufficient; the row is kept even when it reaches zero.
pub fn sub_balance(
    storage: &mut dyn Storage,
    owner: &Addr,
    symbol: &str,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let balance =
        BALANCES
            .may_load(storage, (owner, symbol))?
            .ok_or_else(|| ContractError::NoBalance {
                owner: owner.to_string(),
                symbol: symbol.to_string(),
            })?;
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            available: balance,
            needed: amount,
        });
    }
    let updated = balance - amount;
    BALANCES.save(storage, (owner, symbol), &updated)?;
    Ok(updated)
}

/// Load a supply record, failing with `UnknownSymbol` if absent.
pub fn load_token_info(storage: &dyn Storage, symbol: &str) -> Result<TokenInfo, ContractError> {
    SUPPLIES
        .may_load(storage, symbol)?
        .ok_or_else(|| ContractError::UnknownSymbol {
            symbol: symbol.to_string(),
        })
}
