//! Query handlers for the wraptoken contract.

use cosmwasm_std::{Binary, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::ledger::{BALANCES, SUPPLIES};
use crate::msg::{
    BalanceResponse, ChainResponse, ChainsResponse, ConfigResponse, IsProcessedResponse,
    TokenInfoResponse,
};
use crate::replay;
use crate::state::{CHAINS, CONFIG};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        chain_id: config.chain_id,
        bridge: config.bridge,
        paired_chain_id: config.paired_chain_id,
        paired_lock_contract: config.paired_lock_contract,
        paired_token_contract: config.paired_token_contract,
        enabled: config.enabled,
    })
}

/// Query an owner's balance for a symbol. Zero when no row exists.
pub fn query_balance(deps: Deps, owner: String, symbol: String) -> StdResult<BalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let amount = BALANCES
        .may_load(deps.storage, (&owner, &symbol))?
        .unwrap_or(Uint128::zero());
    Ok(BalanceResponse { amount })
}

/// Query the supply record for a symbol.
pub fn query_token_info(deps: Deps, symbol: String) -> StdResult<TokenInfoResponse> {
    let token = SUPPLIES.load(deps.storage, &symbol)?;
    Ok(TokenInfoResponse {
        symbol,
        supply: token.supply,
        max_supply: token.max_supply,
        decimals: token.decimals,
        issuer: token.issuer,
    })
}

/// Query a registered source chain.
pub fn query_chain(deps: Deps, chain_id: Binary) -> StdResult<ChainResponse> {
    let chain = CHAINS.load(deps.storage, chain_id.as_slice())?;
    Ok(ChainResponse {
        chain_id: chain.chain_id,
        lock_contract: chain.lock_contract,
    })
}

/// Query paginated list of registered source chains.
pub fn query_chains(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<ChainsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start: Option<Bound<&[u8]>> = start_after
        .as_ref()
        .map(|id| Bound::exclusive(id.as_slice()));

    let chains: Vec<ChainResponse> = CHAINS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, chain) = item?;
            Ok(ChainResponse {
                chain_id: chain.chain_id,
                lock_contract: chain.lock_contract,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ChainsResponse { chains })
}

/// Query whether a receipt digest has already been processed.
pub fn query_is_processed(deps: Deps, digest: Binary) -> StdResult<IsProcessedResponse> {
    let processed = replay::is_processed(deps.storage, digest.as_slice())?;
    Ok(IsProcessedResponse { processed })
}
