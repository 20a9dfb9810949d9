//! Wraptoken contract entry points.
//!
//! Instantiation is the once-only `init`: it fixes the pairing
//! configuration and registers the paired chain in the registry. The
//! implementation is modularized into:
//! - `execute/` - execute message handlers
//! - `query` - query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_chain, execute_cancel, execute_clear, execute_close, execute_disable,
    execute_emit_transfer_receipt, execute_enable, execute_issue, execute_open,
    execute_remove_chain, execute_retire, execute_transfer,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_balance, query_chain, query_chains, query_config, query_is_processed, query_token_info,
};
use crate::replay::NEXT_PROOF_ID;
use crate::state::{ChainEntry, Config, CHAINS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    let bridge = deps.api.addr_validate(&msg.bridge)?;

    if msg.chain_id.len() != 32 {
        return Err(ContractError::InvalidChainId {
            got: msg.chain_id.len(),
        });
    }
    if msg.paired_chain_id.len() != 32 {
        return Err(ContractError::InvalidChainId {
            got: msg.paired_chain_id.len(),
        });
    }

    let config = Config {
        admin,
        chain_id: msg.chain_id,
        bridge,
        paired_chain_id: msg.paired_chain_id.clone(),
        paired_lock_contract: msg.paired_lock_contract.clone(),
        paired_token_contract: msg.paired_token_contract,
        enabled: true,
    };
    CONFIG.save(deps.storage, &config)?;

    // The paired chain is the first registry entry.
    CHAINS.save(
        deps.storage,
        msg.paired_chain_id.as_slice(),
        &ChainEntry {
            chain_id: msg.paired_chain_id.clone(),
            lock_contract: msg.paired_lock_contract,
        },
    )?;

    NEXT_PROOF_ID.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("bridge", config.bridge)
        .add_attribute(
            "paired_chain_id",
            format!("0x{}", hex::encode(msg.paired_chain_id.as_slice())),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Proof-gated transitions
        ExecuteMsg::Issue {
            action_proof,
            block_proof,
        } => execute_issue(deps, env, info, action_proof, block_proof),
        ExecuteMsg::Cancel {
            action_proof,
            block_proof,
        } => execute_cancel(deps, env, info, action_proof, block_proof),

        // Ledger operations
        ExecuteMsg::Retire {
            quantity,
            beneficiary,
        } => execute_retire(deps, info, quantity, beneficiary),
        ExecuteMsg::Transfer { to, quantity, memo } => {
            execute_transfer(deps, info, to, quantity, memo)
        }
        ExecuteMsg::Open { owner, symbol } => execute_open(deps, info, owner, symbol),
        ExecuteMsg::Close { symbol } => execute_close(deps, info, symbol),

        // Provable receipt emission (self-authorized)
        ExecuteMsg::EmitTransferReceipt { xfer } => {
            execute_emit_transfer_receipt(deps, env, info, xfer)
        }

        // Administration
        ExecuteMsg::AddChain {
            chain_id,
            lock_contract,
        } => execute_add_chain(deps, info, chain_id, lock_contract),
        ExecuteMsg::RemoveChain { chain_id } => execute_remove_chain(deps, info, chain_id),
        ExecuteMsg::Enable {} => execute_enable(deps, info),
        ExecuteMsg::Disable {} => execute_disable(deps, info),
        ExecuteMsg::Clear {} => execute_clear(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Balance { owner, symbol } => to_json_binary(&query_balance(deps, owner, symbol)?),
        QueryMsg::TokenInfo { symbol } => to_json_binary(&query_token_info(deps, symbol)?),
        QueryMsg::Chain { chain_id } => to_json_binary(&query_chain(deps, chain_id)?),
        QueryMsg::Chains { start_after, limit } => {
            to_json_binary(&query_chains(deps, start_after, limit)?)
        }
        QueryMsg::IsProcessed { digest } => to_json_binary(&query_is_processed(deps, digest)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
