//! Synchronous client for the proof-verification bridge.
//!
//! The bridge contract attests cryptographic inclusion only; business
//! rules stay in this contract. The call is a nested synchronous query
//! within the same atomic unit of work - if the bridge rejects the proof
//! or the query fails, the whole operation aborts and no replay-guard or
//! ledger write survives.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper};

use crate::error::ContractError;
use crate::proof::{ActionProof, BlockProof};

/// Query interface of the verification bridge contract.
#[cw_serde]
pub enum BridgeQueryMsg {
    /// Full validation of the action proof against a header chain
    VerifyHeavyProof {
        block_proof: BlockProof,
        action_proof: ActionProof,
    },
    /// Validation against a previously finalized checkpoint header
    VerifyLightProof { action_proof: ActionProof },
}

/// Verdict returned by the bridge.
#[cw_serde]
pub struct VerifyResponse {
    pub valid: bool,
}

/// Ask the bridge to verify a proof bundle. Heavy verification when a
/// block proof is supplied, light verification otherwise.
pub fn verify_proof(
    querier: &QuerierWrapper,
    bridge: &Addr,
    action_proof: &ActionProof,
    block_proof: Option<&BlockProof>,
) -> Result<(), ContractError> {
    let msg = match block_proof {
        Some(block_proof) => BridgeQueryMsg::VerifyHeavyProof {
            block_proof: block_proof.clone(),
            action_proof: action_proof.clone(),
        },
        None => BridgeQueryMsg::VerifyLightProof {
            action_proof: action_proof.clone(),
        },
    };

    let response: VerifyResponse = querier
        .query_wasm_smart(bridge, &msg)
        .map_err(|e| ContractError::ProofRejected {
            reason: e.to_string(),
        })?;

    if !response.valid {
        return Err(ContractError::ProofRejected {
            reason: "bridge reported proof invalid".to_string(),
        });
    }

    Ok(())
}
