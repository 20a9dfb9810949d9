//! Integration tests for the proof-gated transfer protocol.
//!
//! Drives the contract through cw-multi-test with a mock verification
//! bridge substituted for the oracle. Covers the issue scenario, replay
//! rejection, oracle-rejection atomicity, and the cancel cooldown.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw_multi_test::{App, ContractWrapper, Executor};

use wraptoken::digest::receipt_digest;
use wraptoken::gateway::{BridgeQueryMsg, VerifyResponse};
use wraptoken::msg::{
    BalanceResponse, ExecuteMsg, InstantiateMsg, IsProcessedResponse, QueryMsg, TokenInfoResponse,
};
use wraptoken::proof::{
    ActionProof, ActionReceipt, ExtendedAsset, ProvenAction, WrappedAsset, Xfer,
    XFER_RECEIPT_ACTION,
};

const PAIRED_CHAIN: [u8; 32] = [0xaa; 32];
const LOCK_CONTRACT: &str = "wraplock";
const TOKEN_CONTRACT: &str = "sourcetoken";

// ============================================================================
// Mock Verification Bridge
// ============================================================================

// The mock attests any proof except receipts whose act digest starts with
// 0xdead, which it rejects as not included.
fn oracle_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::default())
}

fn oracle_execute(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::default())
}

fn oracle_query(_deps: Deps, _env: Env, msg: BridgeQueryMsg) -> StdResult<Binary> {
    let action_proof = match msg {
        BridgeQueryMsg::VerifyHeavyProof { action_proof, .. } => action_proof,
        BridgeQueryMsg::VerifyLightProof { action_proof } => action_proof,
    };
    let valid = !action_proof
        .receipt
        .act_digest
        .as_slice()
        .starts_with(&[0xde, 0xad]);
    to_json_binary(&VerifyResponse { valid })
}

fn contract_oracle() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        oracle_execute,
        oracle_instantiate,
        oracle_query,
    ))
}

fn contract_wraptoken() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        wraptoken::contract::execute,
        wraptoken::contract::instantiate,
        wraptoken::contract::query,
    ))
}

// ============================================================================
// Test Setup
// ============================================================================

fn setup() -> (App, Addr) {
    let mut app = App::default();
    let admin = Addr::unchecked("admin");

    let oracle_code = app.store_code(contract_oracle());
    let oracle_addr = app
        .instantiate_contract(oracle_code, admin.clone(), &Empty {}, &[], "oracle", None)
        .unwrap();

    let code_id = app.store_code(contract_wraptoken());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                admin: Some(admin.to_string()),
                chain_id: Binary::from(vec![0x01; 32]),
                bridge: oracle_addr.to_string(),
                paired_chain_id: Binary::from(PAIRED_CHAIN.to_vec()),
                paired_lock_contract: LOCK_CONTRACT.to_string(),
                paired_token_contract: TOKEN_CONTRACT.to_string(),
            },
            &[],
            "wraptoken",
            Some(admin.to_string()),
        )
        .unwrap();

    (app, contract_addr)
}

fn lock_xfer(owner: &str, amount: u128, symbol: &str, decimals: u8, beneficiary: &str) -> Xfer {
    Xfer {
        owner: owner.to_string(),
        quantity: ExtendedAsset {
            quantity: WrappedAsset {
                amount: Uint128::new(amount),
                symbol: symbol.to_string(),
                decimals,
            },
            contract: TOKEN_CONTRACT.to_string(),
        },
        beneficiary: beneficiary.to_string(),
    }
}

fn lock_proof(seq: u64, xfer: &Xfer, block_timestamp: u64) -> ActionProof {
    let mut act_digest = vec![0x01; 32];
    act_digest[..8].copy_from_slice(&seq.to_be_bytes());
    ActionProof {
        chain_id: Binary::from(PAIRED_CHAIN.to_vec()),
        action: ProvenAction {
            contract: LOCK_CONTRACT.to_string(),
            name: XFER_RECEIPT_ACTION.to_string(),
            payload: to_json_binary(xfer).unwrap(),
        },
        receipt: ActionReceipt {
            act_digest: Binary::from(act_digest),
            global_sequence: seq,
        },
        block_timestamp,
    }
}

fn balance(app: &App, contract: &Addr, owner: &str, symbol: &str) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            contract,
            &QueryMsg::Balance {
                owner: owner.to_string(),
                symbol: symbol.to_string(),
            },
        )
        .unwrap();
    res.amount
}

fn supply(app: &App, contract: &Addr, symbol: &str) -> Uint128 {
    let res: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(
            contract,
            &QueryMsg::TokenInfo {
                symbol: symbol.to_string(),
            },
        )
        .unwrap();
    res.supply
}

// ============================================================================
// Issue Scenario
// ============================================================================

#[test]
fn test_issue_mints_to_beneficiary() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");

    // alice locked 100.0000 SYM on the paired chain, beneficiary bob
    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let proof = lock_proof(1, &xfer, app.block_info().time.seconds());

    app.execute_contract(
        prover,
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof,
            block_proof: None,
        },
        &[],
    )
    .unwrap();

    assert_eq!(supply(&app, &contract, "SYM"), Uint128::new(1_000_000));
    assert_eq!(balance(&app, &contract, "bob", "SYM"), Uint128::new(1_000_000));

    let info: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::TokenInfo {
                symbol: "SYM".to_string(),
            },
        )
        .unwrap();
    assert_eq!(info.max_supply, Uint128::new((1u128 << 62) - 1));
    assert_eq!(info.decimals, 4);
}

#[test]
fn test_issue_exceeding_supply_ceiling_rejected() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");
    let now = app.block_info().time.seconds();
    let ceiling = (1u128 << 62) - 1;

    // A single lock claiming the full ceiling mints fine
    let xfer = lock_xfer("alice", ceiling, "SYM", 4, "bob");
    app.execute_contract(
        prover.clone(),
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: lock_proof(1, &xfer, now),
            block_proof: None,
        },
        &[],
    )
    .unwrap();
    assert_eq!(supply(&app, &contract, "SYM"), Uint128::new(ceiling));

    // One more unit crosses the ceiling
    let xfer = lock_xfer("alice", 1, "SYM", 4, "bob");
    let res = app.execute_contract(
        prover,
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: lock_proof(2, &xfer, now),
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("exceeds available supply"),
        "Expected ceiling error, got: {}",
        err_str
    );

    assert_eq!(supply(&app, &contract, "SYM"), Uint128::new(ceiling));
    assert_eq!(balance(&app, &contract, "bob", "SYM"), Uint128::new(ceiling));
}

#[test]
fn test_issue_replay_rejected_state_unchanged() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let proof = lock_proof(1, &xfer, app.block_info().time.seconds());

    app.execute_contract(
        prover.clone(),
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof.clone(),
            block_proof: None,
        },
        &[],
    )
    .unwrap();

    let supply_before = supply(&app, &contract, "SYM");
    let balance_before = balance(&app, &contract, "bob", "SYM");

    // Same proof again, even from a different prover
    let res = app.execute_contract(
        Addr::unchecked("otherprover"),
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof,
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("already proved"),
        "Expected replay error, got: {}",
        err_str
    );

    assert_eq!(supply(&app, &contract, "SYM"), supply_before);
    assert_eq!(balance(&app, &contract, "bob", "SYM"), balance_before);
}

#[test]
fn test_issue_accumulates_across_distinct_proofs() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");
    let now = app.block_info().time.seconds();

    for seq in 1..=3u64 {
        let xfer = lock_xfer("alice", 500_000, "SYM", 4, "bob");
        let proof = lock_proof(seq, &xfer, now);
        app.execute_contract(
            prover.clone(),
            contract.clone(),
            &ExecuteMsg::Issue {
                action_proof: proof,
                block_proof: None,
            },
            &[],
        )
        .unwrap();
    }

    assert_eq!(supply(&app, &contract, "SYM"), Uint128::new(1_500_000));
    assert_eq!(
        balance(&app, &contract, "bob", "SYM"),
        Uint128::new(1_500_000)
    );
}

#[test]
fn test_issue_with_heavy_proof() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let proof = lock_proof(1, &xfer, app.block_info().time.seconds());
    let block_proof = wraptoken::proof::BlockProof {
        chain_id: Binary::from(PAIRED_CHAIN.to_vec()),
        header_digest: Binary::from(vec![0x07; 32]),
    };

    app.execute_contract(
        prover,
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof,
            block_proof: Some(block_proof),
        },
        &[],
    )
    .unwrap();

    assert_eq!(supply(&app, &contract, "SYM"), Uint128::new(1_000_000));
}

#[test]
fn test_issue_precision_mismatch_rejected() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");
    let now = app.block_info().time.seconds();

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    app.execute_contract(
        prover.clone(),
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: lock_proof(1, &xfer, now),
            block_proof: None,
        },
        &[],
    )
    .unwrap();

    // Second lock claims 6 decimals for the same symbol
    let xfer = lock_xfer("alice", 1_000_000, "SYM", 6, "bob");
    let res = app.execute_contract(
        prover,
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: lock_proof(2, &xfer, now),
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("precision mismatch"),
        "Expected precision mismatch, got: {}",
        err_str
    );
}

// ============================================================================
// Oracle Rejection Atomicity
// ============================================================================

#[test]
fn test_oracle_rejection_leaves_no_partial_state() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let mut proof = lock_proof(1, &xfer, app.block_info().time.seconds());
    // The mock bridge rejects receipts whose digest starts with 0xdead
    let mut poisoned = vec![0xde, 0xad];
    poisoned.extend_from_slice(&[0x00; 30]);
    proof.receipt.act_digest = Binary::from(poisoned);

    let guard_digest = receipt_digest(&proof.receipt).unwrap();

    let res = app.execute_contract(
        prover,
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof,
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Proof rejected"),
        "Expected proof rejection, got: {}",
        err_str
    );

    // No replay-guard entry and no ledger mutation
    let processed: IsProcessedResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::IsProcessed {
                digest: Binary::from(guard_digest.to_vec()),
            },
        )
        .unwrap();
    assert!(!processed.processed);
    assert_eq!(balance(&app, &contract, "bob", "SYM"), Uint128::zero());
}

#[test]
fn test_wrong_action_name_rejected() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let mut proof = lock_proof(1, &xfer, app.block_info().time.seconds());
    proof.action.name = "transfer".to_string();

    let res = app.execute_contract(
        prover,
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof,
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("action name mismatch"),
        "Expected action mismatch, got: {}",
        err_str
    );
}

#[test]
fn test_wrong_source_contract_rejected() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let mut proof = lock_proof(1, &xfer, app.block_info().time.seconds());
    proof.action.contract = "impostor".to_string();

    let res = app.execute_contract(
        prover,
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof,
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("expected paired lock contract"),
        "Expected source contract error, got: {}",
        err_str
    );
}

#[test]
fn test_unregistered_chain_rejected() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let mut proof = lock_proof(1, &xfer, app.block_info().time.seconds());
    proof.chain_id = Binary::from(vec![0xbb; 32]);

    let res = app.execute_contract(
        prover,
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof,
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("not registered"),
        "Expected unregistered chain error, got: {}",
        err_str
    );
}

// ============================================================================
// Cancel Cooldown
// ============================================================================

#[test]
fn test_cancel_cooldown_boundary() {
    let (mut app, contract) = setup();
    let alice = Addr::unchecked("alice");
    let now = app.block_info().time.seconds();

    // Lock claimed 899 seconds ago: one second short of the cooldown
    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let proof = lock_proof(1, &xfer, now - 899);

    let res = app.execute_contract(
        alice.clone(),
        contract.clone(),
        &ExecuteMsg::Cancel {
            action_proof: proof.clone(),
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("cooldown active"),
        "Expected cooldown error, got: {}",
        err_str
    );

    // Two seconds later the cooldown has strictly elapsed
    app.update_block(|b| b.time = b.time.plus_seconds(2));

    let res = app
        .execute_contract(
            alice,
            contract.clone(),
            &ExecuteMsg::Cancel {
                action_proof: proof,
                block_proof: None,
            },
            &[],
        )
        .unwrap();

    // Reversal receipt addressed back to the lock owner
    let receipt = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-xfer_receipt")
        .expect("reversal receipt event missing");
    let beneficiary = receipt
        .attributes
        .iter()
        .find(|a| a.key == "beneficiary")
        .unwrap();
    assert_eq!(beneficiary.value, "alice");

    // Cancel emits no ledger mutation
    assert_eq!(balance(&app, &contract, "bob", "SYM"), Uint128::zero());
}

#[test]
fn test_cancel_requires_lock_owner() {
    let (mut app, contract) = setup();
    let now = app.block_info().time.seconds();

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let proof = lock_proof(1, &xfer, now - 1000);

    let res = app.execute_contract(
        Addr::unchecked("mallory"),
        contract.clone(),
        &ExecuteMsg::Cancel {
            action_proof: proof,
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("not the owner"),
        "Expected lock owner error, got: {}",
        err_str
    );
}

#[test]
fn test_cancelled_proof_cannot_be_issued() {
    let (mut app, contract) = setup();
    let alice = Addr::unchecked("alice");
    let now = app.block_info().time.seconds();

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let proof = lock_proof(1, &xfer, now - 1000);

    app.execute_contract(
        alice,
        contract.clone(),
        &ExecuteMsg::Cancel {
            action_proof: proof.clone(),
            block_proof: None,
        },
        &[],
    )
    .unwrap();

    let res = app.execute_contract(
        Addr::unchecked("prover"),
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof,
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("already proved"),
        "Expected replay error, got: {}",
        err_str
    );
}

// ============================================================================
// Retire
// ============================================================================

#[test]
fn test_full_scenario_issue_replay_retire() {
    let (mut app, contract) = setup();
    let prover = Addr::unchecked("prover");
    let bob = Addr::unchecked("bob");

    let xfer = lock_xfer("alice", 1_000_000, "SYM", 4, "bob");
    let proof = lock_proof(1, &xfer, app.block_info().time.seconds());

    app.execute_contract(
        prover.clone(),
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof.clone(),
            block_proof: None,
        },
        &[],
    )
    .unwrap();

    assert_eq!(supply(&app, &contract, "SYM"), Uint128::new(1_000_000));
    assert_eq!(balance(&app, &contract, "bob", "SYM"), Uint128::new(1_000_000));

    // Replay leaves state unchanged
    let res = app.execute_contract(
        prover,
        contract.clone(),
        &ExecuteMsg::Issue {
            action_proof: proof,
            block_proof: None,
        },
        &[],
    );
    assert!(res.is_err());
    assert_eq!(supply(&app, &contract, "SYM"), Uint128::new(1_000_000));

    // bob retires 40.0000 to a paired-chain beneficiary
    let res = app
        .execute_contract(
            bob,
            contract.clone(),
            &ExecuteMsg::Retire {
                quantity: WrappedAsset {
                    amount: Uint128::new(400_000),
                    symbol: "SYM".to_string(),
                    decimals: 4,
                },
                beneficiary: "carol".to_string(),
            },
            &[],
        )
        .unwrap();

    assert_eq!(supply(&app, &contract, "SYM"), Uint128::new(600_000));
    assert_eq!(balance(&app, &contract, "bob", "SYM"), Uint128::new(600_000));

    let receipt = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-xfer_receipt")
        .expect("retire receipt event missing");
    let beneficiary = receipt
        .attributes
        .iter()
        .find(|a| a.key == "beneficiary")
        .unwrap();
    assert_eq!(beneficiary.value, "carol");
    let token_contract = receipt
        .attributes
        .iter()
        .find(|a| a.key == "token_contract")
        .unwrap();
    assert_eq!(token_contract.value, TOKEN_CONTRACT);
}

// ============================================================================
// Self-Authorized Receipt Emission
// ============================================================================

#[test]
fn test_emit_transfer_receipt_from_contract_itself() {
    let (mut app, contract) = setup();

    // A self-addressed execute carries the contract as sender
    let res = app
        .execute_contract(
            contract.clone(),
            contract.clone(),
            &ExecuteMsg::EmitTransferReceipt {
                xfer: lock_xfer("alice", 1_000_000, "SYM", 4, "bob"),
            },
            &[],
        )
        .unwrap();

    let receipt = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-xfer_receipt")
        .expect("receipt event missing");
    let owner = receipt
        .attributes
        .iter()
        .find(|a| a.key == "owner")
        .unwrap();
    assert_eq!(owner.value, "alice");
}

#[test]
fn test_emit_transfer_receipt_rejects_external_caller() {
    let (mut app, contract) = setup();

    let res = app.execute_contract(
        Addr::unchecked("mallory"),
        contract.clone(),
        &ExecuteMsg::EmitTransferReceipt {
            xfer: lock_xfer("mallory", 1_000_000, "SYM", 4, "mallory"),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("only the contract itself"),
        "Expected self-auth error, got: {}",
        err_str
    );
}
