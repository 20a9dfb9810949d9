//! Wraptoken - Wrapped Token Contract for Proof-Gated Cross-Chain Transfers
//!
//! An asset locked on a paired source chain is represented here by a
//! minted wrapped token; burning the wrapped token authorizes release of
//! the original asset.
//!
//! # Issue Flow
//! 1. User locks tokens with the lock contract on the paired chain
//! 2. Anyone submits a proof of the lock receipt to `Issue`
//! 3. The verification bridge attests inclusion; this contract validates
//!    the emitter and decodes the transfer record
//! 4. The replay guard records the receipt digest, then the beneficiary
//!    is credited and supply increased
//!
//! # Retire Flow
//! 1. Owner burns wrapped tokens via `Retire`
//! 2. A provable transfer receipt is emitted in the transaction log
//! 3. The paired chain's release logic proves that receipt to unlock
//!
//! # Security
//! - Replay protection via an append-only receipt-digest set
//! - Proofs accepted only from registered chains' lock contracts
//! - 15-minute cooldown before an unmatched lock can be cancelled
//! - Provable receipts can only be emitted by the contract itself
//! - Admin enable/disable switch gating all user-facing operations

pub mod contract;
pub mod digest;
pub mod error;
mod execute;
pub mod gateway;
pub mod ledger;
pub mod msg;
pub mod proof;
mod query;
pub mod replay;
pub mod state;

pub use crate::error::ContractError;
pub use crate::proof::{ActionProof, BlockProof, ExtendedAsset, WrappedAsset, Xfer};
