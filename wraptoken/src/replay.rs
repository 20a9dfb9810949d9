//! Replay guard: the append-only set of receipt digests already processed.
//!
//! Records are keyed by a monotonically increasing id with a unique
//! secondary index on the digest, so the membership check is a point
//! lookup rather than a scan. An entry, once inserted, is permanent;
//! only the admin `Clear` reset removes entries.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Order, StdResult, Storage};
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, UniqueIndex};

use crate::digest::bytes32_to_hex;
use crate::error::ContractError;

/// A processed proof: internal id plus the receipt digest that keyed it.
#[cw_serde]
pub struct ProcessedProof {
    pub id: u64,
    pub receipt_digest: Binary,
}

pub struct ProcessedIndexes<'a> {
    pub digest: UniqueIndex<'a, Vec<u8>, ProcessedProof, u64>,
}

impl<'a> IndexList<ProcessedProof> for ProcessedIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<ProcessedProof>> + '_> {
        let v: Vec<&dyn Index<ProcessedProof>> = vec![&self.digest];
        Box::new(v.into_iter())
    }
}

/// Processed-proof table with a unique digest index.
pub fn processed<'a>() -> IndexedMap<'a, u64, ProcessedProof, ProcessedIndexes<'a>> {
    let indexes = ProcessedIndexes {
        digest: UniqueIndex::new(|p| p.receipt_digest.to_vec(), "processed__digest"),
    };
    IndexedMap::new("processed", indexes)
}

/// Next internal id for the processed-proof table
pub const NEXT_PROOF_ID: Item<u64> = Item::new("next_proof_id");

/// Record a digest if it has not been seen before.
///
/// Returns the assigned id on first sight; fails with `AlreadyProcessed`
/// otherwise, aborting the enclosing operation before any ledger write.
pub fn record_if_new(storage: &mut dyn Storage, digest: &[u8; 32]) -> Result<u64, ContractError> {
    let table = processed();

    if table
        .idx
        .digest
        .item(storage, digest.to_vec())?
        .is_some()
    {
        return Err(ContractError::AlreadyProcessed {
            digest: bytes32_to_hex(digest),
        });
    }

    let id = NEXT_PROOF_ID.may_load(storage)?.unwrap_or(0);
    table.save(
        storage,
        id,
        &ProcessedProof {
            id,
            receipt_digest: Binary::from(digest.to_vec()),
        },
    )?;
    NEXT_PROOF_ID.save(storage, &(id + 1))?;

    Ok(id)
}

/// Whether a digest has already been processed.
pub fn is_processed(storage: &dyn Storage, digest: &[u8]) -> StdResult<bool> {
    Ok(processed()
        .idx
        .digest
        .item(storage, digest.to_vec())?
        .is_some())
}

/// Remove every processed-proof record and reset the id counter.
pub fn clear(storage: &mut dyn Storage) -> StdResult<()> {
    let table = processed();
    let ids: Vec<u64> = table
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    for id in ids {
        table.remove(storage, id)?;
    }
    NEXT_PROOF_ID.save(storage, &0)?;
    Ok(())
}
