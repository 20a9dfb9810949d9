//! Execute handlers for the wraptoken contract, organized by category:
//! - `issue` - proof-gated Issue and Cancel transitions
//! - `token` - Transfer, Retire, Open, Close ledger operations
//! - `admin` - chain registry, enable/disable, clear, receipt emission

mod admin;
mod issue;
mod token;

pub use admin::*;
pub use issue::*;
pub use token::*;

use cosmwasm_std::Event;

use crate::error::ContractError;
use crate::proof::Xfer;
use crate::state::Config;

/// Fail fast when the contract is disabled.
pub(crate) fn ensure_enabled(config: &Config) -> Result<(), ContractError> {
    if !config.enabled {
        return Err(ContractError::Disabled);
    }
    Ok(())
}

/// Build the provable transfer-receipt event. This event in the
/// transaction log is what the paired chain's release logic later proves.
pub(crate) fn xfer_receipt_event(xfer: &Xfer) -> Event {
    Event::new("xfer_receipt")
        .add_attribute("owner", &xfer.owner)
        .add_attribute("amount", xfer.quantity.quantity.amount.to_string())
        .add_attribute("symbol", &xfer.quantity.quantity.symbol)
        .add_attribute("decimals", xfer.quantity.quantity.decimals.to_string())
        .add_attribute("token_contract", &xfer.quantity.contract)
        .add_attribute("beneficiary", &xfer.beneficiary)
}
