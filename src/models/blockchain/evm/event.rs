//! Naming contract events decoded from raw logs.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Event name of a name registration as declared in the contract ABI
pub const NAME_REGISTERED_EVENT: &str = "NameRegistered";

/// Event name of a transfer by name as declared in the contract ABI
pub const SENT_BY_NAME_EVENT: &str = "SentByName";

/// A log entry decoded against the naming contract's event schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodedEvent {
	/// `NameRegistered(owner, name)`
	NameRegistered { owner: Address, name: String },

	/// `SentByName(from, toName, toAddress, amount)`
	FundsSentByName {
		from: Address,
		to_name: String,
		to_address: Address,
		amount: U256,
	},
}

impl DecodedEvent {
	/// Recipient address, if the event moves funds
	pub fn recipient(&self) -> Option<Address> {
		match self {
			Self::NameRegistered { .. } => None,
			Self::FundsSentByName { to_address, .. } => Some(*to_address),
		}
	}
}
