use alloy::{json_abi::JsonAbi, primitives::Address};
use serde::{Deserialize, Serialize};

/// Deployed naming contract as described by `contract.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractSpec {
	/// Address the contract is deployed at
	pub address: Address,
	/// Contract ABI used to encode calls and decode events
	pub abi: JsonAbi,
}

impl ContractSpec {
	pub fn new(address: Address, abi: JsonAbi) -> Self {
		Self { address, abi }
	}
}
