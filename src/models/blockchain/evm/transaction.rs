//! EVM transaction, receipt and outgoing call data structures.
//!
//! Only the fields the wallet surfaces are modelled; everything else in the
//! JSON-RPC responses is ignored during deserialization.

use alloy::primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// Transaction as returned by `eth_getTransactionByHash`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
	/// Transaction hash
	pub hash: B256,

	/// Sender address
	pub from: Address,

	/// Recipient address (None for contract creation)
	#[serde(default)]
	pub to: Option<Address>,

	/// Value transferred in wei
	#[serde(default)]
	pub value: U256,

	/// Block containing the transaction (None while pending)
	#[serde(default)]
	pub block_number: Option<U64>,
}

/// Receipt as returned by `eth_getTransactionReceipt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
	/// Hash of the transaction this receipt belongs to
	pub transaction_hash: B256,

	/// Block the transaction was included in
	pub block_number: U64,

	/// Gas consumed by the transaction
	pub gas_used: U64,

	/// Execution status, 1 for success and 0 for revert
	#[serde(default)]
	pub status: Option<U64>,
}

impl TransactionReceipt {
	/// Block number as a plain integer
	pub fn block_number(&self) -> u64 {
		self.block_number.to::<u64>()
	}

	/// Gas used as a plain integer
	pub fn gas_used(&self) -> u64 {
		self.gas_used.to::<u64>()
	}

	/// Whether the transaction executed successfully
	///
	/// Pre-byzantium receipts carry no status and are treated as successful.
	pub fn succeeded(&self) -> bool {
		self.status.map(|s| s != U64::ZERO).unwrap_or(true)
	}
}

/// Outgoing call or transaction, serialized as the JSON-RPC call object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
	/// Account submitting the transaction
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from: Option<Address>,

	/// Contract being called
	pub to: Address,

	/// ABI-encoded call data
	#[serde(rename = "data")]
	pub input: Bytes,

	/// Value attached to the call
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<U256>,
}

impl TransactionRequest {
	/// Creates a read-only call request
	pub fn call(to: Address, input: Bytes) -> Self {
		Self {
			from: None,
			to,
			input,
			value: None,
		}
	}

	/// Creates a state-changing transaction sent from `from`
	pub fn transaction(from: Address, to: Address, input: Bytes, value: Option<U256>) -> Self {
		Self {
			from: Some(from),
			to,
			input,
			value,
		}
	}
}
