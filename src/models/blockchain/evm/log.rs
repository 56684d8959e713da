//! EVM event log data structures.

use std::ops::Deref;

use alloy::{
	primitives::{Address, LogData, B256},
	rpc::types::Log as RpcLog,
};
use serde::{Deserialize, Serialize};

/// Wrapper around an alloy RPC log as returned by `eth_getLogs`
///
/// A log entry is immutable once fetched from the ledger and is consumed
/// once per reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntry(pub RpcLog);

impl LogEntry {
	/// Get the address of the contract that emitted the log
	pub fn address(&self) -> Address {
		self.0.inner.address
	}

	/// Get the log topics, the first being the event selector
	pub fn topics(&self) -> &[B256] {
		self.0.inner.data.topics()
	}

	/// Get the raw topics + data payload
	pub fn payload(&self) -> &LogData {
		&self.0.inner.data
	}

	/// Get the hash of the transaction that emitted the log
	pub fn transaction_hash(&self) -> Option<B256> {
		self.0.transaction_hash
	}

	/// Get the number of the block containing the log
	pub fn block_number(&self) -> Option<u64> {
		self.0.block_number
	}
}

impl From<RpcLog> for LogEntry {
	fn from(log: RpcLog) -> Self {
		Self(log)
	}
}

impl Deref for LogEntry {
	type Target = RpcLog;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
