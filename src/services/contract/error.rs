//! Naming contract error types.

use log::error;

use crate::services::blockchain::BlockChainError;

/// Represents errors raised while talking to the naming contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
	/// The ABI lacks a function, or values could not be encoded or decoded
	AbiError(String),

	/// A read-only call failed
	CallError(String),

	/// A state-changing transaction was rejected, reverted or not confirmed
	TransactionError(String),
}

impl ContractError {
	fn format_message(&self) -> String {
		match self {
			Self::AbiError(msg) => format!("ABI error: {}", msg),
			Self::CallError(msg) => format!("Call error: {}", msg),
			Self::TransactionError(msg) => format!("Transaction error: {}", msg),
		}
	}

	/// Creates a new ABI error with logging
	pub fn abi_error(msg: impl Into<String>) -> Self {
		let error = Self::AbiError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new call error with logging
	pub fn call_error(msg: impl Into<String>) -> Self {
		let error = Self::CallError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new transaction error with logging
	pub fn transaction_error(msg: impl Into<String>) -> Self {
		let error = Self::TransactionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Message of the underlying failure without the variant prefix
	pub fn reason(&self) -> &str {
		match self {
			Self::AbiError(msg) | Self::CallError(msg) | Self::TransactionError(msg) => msg,
		}
	}
}

impl std::fmt::Display for ContractError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for ContractError {}

impl From<alloy::dyn_abi::Error> for ContractError {
	fn from(err: alloy::dyn_abi::Error) -> Self {
		Self::abi_error(err.to_string())
	}
}

/// Wraps a gateway failure of a write
pub(crate) fn transaction_failure(err: BlockChainError) -> ContractError {
	ContractError::transaction_error(err.to_string())
}

/// Wraps a gateway failure of a read
pub(crate) fn call_failure(err: BlockChainError) -> ContractError {
	ContractError::call_error(err.to_string())
}
