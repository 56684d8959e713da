//! Session controller error types.
//!
//! The formatted message of every variant is the text alerted to the user.

use log::error;

use crate::services::{
	blockchain::BlockChainError, contract::ContractError, history::HistoryError,
};

/// Represents failures of a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
	/// No wallet provider could be reached
	ProviderUnavailable(String),

	/// The provider refused to expose an account
	WalletRejected(String),

	/// The action requires a connected account
	NotConnected,

	/// User input was rejected before anything was submitted
	InvalidInput(String),

	/// The contract reported the name as already registered
	NameTaken,

	/// A write was rejected, reverted or not confirmed
	TransactionFailed(String),

	/// The durable session could not be read or written
	StorageError(String),

	/// The activity feed could not be loaded
	HistoryError(String),
}

impl SessionError {
	fn format_message(&self) -> String {
		match self {
			Self::ProviderUnavailable(msg) => format!("Wallet provider unavailable: {}", msg),
			Self::WalletRejected(msg) => format!("Wallet connection rejected: {}", msg),
			Self::NotConnected => "Please connect your wallet first.".to_string(),
			Self::InvalidInput(msg) => msg.clone(),
			Self::NameTaken => {
				"This name is already registered by another wallet. Try a different one."
					.to_string()
			}
			Self::TransactionFailed(msg) => format!("Transaction failed: {}", msg),
			Self::StorageError(msg) => format!("Session storage error: {}", msg),
			Self::HistoryError(msg) => format!("Error loading history: {}", msg),
		}
	}

	/// Creates a new provider unavailable error with logging
	pub fn provider_unavailable(msg: impl Into<String>) -> Self {
		let error = Self::ProviderUnavailable(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new wallet rejected error with logging
	pub fn wallet_rejected(msg: impl Into<String>) -> Self {
		let error = Self::WalletRejected(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new invalid input error
	///
	/// Not logged; the message is shown to the user directly.
	pub fn invalid_input(msg: impl Into<String>) -> Self {
		Self::InvalidInput(msg.into())
	}

	/// Creates a new transaction failed error with logging
	pub fn transaction_failed(msg: impl Into<String>) -> Self {
		let error = Self::TransactionFailed(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new storage error with logging
	pub fn storage_error(msg: impl Into<String>) -> Self {
		let error = Self::StorageError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new history error with logging
	pub fn history_error(msg: impl Into<String>) -> Self {
		let error = Self::HistoryError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for SessionError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for SessionError {}

impl From<HistoryError> for SessionError {
	fn from(err: HistoryError) -> Self {
		Self::history_error(err.to_string())
	}
}

impl From<BlockChainError> for SessionError {
	fn from(err: BlockChainError) -> Self {
		Self::provider_unavailable(err.to_string())
	}
}

impl From<ContractError> for SessionError {
	/// Maps a failed write to the message shown to the user
	fn from(err: ContractError) -> Self {
		if err.reason().contains(crate::utils::constants::NAME_TAKEN_REASON) {
			Self::NameTaken
		} else {
			Self::transaction_failed(err.reason())
		}
	}
}
