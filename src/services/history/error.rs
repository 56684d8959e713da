//! History reconciliation error types.

use log::error;

use crate::services::blockchain::BlockChainError;

/// Represents errors raised while building or expanding the activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
	/// A log could not be interpreted (missing transaction hash, unknown shape)
	DecodeError(String),

	/// Transaction or receipt lookup for a single item failed
	DetailFetchError(String),
}

impl HistoryError {
	fn format_message(&self) -> String {
		match self {
			Self::DecodeError(msg) => format!("Decode error: {}", msg),
			Self::DetailFetchError(msg) => format!("Detail fetch error: {}", msg),
		}
	}

	/// Creates a new decode error with logging
	pub fn decode_error(msg: impl Into<String>) -> Self {
		let error = Self::DecodeError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new detail fetch error with logging
	pub fn detail_fetch_error(msg: impl Into<String>) -> Self {
		let error = Self::DetailFetchError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for HistoryError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for HistoryError {}

impl From<BlockChainError> for HistoryError {
	fn from(err: BlockChainError) -> Self {
		Self::detail_fetch_error(err.to_string())
	}
}
