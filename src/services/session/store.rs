//! Durable session storage.
//!
//! Persists the connected account under a single key so that a later run
//! can restore the session without prompting.

use alloy::primitives::Address;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::{
	services::session::error::SessionError,
	utils::constants::{CONNECTED_ACCOUNT_KEY, DEFAULT_SESSION_FILE},
};

/// Interface for persisting the connected account
#[async_trait]
pub trait SessionStore: Send + Sync {
	/// Retrieves the stored account, if any
	async fn load_account(&self) -> Result<Option<Address>, SessionError>;

	/// Stores the account, replacing any previous one
	async fn save_account(&self, address: Address) -> Result<(), SessionError>;

	/// Removes the stored account
	async fn clear(&self) -> Result<(), SessionError>;
}

/// File-based implementation of session storage
///
/// The file holds a JSON object; only the `connectedAccount` key is owned
/// by the wallet and other keys are preserved.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
	path: PathBuf,
}

impl FileSessionStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	async fn read_entries(&self) -> Result<Map<String, Value>, SessionError> {
		if !self.path.exists() {
			return Ok(Map::new());
		}

		let content = tokio::fs::read_to_string(&self.path)
			.await
			.map_err(|e| SessionError::storage_error(format!("Failed to read session: {}", e)))?;
		if content.trim().is_empty() {
			return Ok(Map::new());
		}

		match serde_json::from_str::<Value>(&content) {
			Ok(Value::Object(entries)) => Ok(entries),
			Ok(_) => Err(SessionError::storage_error(format!(
				"{} does not contain a JSON object",
				self.path.display()
			))),
			Err(e) => Err(SessionError::storage_error(format!(
				"Failed to parse session: {}",
				e
			))),
		}
	}

	async fn write_entries(&self, entries: Map<String, Value>) -> Result<(), SessionError> {
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				tokio::fs::create_dir_all(parent).await.map_err(|e| {
					SessionError::storage_error(format!("Failed to create session directory: {}", e))
				})?;
			}
		}

		let json = serde_json::to_string_pretty(&Value::Object(entries))
			.map_err(|e| SessionError::storage_error(format!("Failed to encode session: {}", e)))?;
		tokio::fs::write(&self.path, json)
			.await
			.map_err(|e| SessionError::storage_error(format!("Failed to write session: {}", e)))
	}
}

impl Default for FileSessionStore {
	fn default() -> Self {
		Self::new(DEFAULT_SESSION_FILE)
	}
}

#[async_trait]
impl SessionStore for FileSessionStore {
	async fn load_account(&self) -> Result<Option<Address>, SessionError> {
		let entries = self.read_entries().await?;
		match entries.get(CONNECTED_ACCOUNT_KEY) {
			None | Some(Value::Null) => Ok(None),
			Some(Value::String(account)) => account.parse().map(Some).map_err(|e| {
				SessionError::storage_error(format!("Invalid stored account '{}': {}", account, e))
			}),
			Some(other) => Err(SessionError::storage_error(format!(
				"Invalid stored account: {}",
				other
			))),
		}
	}

	async fn save_account(&self, address: Address) -> Result<(), SessionError> {
		let mut entries = self.read_entries().await.unwrap_or_default();
		entries.insert(
			CONNECTED_ACCOUNT_KEY.to_string(),
			Value::String(address.to_checksum(None)),
		);
		self.write_entries(entries).await
	}

	async fn clear(&self) -> Result<(), SessionError> {
		let mut entries = self.read_entries().await.unwrap_or_default();
		if entries.remove(CONNECTED_ACCOUNT_KEY).is_none() && !self.path.exists() {
			return Ok(());
		}
		self.write_entries(entries).await
	}
}
