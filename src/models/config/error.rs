//! Errors raised while reading `network.json` and `contract.json`.
//!
//! Every constructor logs the failure before returning it, so a broken
//! configuration is visible in the log even when startup aborts with the
//! bootstrap's contextual message.

use log::error;
use std::{error::Error, fmt};

/// Reasons a configuration file could not be turned into a usable value
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// The file parsed but violates a rule, e.g. a missing ABI entry
	ValidationError(String),

	/// The file is not valid JSON for the expected shape
	ParseError(String),

	/// The file is missing, unreadable or has the wrong extension
	FileError(String),
}

impl ConfigError {
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Invalid configuration: {}", msg),
			Self::ParseError(msg) => format!("Malformed configuration: {}", msg),
			Self::FileError(msg) => format!("Configuration file unavailable: {}", msg),
		}
	}

	/// Rule violation found after parsing; logged at error level
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// JSON that does not deserialize; logged at error level
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Missing or unreadable file; logged at error level
	pub fn file_error(msg: impl Into<String>) -> Self {
		let error = Self::FileError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.format_message())
	}
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(err.to_string())
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error(err.to_string())
	}
}
