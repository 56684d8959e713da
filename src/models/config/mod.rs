//! Configuration loading and validation.
//!
//! The wallet is configured by two JSON files: the network description
//! (`config/network.json`) and the naming contract description
//! (`contract.json`). Both are validated right after parsing.

use std::path::Path;

mod contract_config;
mod error;
mod network_config;

pub use error::ConfigError;

/// Default location of the network configuration
pub const DEFAULT_NETWORK_CONFIG_PATH: &str = "config/network.json";

/// Default location of the contract description
pub const DEFAULT_CONTRACT_CONFIG_PATH: &str = "contract.json";

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Load and validate a configuration from a JSON file
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	/// Validate the loaded configuration
	fn validate(&self) -> Result<(), String>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
