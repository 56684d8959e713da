//! Contract description (`contract.json`) loading and validation.

use std::path::Path;

use alloy::primitives::Address;

use crate::{
	models::{ConfigLoader, ContractSpec, NAME_REGISTERED_EVENT, SENT_BY_NAME_EVENT},
	utils::constants::REQUIRED_FUNCTIONS,
};

use super::error::ConfigError;

impl ConfigLoader for ContractSpec {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let config: ContractSpec = serde_json::from_reader(file)?;

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		if self.address == Address::ZERO {
			return Err("Contract address must not be the zero address".to_string());
		}

		let missing_functions: Vec<&str> = REQUIRED_FUNCTIONS
			.iter()
			.copied()
			.filter(|name| self.abi.function(name).is_none())
			.collect();
		if !missing_functions.is_empty() {
			return Err(format!(
				"Contract ABI is missing functions: {}",
				missing_functions.join(", ")
			));
		}

		let missing_events: Vec<&str> = [NAME_REGISTERED_EVENT, SENT_BY_NAME_EVENT]
			.into_iter()
			.filter(|name| self.abi.event(name).is_none())
			.collect();
		if !missing_events.is_empty() {
			return Err(format!(
				"Contract ABI is missing events: {}",
				missing_events.join(", ")
			));
		}

		Ok(())
	}
}
