//! Helper functions for EVM-specific formatting.
//!
//! This module provides utility functions for address and hash conversions,
//! case-insensitive address comparison and native currency formatting.

use alloy::primitives::{
	utils::{format_units, parse_ether as parse_units_ether},
	Address, B256, U256,
};

use crate::utils::constants::NATIVE_DECIMALS;

/// Converts a B256 hash to its hexadecimal string representation.
///
/// # Arguments
/// * `hash` - The B256 hash to convert
///
/// # Returns
/// A string in the format "0x..." representing the hash
pub fn b256_to_string(hash: B256) -> String {
	format!("0x{}", hex::encode(hash.as_slice()))
}

/// Converts an address to its lowercase hexadecimal string representation.
///
/// # Arguments
/// * `address` - The address to convert
///
/// # Returns
/// A string in the format "0x..." representing the address
pub fn h160_to_string(address: Address) -> String {
	format!("0x{}", hex::encode(address.as_slice()))
}

/// Compares two addresses for equality, ignoring case and "0x" prefixes.
///
/// # Arguments
/// * `address1` - First address to compare
/// * `address2` - Second address to compare
///
/// # Returns
/// `true` if the addresses are equivalent, `false` otherwise
pub fn are_same_address(address1: &str, address2: &str) -> bool {
	normalize_address(address1) == normalize_address(address2)
}

/// Normalizes an address string by removing "0x" prefix, spaces, and converting to lowercase.
///
/// # Arguments
/// * `address` - The address string to normalize
///
/// # Returns
/// The normalized address string
pub fn normalize_address(address: &str) -> String {
	let trimmed = address.trim();
	trimmed
		.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
		.unwrap_or(trimmed)
		.replace(' ', "")
		.to_lowercase()
}

/// Formats an amount in wei as ether.
///
/// Uses the fixed 18 decimal conversion; trailing zeros of the fraction
/// are trimmed while at least one fractional digit is kept, so one ether
/// renders as `1.0`.
pub fn format_ether(value: U256) -> String {
	let formatted = format_units(value, NATIVE_DECIMALS).unwrap_or_else(|_| value.to_string());
	trim_fraction(&formatted)
}

/// Parses a user-entered ether amount into wei.
///
/// # Errors
/// Returns an error for empty, negative or malformed amounts
pub fn parse_ether(amount: &str) -> Result<U256, String> {
	let trimmed = amount.trim();
	if trimmed.is_empty() {
		return Err("Amount is empty".to_string());
	}
	if trimmed.starts_with('-') {
		return Err(format!("Amount must not be negative: {}", trimmed));
	}
	parse_units_ether(trimmed).map_err(|e| format!("Invalid amount '{}': {}", trimmed, e))
}

fn trim_fraction(formatted: &str) -> String {
	match formatted.split_once('.') {
		Some((integer, fraction)) => {
			let fraction = fraction.trim_end_matches('0');
			if fraction.is_empty() {
				format!("{}.0", integer)
			} else {
				format!("{}.{}", integer, fraction)
			}
		}
		None => format!("{}.0", formatted),
	}
}
