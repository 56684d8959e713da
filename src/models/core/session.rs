use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// The single piece of process-wide state: the connected account, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionContext {
	pub address: Option<Address>,
}

impl SessionContext {
	pub fn connected(address: Address) -> Self {
		Self {
			address: Some(address),
		}
	}

	pub fn is_connected(&self) -> bool {
		self.address.is_some()
	}
}

/// Derived dashboard fields rendered for the connected account
///
/// Every field is rebuilt from scratch on refresh; a reset view is the
/// disconnected dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WalletView {
	/// Checksummed address, None while disconnected
	pub address: Option<String>,
	/// e.g. `Balance: 1.5 ETH`
	pub balance: Option<String>,
	/// e.g. `Name: alice` or `No name registered`
	pub name: Option<String>,
	/// e.g. `Network: sepolia (Chain ID: 11155111)`
	pub network: Option<String>,
	/// Registration is offered only while the account has no name
	pub can_register: bool,
}

/// Outcome of a read-only name or address lookup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum LookupResult {
	/// `resolveName` returned a non-zero address
	Resolved { name: String, address: Address },
	/// `nameOf` returned a non-empty name
	NameFound { address: Address, name: String },
	/// Zero address returned for a name
	NotRegistered,
	/// Empty name returned for an address
	NoName,
	/// Lookup could not be performed
	Failed(String),
}

impl std::fmt::Display for LookupResult {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Resolved { address, .. } => write!(f, "Address: {}", address.to_checksum(None)),
			Self::NameFound { name, .. } => write!(f, "Registered Name: {}", name),
			Self::NotRegistered => write!(f, "Not registered"),
			Self::NoName => write!(f, "No name registered"),
			Self::Failed(msg) => write!(f, "{}", msg),
		}
	}
}
