use serde::{Deserialize, Serialize};

/// Default interval between receipt polls while awaiting a confirmation
pub const DEFAULT_CONFIRMATION_POLL_MS: u64 = 1_000;

/// Default upper bound on how long a confirmation is awaited
pub const DEFAULT_CONFIRMATION_TIMEOUT_MS: u64 = 120_000;

/// RPC endpoint the wallet can talk to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RpcUrl {
	/// Endpoint kind, only "rpc" is supported
	pub type_: String,
	/// HTTP(S) URL of the endpoint
	pub url: String,
	/// Selection weight, higher is tried first, 0 disables the endpoint
	pub weight: u32,
}

/// Network the wallet is connected to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Network {
	/// Short identifier, lowercase letters, digits and underscores
	pub slug: String,
	/// Human-readable name, used when the chain id is not a well-known one
	pub name: String,
	/// Endpoints, tried by descending weight at connect time
	pub rpc_urls: Vec<RpcUrl>,
	/// Expected chain id, if pinned
	#[serde(default)]
	pub chain_id: Option<u64>,
	/// Interval between receipt polls
	#[serde(default = "default_confirmation_poll_ms")]
	pub confirmation_poll_ms: u64,
	/// Maximum time to wait for a receipt
	#[serde(default = "default_confirmation_timeout_ms")]
	pub confirmation_timeout_ms: u64,
}

fn default_confirmation_poll_ms() -> u64 {
	DEFAULT_CONFIRMATION_POLL_MS
}

fn default_confirmation_timeout_ms() -> u64 {
	DEFAULT_CONFIRMATION_TIMEOUT_MS
}

/// Identity of the network as reported by the node
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkIdentity {
	pub name: String,
	pub chain_id: u64,
}

impl std::fmt::Display for NetworkIdentity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} (Chain ID: {})", self.name, self.chain_id)
	}
}
