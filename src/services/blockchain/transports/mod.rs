//! Network transport implementations for the ledger gateway.
//!
//! Provides the JSON-RPC transport abstraction and its HTTP implementation.

mod http;

pub use http::HttpTransportClient;

use serde_json::{json, Value};

use crate::services::blockchain::BlockChainError;

/// Probe request used to check that an endpoint is a live JSON-RPC node
pub const CONNECTION_PROBE_METHOD: &str = "net_version";

/// Base trait for all ledger transport clients
#[async_trait::async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Get the URL currently used by the transport
	async fn get_current_url(&self) -> String;

	/// Send a raw JSON-RPC request and return the full response envelope
	async fn send_raw_request(
		&self,
		method: &str,
		params: Option<Value>,
	) -> Result<Value, BlockChainError>;

	/// Builds the JSON-RPC 2.0 envelope for a request
	fn customize_request(&self, id: u64, method: &str, params: Option<Value>) -> Value {
		json!({
			"jsonrpc": "2.0",
			"id": id,
			"method": method,
			"params": params.unwrap_or_else(|| json!([]))
		})
	}
}
