//! HTTP transport implementation for ledger interactions.
//!
//! This module provides a JSON-RPC over HTTP client. At construction it
//! probes the configured endpoints in order of descending weight and binds
//! to the first one that answers; every later request goes to that endpoint.
//! Failed requests are reported, never retried.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::{
	sync::{
		atomic::{AtomicU64, Ordering},
		Arc,
	},
	time::Duration,
};
use url::Url;

use crate::{
	models::Network,
	services::blockchain::{
		transports::{BlockchainTransport, CONNECTION_PROBE_METHOD},
		BlockChainError,
	},
};

/// Timeout applied to every HTTP request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-RPC client bound to a single HTTP endpoint
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client for making requests
	client: Client,
	/// Endpoint selected at connect time
	url: Url,
	/// Monotonic JSON-RPC request id
	next_id: Arc<AtomicU64>,
}

impl HttpTransportClient {
	/// Creates a new HTTP transport bound to the best reachable endpoint
	///
	/// Endpoints with a weight of 0 are skipped. The remaining ones are
	/// probed with `net_version` in order of descending weight.
	///
	/// # Arguments
	/// * `network` - Network configuration containing RPC URLs and weights
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - New client instance or connection error
	pub async fn new(network: &Network) -> Result<Self, BlockChainError> {
		let mut rpc_urls: Vec<_> = network
			.rpc_urls
			.iter()
			.filter(|rpc_url| rpc_url.type_ == "rpc" && rpc_url.weight > 0)
			.collect();

		rpc_urls.sort_by(|a, b| b.weight.cmp(&a.weight));

		let client = ClientBuilder::new()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.map_err(|e| {
				BlockChainError::internal_error(format!("Failed to create HTTP client: {}", e))
			})?;

		for rpc_url in rpc_urls.iter() {
			let url = match Url::parse(&rpc_url.url) {
				Ok(url) => url,
				Err(_) => continue,
			};

			let transport = Self::with_client(client.clone(), url);
			match transport
				.send_raw_request(CONNECTION_PROBE_METHOD, None)
				.await
			{
				Ok(_) => {
					tracing::debug!(url = %rpc_url.url, "Connected to RPC endpoint");
					return Ok(transport);
				}
				Err(e) => {
					tracing::warn!(url = %rpc_url.url, error = %e, "RPC endpoint unreachable");
					continue;
				}
			}
		}

		Err(BlockChainError::connection_error(format!(
			"All RPC URLs failed to connect for network {}",
			network.slug
		)))
	}

	/// Creates a transport for a known endpoint without probing it
	pub fn with_client(client: Client, url: Url) -> Self {
		Self {
			client,
			url,
			next_id: Arc::new(AtomicU64::new(1)),
		}
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	async fn get_current_url(&self) -> String {
		self.url.to_string()
	}

	/// Sends a JSON-RPC request to the bound endpoint
	///
	/// JSON-RPC level errors are returned inside the envelope; only transport
	/// failures and non-success HTTP statuses become errors here.
	async fn send_raw_request(
		&self,
		method: &str,
		params: Option<Value>,
	) -> Result<Value, BlockChainError> {
		let id = self.next_id.fetch_add(1, Ordering::Relaxed);
		let body = self.customize_request(id, method, params);

		tracing::trace!(method, id, "Sending JSON-RPC request");

		let response = self
			.client
			.post(self.url.clone())
			.json(&body)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(BlockChainError::request_error(format!(
				"{} returned HTTP {}",
				method, status
			)));
		}

		response.json::<Value>().await.map_err(|e| {
			BlockChainError::request_error(format!("Failed to parse {} response: {}", method, e))
		})
	}
}
