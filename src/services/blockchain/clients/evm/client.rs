//! EVM-compatible ledger gateway implementation.
//!
//! This module provides the JSON-RPC implementation of [`LedgerGateway`] for
//! Ethereum and other EVM-compatible chains, supporting account access,
//! balance and network lookup, log retrieval, transaction and receipt lookup,
//! contract calls and transaction submission.

use std::time::Duration;

use alloy::primitives::{Address, Bytes, B256, U256, U64};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
	models::{
		EVMTransactionDetails, EVMTransactionReceipt, EVMTransactionRequest, LogEntry, Network,
		NetworkIdentity,
	},
	services::blockchain::{
		client::LedgerGateway,
		transports::{BlockchainTransport, HttpTransportClient},
		BlockChainError,
	},
};

/// Client implementation for Ethereum Virtual Machine (EVM) compatible ledgers
///
/// Provides high-level access to ledger data and operations through a
/// JSON-RPC transport.
#[derive(Clone, Debug)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying transport client for RPC communication
	transport: T,
	/// Network the client was created for
	network: Network,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(transport: T, network: Network) -> Self {
		Self { transport, network }
	}
}

impl EvmClient<HttpTransportClient> {
	/// Creates a new EVM client instance
	///
	/// # Arguments
	/// * `network` - Network configuration containing RPC endpoints and chain details
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - New client instance or connection error
	pub async fn new(network: &Network) -> Result<Self, BlockChainError> {
		let transport = HttpTransportClient::new(network).await?;
		Ok(Self::new_with_transport(transport, network.clone()))
	}
}

/// Name of a well-known chain id, if any
pub fn chain_name(chain_id: u64) -> Option<&'static str> {
	match chain_id {
		1 => Some("mainnet"),
		10 => Some("optimism"),
		56 => Some("bnb"),
		137 => Some("matic"),
		8453 => Some("base"),
		17000 => Some("holesky"),
		42161 => Some("arbitrum"),
		11155111 => Some("sepolia"),
		_ => None,
	}
}

impl<T: Send + Sync + Clone + BlockchainTransport> EvmClient<T> {
	/// Sends a request and extracts the `result` field of the response
	///
	/// A JSON-RPC `error` object becomes a request error carrying the node's
	/// message (and revert data when it is a string), so callers can inspect
	/// revert reasons.
	async fn request(&self, method: &str, params: Value) -> Result<Value, BlockChainError> {
		let response = self
			.transport
			.send_raw_request(method, Some(params))
			.await?;

		if let Some(error) = response.get("error") {
			let message = error
				.get("message")
				.and_then(|m| m.as_str())
				.unwrap_or("unknown JSON-RPC error");
			let detail = match error.get("data").and_then(|d| d.as_str()) {
				Some(data) => format!("{} ({})", message, data),
				None => message.to_string(),
			};
			return Err(BlockChainError::request_error(format!(
				"{} failed: {}",
				method, detail
			)));
		}

		// Extract the "result" field from the JSON-RPC response
		response
			.get("result")
			.cloned()
			.ok_or_else(|| BlockChainError::request_error("Missing 'result' field".to_string()))
	}

	/// Sends a request and deserializes a non-null result
	async fn request_typed<R: DeserializeOwned>(
		&self,
		method: &str,
		params: Value,
		what: &str,
	) -> Result<R, BlockChainError> {
		let result = self.request(method, params).await?;
		if result.is_null() {
			return Err(BlockChainError::request_error(format!("{} not found", what)));
		}
		serde_json::from_value(result)
			.map_err(|e| BlockChainError::request_error(format!("Failed to parse {}: {}", what, e)))
	}

	/// Retrieves a receipt, returning None while the transaction is pending
	async fn fetch_receipt(
		&self,
		hash: B256,
	) -> Result<Option<EVMTransactionReceipt>, BlockChainError> {
		let result = self
			.request("eth_getTransactionReceipt", json!([hash]))
			.await?;
		if result.is_null() {
			return Ok(None);
		}
		serde_json::from_value(result).map(Some).map_err(|e| {
			BlockChainError::request_error(format!("Failed to parse receipt: {}", e))
		})
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> LedgerGateway for EvmClient<T> {
	async fn request_accounts(&self) -> Result<Vec<Address>, BlockChainError> {
		self.request_typed("eth_requestAccounts", json!([]), "accounts")
			.await
	}

	async fn get_balance(&self, address: Address) -> Result<U256, BlockChainError> {
		self.request_typed("eth_getBalance", json!([address, "latest"]), "balance")
			.await
	}

	/// Resolves the network name from the chain id
	///
	/// Unknown chain ids fall back to the configured network name. A chain id
	/// different from the configured one is reported but not rejected.
	async fn get_network(&self) -> Result<NetworkIdentity, BlockChainError> {
		let chain_id: U64 = self
			.request_typed("eth_chainId", json!([]), "chain id")
			.await?;
		let chain_id = chain_id.to::<u64>();

		if let Some(expected) = self.network.chain_id {
			if expected != chain_id {
				tracing::warn!(
					expected,
					actual = chain_id,
					"Connected node reports an unexpected chain id"
				);
			}
		}

		let name = chain_name(chain_id)
			.map(str::to_string)
			.unwrap_or_else(|| self.network.name.clone());

		Ok(NetworkIdentity { name, chain_id })
	}

	async fn get_logs(
		&self,
		contract: Address,
		from_block: u64,
		to_block: Option<u64>,
	) -> Result<Vec<LogEntry>, BlockChainError> {
		let to_block = to_block
			.map(|block| format!("0x{:x}", block))
			.unwrap_or_else(|| "latest".to_string());

		let params = json!([{
			"address": contract,
			"fromBlock": format!("0x{:x}", from_block),
			"toBlock": to_block
		}]);

		self.request_typed("eth_getLogs", params, "logs").await
	}

	async fn get_transaction(
		&self,
		hash: B256,
	) -> Result<EVMTransactionDetails, BlockChainError> {
		self.request_typed("eth_getTransactionByHash", json!([hash]), "Transaction")
			.await
	}

	async fn get_transaction_receipt(
		&self,
		hash: B256,
	) -> Result<EVMTransactionReceipt, BlockChainError> {
		self.fetch_receipt(hash).await?.ok_or_else(|| {
			BlockChainError::request_error("Transaction receipt not found".to_string())
		})
	}

	async fn call(&self, request: EVMTransactionRequest) -> Result<Bytes, BlockChainError> {
		self.request_typed("eth_call", json!([request, "latest"]), "call result")
			.await
	}

	async fn send_transaction(
		&self,
		request: EVMTransactionRequest,
	) -> Result<B256, BlockChainError> {
		let to = request.to;
		let hash: B256 = self
			.request_typed("eth_sendTransaction", json!([request]), "transaction hash")
			.await?;
		tracing::info!(tx_hash = %hash, to = %to, "Transaction submitted");
		Ok(hash)
	}

	/// Polls for the receipt every `confirmation_poll_ms` until
	/// `confirmation_timeout_ms` elapses
	async fn wait_for_confirmation(
		&self,
		hash: B256,
	) -> Result<EVMTransactionReceipt, BlockChainError> {
		let poll_interval = Duration::from_millis(self.network.confirmation_poll_ms);
		let timeout = Duration::from_millis(self.network.confirmation_timeout_ms);

		let wait = async {
			loop {
				match self.fetch_receipt(hash).await {
					Ok(Some(receipt)) => return Ok(receipt),
					Ok(None) => tokio::time::sleep(poll_interval).await,
					Err(e) => return Err(e),
				}
			}
		};

		let receipt: EVMTransactionReceipt = tokio::time::timeout(timeout, wait)
			.await
			.map_err(|_| {
				BlockChainError::transaction_error(format!(
					"Transaction {} was not confirmed within {}ms",
					hash, self.network.confirmation_timeout_ms
				))
			})??;

		if !receipt.succeeded() {
			return Err(BlockChainError::transaction_error(format!(
				"Transaction {} reverted",
				hash
			)));
		}

		tracing::info!(
			tx_hash = %hash,
			block = receipt.block_number(),
			"Transaction confirmed"
		);
		Ok(receipt)
	}
}
