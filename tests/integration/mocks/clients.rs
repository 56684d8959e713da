//! Mock implementations of the ledger gateway and its transport.
//!
//! - [`MockLedgerGateway`] - Mock of the gateway consumed by the wallet services
//! - [`MockEVMTransportClient`] - Mock of the JSON-RPC transport behind the EVM client

use alloy::primitives::{Address, Bytes, B256, U256};
use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use name_wallet::{
	models::{
		EVMTransactionDetails, EVMTransactionReceipt, EVMTransactionRequest, LogEntry,
		NetworkIdentity,
	},
	services::blockchain::{BlockChainError, BlockchainTransport, LedgerGateway},
};

mock! {
	/// Mock implementation of the ledger gateway.
	///
	/// Simulates node responses without network calls.
	pub LedgerGateway {}

	#[async_trait]
	impl LedgerGateway for LedgerGateway {
		async fn request_accounts(&self) -> Result<Vec<Address>, BlockChainError>;
		async fn get_balance(&self, address: Address) -> Result<U256, BlockChainError>;
		async fn get_network(&self) -> Result<NetworkIdentity, BlockChainError>;
		async fn get_logs(
			&self,
			contract: Address,
			from_block: u64,
			to_block: Option<u64>,
		) -> Result<Vec<LogEntry>, BlockChainError>;
		async fn get_transaction(&self, hash: B256) -> Result<EVMTransactionDetails, BlockChainError>;
		async fn get_transaction_receipt(
			&self,
			hash: B256,
		) -> Result<EVMTransactionReceipt, BlockChainError>;
		async fn call(&self, request: EVMTransactionRequest) -> Result<Bytes, BlockChainError>;
		async fn send_transaction(
			&self,
			request: EVMTransactionRequest,
		) -> Result<B256, BlockChainError>;
		async fn wait_for_confirmation(
			&self,
			hash: B256,
		) -> Result<EVMTransactionReceipt, BlockChainError>;
	}
}

mock! {
	/// Mock implementation of a JSON-RPC transport.
	pub EVMTransportClient {}

	#[async_trait]
	impl BlockchainTransport for EVMTransportClient {
		async fn get_current_url(&self) -> String;
		async fn send_raw_request(
			&self,
			method: &str,
			params: Option<Value>,
		) -> Result<Value, BlockChainError>;
	}

	impl Clone for EVMTransportClient {
		fn clone(&self) -> Self;
	}
}
