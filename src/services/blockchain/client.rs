//! Ledger gateway interface.
//!
//! This module defines the query and invoke surface the wallet consumes from
//! the ledger. Signing is the provider's concern: state-changing calls are
//! submitted through `eth_sendTransaction` on behalf of an account the
//! provider has authorized.

use alloy::primitives::{Address, Bytes, B256, U256};
use async_trait::async_trait;

use crate::{
	models::{
		EVMTransactionDetails, EVMTransactionReceipt, EVMTransactionRequest, LogEntry,
		NetworkIdentity,
	},
	services::blockchain::BlockChainError,
};

/// Defines the ledger operations the wallet depends on
///
/// Every method is a single suspend point; implementations must not retry.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
	/// Requests access to the provider's accounts
	///
	/// # Returns
	/// * `Result<Vec<Address>, BlockChainError>` - Authorized accounts, first is the active one
	async fn request_accounts(&self) -> Result<Vec<Address>, BlockChainError>;

	/// Retrieves the native balance of an account at the latest block
	async fn get_balance(&self, address: Address) -> Result<U256, BlockChainError>;

	/// Retrieves the identity of the connected network
	async fn get_network(&self) -> Result<NetworkIdentity, BlockChainError>;

	/// Retrieves logs emitted by a contract within a block range
	///
	/// # Arguments
	/// * `contract` - Address of the emitting contract
	/// * `from_block` - First block of the range
	/// * `to_block` - Last block of the range, None for the latest block
	async fn get_logs(
		&self,
		contract: Address,
		from_block: u64,
		to_block: Option<u64>,
	) -> Result<Vec<LogEntry>, BlockChainError>;

	/// Retrieves a transaction by its hash
	async fn get_transaction(&self, hash: B256)
		-> Result<EVMTransactionDetails, BlockChainError>;

	/// Retrieves a transaction receipt by its hash
	async fn get_transaction_receipt(
		&self,
		hash: B256,
	) -> Result<EVMTransactionReceipt, BlockChainError>;

	/// Executes a read-only contract call at the latest block
	async fn call(&self, request: EVMTransactionRequest) -> Result<Bytes, BlockChainError>;

	/// Submits a state-changing transaction and returns its hash
	async fn send_transaction(
		&self,
		request: EVMTransactionRequest,
	) -> Result<B256, BlockChainError>;

	/// Waits until a submitted transaction is mined
	///
	/// # Returns
	/// * `Result<EVMTransactionReceipt, BlockChainError>` - Receipt of a successful
	///   transaction, or a transaction error if it reverted or was not mined in time
	async fn wait_for_confirmation(
		&self,
		hash: B256,
	) -> Result<EVMTransactionReceipt, BlockChainError>;
}
