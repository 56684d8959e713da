//! Domain models and data structures for the name wallet.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `blockchain`: Ledger-side types (logs, decoded events, transactions, receipts)
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (Network, ContractSpec, ActivityItem, session view)

mod blockchain;
mod config;
mod core;

pub use blockchain::evm::{
	DecodedEvent, EVMTransactionDetails, EVMTransactionReceipt, EVMTransactionRequest, LogEntry,
	NAME_REGISTERED_EVENT, SENT_BY_NAME_EVENT,
};

pub use core::{
	ActivityItem, ContractSpec, DetailRecord, HistoryFeed, LookupResult, Network,
	NetworkIdentity, RpcUrl, SessionContext, WalletView, DEFAULT_CONFIRMATION_POLL_MS,
	DEFAULT_CONFIRMATION_TIMEOUT_MS,
};

pub use config::{
	ConfigError, ConfigLoader, DEFAULT_CONTRACT_CONFIG_PATH, DEFAULT_NETWORK_CONFIG_PATH,
};
