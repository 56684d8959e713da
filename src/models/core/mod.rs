//! Core domain models for the wallet.
//!
//! This module contains the chain-agnostic data structures:
//! - Network: connection configuration and reported identity
//! - Contract: the naming contract description loaded from `contract.json`
//! - Activity: reconciled history items and their lazily fetched detail
//! - Session: connection state and the derived dashboard view

mod activity;
mod contract;
mod network;
mod session;

pub use activity::{ActivityItem, DetailRecord, HistoryFeed};
pub use contract::ContractSpec;
pub use network::{
	Network, NetworkIdentity, RpcUrl, DEFAULT_CONFIRMATION_POLL_MS,
	DEFAULT_CONFIRMATION_TIMEOUT_MS,
};
pub use session::{LookupResult, SessionContext, WalletView};
