//! Ethereum Virtual Machine (EVM) specific data structures.
//!
//! This module contains the ledger-side types the wallet consumes: raw event
//! logs, decoded naming contract events, transactions and receipts.

mod event;
mod log;
mod transaction;

pub use event::{DecodedEvent, NAME_REGISTERED_EVENT, SENT_BY_NAME_EVENT};
pub use log::LogEntry;
pub use transaction::{
	TransactionDetails as EVMTransactionDetails, TransactionReceipt as EVMTransactionReceipt,
	TransactionRequest as EVMTransactionRequest,
};
