//! Ledger gateway interfaces and implementations.
//!
//! Provides the abstraction the wallet uses to read from and write to the
//! ledger, and its JSON-RPC implementation. Includes:
//!
//! - The `LedgerGateway` trait
//! - The EVM client
//! - The HTTP JSON-RPC transport
//! - Error handling for ledger operations

mod client;
mod clients;
mod error;
mod transports;

pub use client::LedgerGateway;
pub use clients::{chain_name, EvmClient};
pub use error::BlockChainError;
pub use transports::{BlockchainTransport, HttpTransportClient, CONNECTION_PROBE_METHOD};
