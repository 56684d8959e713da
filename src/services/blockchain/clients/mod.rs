//! Ledger client implementations.
//!
//! Currently provides the EVM JSON-RPC client.

mod evm {
	pub mod client;
}

pub use evm::client::{chain_name, EvmClient};
