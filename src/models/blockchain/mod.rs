//! Blockchain-specific model implementations.

pub mod evm;
