//! Naming contract service.
//!
//! Encodes the contract's read and write functions against its ABI and
//! dispatches them through the ledger gateway.

mod error;
mod naming;

pub use error::ContractError;
pub use naming::NamingContract;
